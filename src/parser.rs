use dotenv::dotenv;

use crate::config;

const DEFAULT_API_URL: &str = "http://localhost:3000/api";

pub fn parse_arguments(mut args: pico_args::Arguments) -> Result<config::Config, anyhow::Error> {
    let port_opt = args.value_from_str("--port");
    let address_opt = args.value_from_str("--addr");

    if port_opt.is_err() && address_opt.is_err() {
        return Err(anyhow::anyhow!(
            "Neither port or socket address provided for the webserver"
        ));
    }

    dotenv().ok();

    let api_flag: Result<String, pico_args::Error> = args.value_from_str("--api");
    let api_base_url = api_flag
        .ok()
        .or_else(|| std::env::var("BLOG_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    Ok(config::Config {
        webserver_address: address_opt.ok(),
        webserver_port: port_opt.ok(),
        api_base_url,
    })
}
