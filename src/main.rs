use blogview::{parser, webserver};

const HELP: &str = "
    blogview

    USAGE:
    blogview [OPTIONS]

    FLAGS:
    -h, --help            Prints help information

    OPTIONS:
    --port NUMBER         Sets the port for the webserver
    --addr SOCKETADDR     Sets the socket address for the webserver (--addr takes priority over --port in case of overlap)
    --api URL             Sets the base url of the posts API (falls back to BLOG_API_URL, then http://localhost:3000/api)
";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let mut arguments = pico_args::Arguments::from_env();
    if arguments.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blogview=info")),
        )
        .init();

    let app_config = parser::parse_arguments(arguments)?;
    webserver::run_ws(app_config).await
}
