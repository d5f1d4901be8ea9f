use std::net::SocketAddr;

pub struct Config {
    pub webserver_address: Option<SocketAddr>,
    pub webserver_port: Option<u16>,
    pub api_base_url: String,
}
