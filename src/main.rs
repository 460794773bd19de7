use spotirec::{config::Config, error, server};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load environment. Err: {}", e),
    };

    server::start_api_server(config).await;
}
