use sala_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    dotenv::dotenv().ok();

    print_banner();

    let config = Config::from_env();
    sala_server::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Sala server starting...");

    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
