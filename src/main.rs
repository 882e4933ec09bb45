use simli_text2video::{app, config::Config, errors::Result, simli::simli::Simli, trace};

#[tokio::main]
async fn main() -> Result<()> {
    // Populate the environment from a local untracked .env file, if any.
    let _ = dotenvy::dotenv();

    trace::init_tracing_subscriber();

    // Load config
    let config = Config::load()?;

    let client = Simli::new();
    let output_dir = std::env::current_dir()?;

    let outcome = app::run(&config, &client, &output_dir, true).await?;
    tracing::info!(?outcome, "run finished");

    Ok(())
}
