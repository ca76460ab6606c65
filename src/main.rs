use anyhow::Result;
use event_seeder::Application;
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting event seeder");

    let app = Application::new().await?;
    app.run().await?;

    Ok(())
}
