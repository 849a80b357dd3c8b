use anyhow::Context;
use log::{debug, info};
use robot_credentials::{download_credentials, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let dotenv = dotenv::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Some(e) = dotenv_problem(dotenv) {
        debug!("Ignoring .env file: {}", e);
    }

    // errors are reported, not turned into an exit status
    if let Err(e) = run().await {
        println!("Error: {:#}", e);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    info!("Downloading credentials with {:?}", config);

    let written = download_credentials(&config)
        .await
        .context("Cannot download credentials")?;

    info!(
        "{} credential file(s) stored in {}",
        written.len(),
        config.credential_folder.display()
    );
    Ok(())
}

/// A missing `.env` file is the normal case; anything else is worth a log line.
fn dotenv_problem<T>(result: dotenv::Result<T>) -> Option<dotenv::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}
