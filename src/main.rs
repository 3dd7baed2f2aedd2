use anyhow::Result;
use codementor::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
