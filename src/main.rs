use anyhow::Result;
use scheduler::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
