use anyhow::Result;
use weatherpush::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
