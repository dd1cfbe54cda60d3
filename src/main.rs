//! Freezer Batch
//!
//! An MCP server for freezer batch cocktail calculations.

use freezer_batch::about;
use freezer_batch::config::ServerConfig;
use freezer_batch::mcp::FreezerBatchService;
use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; stdout carries MCP traffic
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("freezer_batch=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env()?;
    about::print_startup_banner(&config);

    eprintln!("Starting MCP server on stdio...");
    let service = FreezerBatchService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
