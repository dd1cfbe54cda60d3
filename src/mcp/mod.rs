//! MCP server
//!
//! Exposes the batch tools over the Model Context Protocol.

mod server;

pub use server::FreezerBatchService;
