//! Transport layer for the MCP server.
//!
//! The server communicates over standard input/output: the host runtime
//! delivers already-framed calls on stdin and reads replies from stdout.
//! Logging therefore always goes to stderr.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
