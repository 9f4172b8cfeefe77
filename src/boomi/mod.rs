//! Boomi AtomSphere integration.
//!
//! Everything that talks to (or reasons about) the AtomSphere platform lives
//! here: credential validation, the REST client, and component XML shaping.
//! The tool handlers in `domains::tools` compose these pieces.

pub mod client;
pub mod component;
pub mod credentials;

pub use client::{ApiFailure, ApiOutcome, BoomiClient};
pub use component::{ComponentSummary, ComponentXmlError};
