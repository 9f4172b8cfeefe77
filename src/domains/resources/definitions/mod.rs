//! Resource definitions module.
//!
//! Each templated resource is defined in its own file with its URI template,
//! metadata, and a resolver for concrete URIs.

mod greeting;

pub use greeting::GreetingResource;
