//! HTTP handlers for the maintainer endpoints.

pub mod maintainers;
pub use maintainers::*;
