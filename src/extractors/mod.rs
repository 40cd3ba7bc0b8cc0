//! Request extractors shared by the maintainer handlers.

pub mod activo;
pub mod path;

pub use activo::ActiveFilter;
pub use path::PathParam;
