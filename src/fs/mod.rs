//! Opening files from symbolic access modes. See [`file`] for the entry points.

pub mod file;

mod error;
mod file_type;
mod native;

pub use error::*;
pub use file_type::*;
pub(crate) use native::*;
