pub mod country;
pub mod dataset;
pub mod date;
pub mod error;
pub mod visa;
pub mod visit;

pub use country::*;
pub use dataset::*;
pub use date::*;
pub use error::{Error, Result};
pub use visa::*;
pub use visit::*;
