pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{local::LocalStorage, HeaderConfig};
pub use core::{etl::HeaderEngine, pipeline::HeaderPipeline};
pub use utils::error::{HeaderError, Result};
