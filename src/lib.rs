pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod ui;

pub use domain::{IncrementTarget, Version};
pub use error::{BumpError, Result};
