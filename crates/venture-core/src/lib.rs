pub mod catalog;
pub mod config;
pub mod engagement;
pub mod error;
pub mod journal;
pub mod paths;
pub mod progress;
pub mod recommend;
pub mod types;

pub use error::{GuideError, Result};
