pub mod config;
pub mod error;
pub mod sample;
pub mod time;
pub mod types;

pub use config::SynapseConfig;
pub use error::{Result, SynapseError};
pub use time::{format_relative_time, TimeStyle};
pub use types::*;
