pub mod config;
pub mod core;
pub mod sections;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::dispatcher::Guide;
pub use crate::core::menu::{Demo, MenuChoice, Section};
pub use crate::core::timing;
pub use crate::utils::error::{GuideError, Result};
