pub mod analysis;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fs;
pub mod layout;
pub mod model;
pub mod output;
pub mod parser;
pub mod style;

pub use api::{DepsketchError, ProjectSketch, ScanOptions, scan};
pub use cli::Cli;
pub use commands::{cmd_analyze, cmd_init};
pub use config::Config;
pub use model::{DependencyGraph, FileType};
