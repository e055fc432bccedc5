use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "depsketch")]
#[command(about = "Sketch a front-end module dependency graph as an Excalidraw diagram")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project to analyze (defaults to current directory)
    /// Used when no subcommand is specified
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Scan a project and emit the dependency diagram (default behavior)
    Analyze(AnalyzeArgs),

    /// Generate a starter .depsketch.toml configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Project to analyze (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Diagram output file (defaults to dependencies.excalidraw)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Entry node anchored at the top of the layout (defaults to App)
    #[arg(long)]
    pub entry: Option<String>,

    /// Name of the source directory scanned beneath the project root
    #[arg(long)]
    pub source_root: Option<String>,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            output: None,
            entry: None,
            source_root: None,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Path where to create .depsketch.toml (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}
