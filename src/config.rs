use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = ".depsketch.toml";

const DEFAULT_SOURCE_ROOT: &str = "src";
const DEFAULT_ENTRY: &str = "App";
const DEFAULT_OUTPUT: &str = "dependencies.excalidraw";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub scan: ScanConfig,
    pub diagram: DiagramConfig,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Name of the source directory scanned beneath the project root.
    pub source_root: String,
}

#[derive(Debug, Clone)]
pub struct DiagramConfig {
    /// Node anchored at the top of the layout.
    pub entry: String,
    /// File the Excalidraw document is written to.
    pub output: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    scan: Option<RawScan>,
    diagram: Option<RawDiagram>,
}

#[derive(Debug, Deserialize)]
struct RawScan {
    source_root: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDiagram {
    entry: Option<String>,
    output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan: ScanConfig {
                source_root: DEFAULT_SOURCE_ROOT.to_string(),
            },
            diagram: DiagramConfig {
                entry: DEFAULT_ENTRY.to_string(),
                output: DEFAULT_OUTPUT.to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(project_path: &Path) -> Result<Self, ConfigError> {
        let config_path = project_path.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let raw: RawConfig = toml::from_str(&content)?;

        let scan = ScanConfig {
            source_root: raw
                .scan
                .and_then(|s| s.source_root)
                .unwrap_or_else(|| DEFAULT_SOURCE_ROOT.to_string()),
        };

        let diagram = match raw.diagram {
            Some(d) => DiagramConfig {
                entry: d.entry.unwrap_or_else(|| DEFAULT_ENTRY.to_string()),
                output: d.output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            },
            None => Config::default().diagram,
        };

        Ok(Self { scan, diagram })
    }
}

/// Starter config written by `depsketch init`.
pub fn generate_config_template() -> String {
    format!(
        r#"# depsketch configuration

[scan]
# Directory under the project root that holds the source tree.
source_root = "{DEFAULT_SOURCE_ROOT}"

[diagram]
# Node pinned at the top of the layout, usually the application root component.
entry = "{DEFAULT_ENTRY}"
# Where the Excalidraw document is written.
output = "{DEFAULT_OUTPUT}"
"#
    )
}
