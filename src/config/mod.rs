//! Runtime configuration for the command-line reader.
//!
//! Configuration comes either from a JSON file (`--config path.json`) or from
//! a bare image path with optional flags:
//!
//! ```text
//! grid_reader <image> [--json <out.json>] [--format text|json|both] [--debug-image <out.png>]
//! grid_reader --config <config.json>
//! ```
use crate::detector::ReaderParams;
use crate::error::{GridError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, Self::Text | Self::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    fn parse(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "both" => Ok(Self::Both),
            other => Err(GridError::Config(format!(
                "unknown output format '{other}' (expected text, json or both)"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub json_out: Option<PathBuf>,
    pub debug_image: Option<PathBuf>,
    /// Edge length of one cell in the debug image.
    pub debug_cell_px: Option<u32>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: ReaderParams,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RuntimeConfig {
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            params: ReaderParams::default(),
            output: OutputConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        GridError::Config(format!("Failed to read config {}: {e}", path.display()))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        GridError::Config(format!("Failed to parse config {}: {e}", path.display()))
    })
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <image> [--json <out.json>] [--format text|json|both] [--debug-image <out.png>]\n       {program} --config <config.json>"
    )
}

/// Parse command-line arguments (without the program name).
///
/// Flags given next to `--config` override the file's output section.
pub fn parse_cli<I>(program: &str, args: I) -> Result<RuntimeConfig>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut input: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut format: Option<OutputFormat> = None;
    let mut json_out: Option<PathBuf> = None;
    let mut debug_image: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| {
                GridError::Config(format!("{flag} expects a value\n{}", usage(program)))
            })
        };
        match arg.as_str() {
            "--config" => config_path = Some(value("--config")?.into()),
            "--json" => json_out = Some(value("--json")?.into()),
            "--format" => format = Some(OutputFormat::parse(&value("--format")?)?),
            "--debug-image" => debug_image = Some(value("--debug-image")?.into()),
            "-h" | "--help" => return Err(GridError::Config(usage(program))),
            flag if flag.starts_with("--") => {
                return Err(GridError::Config(format!(
                    "unknown flag {flag}\n{}",
                    usage(program)
                )))
            }
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => {
                return Err(GridError::Config(format!(
                    "unexpected argument {extra}\n{}",
                    usage(program)
                )))
            }
        }
    }

    let mut config = match (config_path, input) {
        (Some(path), None) => load_config(&path)?,
        (None, Some(input)) => RuntimeConfig::for_input(input),
        (Some(_), Some(_)) => {
            return Err(GridError::Config(format!(
                "give either an image path or --config, not both\n{}",
                usage(program)
            )))
        }
        (None, None) => return Err(GridError::Config(usage(program))),
    };
    if let Some(format) = format {
        config.output.format = format;
    }
    if json_out.is_some() {
        config.output.json_out = json_out;
    }
    if debug_image.is_some() {
        config.output.debug_image = debug_image;
    }
    Ok(config)
}
