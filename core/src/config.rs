//! Logger configuration.
//!
//! Sources are layered with figment, later ones winning: built-in defaults,
//! an optional TOML file, then `NETLOG_`-prefixed environment variables.
//!
//! ```toml
//! output = "tracing"   # stdout | stderr | tracing
//! markers = "ascii"    # emoji | ascii
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::output::{ConsoleOutput, LogOutput, TracingOutput};
use crate::render::Markers;

/// Where rendered sections go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
    Tracing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    #[default]
    Emoji,
    Ascii,
}

impl MarkerStyle {
    pub fn markers(self) -> Markers {
        match self {
            MarkerStyle::Emoji => Markers::EMOJI,
            MarkerStyle::Ascii => Markers::ASCII,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub output: OutputTarget,
    #[serde(default)]
    pub markers: MarkerStyle,
}

impl LoggerConfig {
    /// Loads configuration. A `path` that does not exist is an error; with no
    /// path only defaults and the environment apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(LoggerConfig::default()));
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }
        let config = figment.merge(Env::prefixed("NETLOG_")).extract()?;
        Ok(config)
    }

    /// The sink selected by `output`.
    pub fn build_output(&self) -> Box<dyn LogOutput + Send + Sync> {
        match self.output {
            OutputTarget::Stdout => Box::new(ConsoleOutput::stdout()),
            OutputTarget::Stderr => Box::new(ConsoleOutput::stderr()),
            OutputTarget::Tracing => Box::new(TracingOutput),
        }
    }
}
