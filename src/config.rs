//! Analysis settings, loadable from JSON.
use crate::error::BindpathError;
use bindpath_analyzer::DEFAULT_MARKER;
use bindpath_executor::ExecutorImpl;
use bindpath_expr::CaptureRepresentation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Text that marks a file as produced by a tool when found on its first line.
pub const GENERATED_MARKER: &str = "<auto-generated>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Attribute name that marks binding-expression parameters.
    pub marker: String,
    /// How captured locals are represented when lowering lambdas.
    pub capture: CaptureRepresentation,
    /// Check call sites on the rayon pool instead of the calling thread.
    pub parallel: bool,
    /// When false, generated files still contribute declarations but are not
    /// checked.
    pub analyze_generated: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            capture: CaptureRepresentation::default(),
            parallel: true,
            analyze_generated: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_json(json: &str) -> Result<Self, BindpathError> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| BindpathError::Config(e.to_string()))?;
        if config.marker.trim().is_empty() {
            return Err(BindpathError::Config("`marker` must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BindpathError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            BindpathError::Config(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        log::debug!("loaded configuration from {}", path.display());
        Self::from_json(&json)
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_capture(mut self, capture: CaptureRepresentation) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_analyze_generated(mut self, analyze_generated: bool) -> Self {
        self.analyze_generated = analyze_generated;
        self
    }

    pub fn executor(&self) -> ExecutorImpl {
        ExecutorImpl::for_parallelism(self.parallel)
    }
}

/// Whether `text` declares itself generated on its first line.
pub fn is_generated(text: &str) -> bool {
    text.lines()
        .next()
        .is_some_and(|line| line.contains(GENERATED_MARKER))
}
