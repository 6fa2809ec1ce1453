//! Single-page builder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::json::compact_json;
use crate::script::{inject_config, ScriptError};
use crate::shell::{Markers, ShellError, ShellTemplate};

/// Configuration for building the page.
///
/// Input and output paths are resolved against `root`; absolute paths are
/// used as given.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root directory
    pub root: PathBuf,

    /// Script template
    pub script: PathBuf,

    /// HTML shell
    pub shell: PathBuf,

    /// Stylesheet
    pub styles: PathBuf,

    /// JSON config document
    pub config: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Marker and placeholder tokens
    pub markers: Markers,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            script: PathBuf::from("src/app.js"),
            shell: PathBuf::from("src/index.html"),
            styles: PathBuf::from("src/styles.css"),
            config: PathBuf::from("config/games.json"),
            output_dir: PathBuf::from("dist"),
            markers: Markers::default(),
        }
    }
}

impl BuildConfig {
    /// Default layout under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Resolved output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    /// Resolved output file, `<output_dir>/index.html`.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join("index.html")
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildReport {
    /// Written file
    pub output_path: PathBuf,

    /// Size of the written file in bytes
    pub bytes: u64,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid JSON in {}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid script template {}", .path.display())]
    Script { path: PathBuf, source: ScriptError },

    #[error("Invalid page shell {}", .path.display())]
    Shell { path: PathBuf, source: ShellError },

    #[error("Failed to write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Builds the single-file page.
pub struct Builder {
    config: BuildConfig,
}

impl Builder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build the page and write it to the output path.
    ///
    /// Every input is read and validated before the output file is opened,
    /// so a failed build leaves any previous output untouched.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        let output_dir = self.config.output_dir();
        fs::create_dir_all(&output_dir).map_err(|source| BuildError::Write {
            path: output_dir.clone(),
            source,
        })?;

        let html = self.assemble()?;

        let output_path = self.config.output_path();
        fs::write(&output_path, &html).map_err(|source| BuildError::Write {
            path: output_path.clone(),
            source,
        })?;

        let bytes = fs::metadata(&output_path)
            .map_err(|source| BuildError::Read {
                path: output_path.clone(),
                source,
            })?
            .len();

        let duration = start.elapsed();
        tracing::debug!("Wrote {} bytes to {}", bytes, output_path.display());

        Ok(BuildReport {
            output_path,
            bytes,
            duration_ms: duration.as_millis() as u64,
        })
    }

    /// Read and validate every input, returning the assembled page without
    /// writing anything.
    pub fn assemble(&self) -> Result<String, BuildError> {
        let markers = &self.config.markers;

        let config_path = self.config.resolve(&self.config.config);
        let config_json = compact_json(&read(&config_path)?).map_err(|source| {
            BuildError::Config {
                path: config_path.clone(),
                source,
            }
        })?;
        tracing::debug!(
            "Compacted {} to {} bytes",
            config_path.display(),
            config_json.len()
        );

        let script_path = self.config.resolve(&self.config.script);
        let script = inject_config(
            &read(&script_path)?,
            &markers.config_placeholder,
            &config_json,
        )
        .map_err(|source| BuildError::Script {
            path: script_path.clone(),
            source,
        })?;

        let shell_path = self.config.resolve(&self.config.shell);
        let shell_source = read(&shell_path)?;
        let styles = read(&self.config.resolve(&self.config.styles))?;

        let shell =
            ShellTemplate::parse(&shell_source, markers).map_err(|source| BuildError::Shell {
                path: shell_path.clone(),
                source,
            })?;

        Ok(shell.assemble(&styles, &script))
    }
}

fn read(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })
}
