//! Project file (aphelion.toml) loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aphelion_bundle::{BuildConfig, Markers, MARKER_SCRIPT, MARKER_STYLES, PLACEHOLDER_CONFIG};
use serde::Deserialize;

/// Default project file name, looked up under the root.
pub const PROJECT_FILE: &str = "aphelion.toml";

/// Project file structure (aphelion.toml).
#[derive(Debug, Deserialize, Default)]
struct ProjectFile {
    #[serde(default)]
    paths: PathsConfig,
    #[serde(default)]
    markers: MarkersConfig,
}

#[derive(Debug, Deserialize)]
struct PathsConfig {
    #[serde(default = "default_script")]
    script: String,
    #[serde(default = "default_shell")]
    shell: String,
    #[serde(default = "default_styles")]
    styles: String,
    #[serde(default = "default_config")]
    config: String,
    #[serde(default = "default_out_dir")]
    out_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
            shell: default_shell(),
            styles: default_styles(),
            config: default_config(),
            out_dir: default_out_dir(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct MarkersConfig {
    #[serde(default = "default_config_placeholder")]
    config_placeholder: String,
    #[serde(default = "default_styles_marker")]
    styles: String,
    #[serde(default = "default_script_marker")]
    script: String,
}

impl Default for MarkersConfig {
    fn default() -> Self {
        Self {
            config_placeholder: default_config_placeholder(),
            styles: default_styles_marker(),
            script: default_script_marker(),
        }
    }
}

fn default_script() -> String {
    "src/app.js".to_string()
}
fn default_shell() -> String {
    "src/index.html".to_string()
}
fn default_styles() -> String {
    "src/styles.css".to_string()
}
fn default_config() -> String {
    "config/games.json".to_string()
}
fn default_out_dir() -> String {
    "dist".to_string()
}
fn default_config_placeholder() -> String {
    PLACEHOLDER_CONFIG.to_string()
}
fn default_styles_marker() -> String {
    MARKER_STYLES.to_string()
}
fn default_script_marker() -> String {
    MARKER_SCRIPT.to_string()
}

/// Load the project file if it exists.
/// Returns an error if the file exists but is malformed.
fn load_project_file(path: &Path) -> Result<ProjectFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let project: ProjectFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded project file {}", path.display());
        return Ok(project);
    }
    tracing::debug!("No project file at {}, using defaults", path.display());
    Ok(ProjectFile::default())
}

/// Resolve the build configuration for `root`.
///
/// `project` is resolved against `root` unless absolute.
pub fn load(root: &Path, project: &Path) -> Result<BuildConfig> {
    let file = load_project_file(&root.join(project))?;

    Ok(BuildConfig {
        root: root.to_path_buf(),
        script: PathBuf::from(file.paths.script),
        shell: PathBuf::from(file.paths.shell),
        styles: PathBuf::from(file.paths.styles),
        config: PathBuf::from(file.paths.config),
        output_dir: PathBuf::from(file.paths.out_dir),
        markers: Markers {
            config_placeholder: file.markers.config_placeholder,
            styles: file.markers.styles,
            script: file.markers.script,
        },
    })
}
