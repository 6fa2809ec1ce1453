//! Single-file build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use aphelion_bundle::{BuildReport, Builder};

use crate::project;

/// Run the build command.
pub fn run(root: &Path, project_file: &Path, out_dir: Option<PathBuf>) -> Result<()> {
    let report = build(root, project_file, out_dir)?;

    println!("{}", summary(&report));

    Ok(())
}

/// The two result lines: absolute output path and file size.
fn summary(report: &BuildReport) -> String {
    let output_path =
        fs::canonicalize(&report.output_path).unwrap_or_else(|_| report.output_path.clone());

    format!(
        "Built: {}\nSize: {} bytes",
        output_path.display(),
        report.bytes
    )
}

fn build(root: &Path, project_file: &Path, out_dir: Option<PathBuf>) -> Result<BuildReport> {
    tracing::info!("Building {}...", root.display());

    let mut config = project::load(root, project_file)?;
    if let Some(out_dir) = out_dir {
        config.output_dir = out_dir;
    }

    let report = Builder::new(config).build()?;

    tracing::info!(
        "Built {} bytes in {}ms",
        report.bytes,
        report.duration_ms
    );

    Ok(report)
}
