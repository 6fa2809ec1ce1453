//! Validate inputs without building.

use std::path::Path;

use anyhow::Result;
use aphelion_bundle::Builder;

use crate::project;

/// Run the check command.
pub fn run(root: &Path, project_file: &Path) -> Result<()> {
    let config = project::load(root, project_file)?;
    let html = Builder::new(config).assemble()?;

    tracing::debug!("Assembled page is {} bytes", html.len());
    println!("OK");

    Ok(())
}
