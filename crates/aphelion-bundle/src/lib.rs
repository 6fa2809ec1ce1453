//! Single-file HTML bundler for the APHELION hub.
//!
//! Merges a script template, a stylesheet, an HTML shell and a JSON config
//! document into one self-contained page.

pub mod builder;
pub mod json;
pub mod script;
pub mod shell;

pub use builder::{BuildConfig, BuildError, BuildReport, Builder};
pub use json::compact_json;
pub use script::{inject_config, ScriptError};
pub use shell::{Markers, ShellError, ShellTemplate};

/// Token in the script template replaced by the compact config JSON.
pub const PLACEHOLDER_CONFIG: &str = "__APHELION_CONFIG__";

/// Shell marker where the stylesheet is inserted.
pub const MARKER_STYLES: &str = "__STYLES__";

/// Shell marker where the script is inserted.
pub const MARKER_SCRIPT: &str = "__SCRIPT__";
