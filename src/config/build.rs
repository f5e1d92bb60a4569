//! `[build]` section configuration.
//!
//! Paths for the generation pass: data file, template, output directory
//! and the generated file name pattern.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in demongen.toml - page generation configuration.
///
/// All paths are relative to the project root until `update_with_cli`
/// normalizes them to absolute paths.
///
/// # Example
/// ```toml
/// [build]
/// data = "data/demons.json"        # Demon list source
/// template = "demon-template.html" # Shared page template
/// output = "demons"                # Generated pages land here
/// page_prefix = "demon-"           # demon-<id>.html
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Demon data file: JSON object with a top-level `demons` array.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Page template containing the title placeholder line.
    #[serde(default = "defaults::build::template")]
    #[educe(Default = defaults::build::template())]
    pub template: PathBuf,

    /// Directory generated pages are written to.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// File name prefix for generated pages (`<prefix><id>.html`).
    #[serde(default = "defaults::build::page_prefix")]
    #[educe(Default = defaults::build::page_prefix())]
    pub page_prefix: String,
}
