//! `[base]` section configuration.
//!
//! Basic site metadata, used when scaffolding a new project.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in demongen.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Geometry Dash Demon List"
/// description = "The hardest rated levels, ranked"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title, placed in the scaffolded template's page header.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Site description for the scaffolded template's meta tags.
    #[serde(default)]
    pub description: String,
}
