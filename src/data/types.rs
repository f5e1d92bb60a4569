//! Data types for the demon list.

use serde::{Deserialize, Serialize};

/// A single rated demon, as stored in `data/demons.json`.
///
/// Only `id` and `name` drive page generation. The remaining fields are
/// managed by the list's submission tooling and carried through untouched;
/// unknown members (timestamps and the like) are ignored on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demon {
    /// Stable identifier, names the output file (`demon-<id>.html`)
    pub id: String,

    /// Demon name, inserted into the page title
    pub name: String,

    /// Level creator
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub creator: String,

    /// Thumbnail image URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// Verification video URL
    #[serde(default, rename = "videoUrl", skip_serializing_if = "String::is_empty")]
    pub video_url: String,

    /// Free-form level description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// The demon list as stored on disk: a top-level object holding a
/// `demons` array.
///
/// A missing `demons` field deserializes to an empty list rather than an
/// error, matching how the rest of the site's tooling treats the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemonList {
    #[serde(default)]
    pub demons: Vec<Demon>,
}
