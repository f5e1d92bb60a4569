//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Geometry Dash Demon List".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn data() -> PathBuf {
        "data/demons.json".into()
    }

    pub fn template() -> PathBuf {
        "demon-template.html".into()
    }

    pub fn output() -> PathBuf {
        "demons".into()
    }

    pub fn page_prefix() -> String {
        "demon-".into()
    }
}
