//! Demon page generation.
//!
//! A single sequential pass over the demon list: substitute each demon's
//! name into the shared template and write the page into the output
//! directory. The first failed write aborts the run; pages written before
//! the failure stay on disk.

use crate::{config::SiteConfig, data::DemonList, log};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// Title line the template must carry for substitution to take place.
pub const TITLE_ANCHOR: &str = "<title>Demon Name - Geometry Dash Demon List</title>";

/// Suffix appended to the demon name inside the generated title.
const TITLE_SUFFIX: &str = " - Geometry Dash Demon List";

/// Generate one page per demon, in list order.
///
/// Returns the number of pages written.
pub fn generate_pages(config: &SiteConfig) -> Result<usize> {
    let list = DemonList::from_path(&config.build.data)?;
    let template = fs::read_to_string(&config.build.template).with_context(|| {
        format!(
            "failed to read template `{}`",
            config.build.template.display()
        )
    })?;

    fs::create_dir_all(&config.build.output).with_context(|| {
        format!(
            "failed to create output directory `{}`",
            config.build.output.display()
        )
    })?;

    for demon in &list.demons {
        let path = page_path(config, &demon.id);
        let content = render_page(&template, &demon.name);
        fs::write(&path, content)
            .with_context(|| format!("failed to write `{}`", path.display()))?;
        log!("build"; "{}", path.display());
    }

    log!("build"; "generated {} pages", list.demons.len());
    Ok(list.demons.len())
}

/// Compute the output path for a demon id: `<output>/<prefix><id>.html`.
fn page_path(config: &SiteConfig, id: &str) -> PathBuf {
    config
        .build
        .output
        .join(format!("{}{id}.html", config.build.page_prefix))
}

/// Replace the template's title line with one naming the demon.
///
/// Literal first-occurrence replacement: a template without the anchor
/// passes through byte-identical, and only the first of several anchors
/// is rewritten.
fn render_page(template: &str, name: &str) -> String {
    let title = format!("<title>{name}{TITLE_SUFFIX}</title>");
    template.replacen(TITLE_ANCHOR, &title, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::tempdir;

    const TEMPLATE: &str = "<!DOCTYPE html>\n\
        <html lang=\"en\">\n\
        <head>\n\
        <meta charset=\"utf-8\">\n\
        <title>Demon Name - Geometry Dash Demon List</title>\n\
        </head>\n\
        <body>\n\
        <h1 class=\"demon-title\"></h1>\n\
        </body>\n\
        </html>\n";

    fn config_at(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.data = root.join("data/demons.json");
        config.build.template = root.join("demon-template.html");
        config.build.output = root.join("demons");
        config
    }

    fn write_inputs(root: &Path, data: &str) {
        fs::create_dir_all(root.join("data")).unwrap();
        fs::write(root.join("data/demons.json"), data).unwrap();
        fs::write(root.join("demon-template.html"), TEMPLATE).unwrap();
    }

    // ------------------------------------------------------------------------
    // render_page
    // ------------------------------------------------------------------------

    #[test]
    fn test_render_page_substitutes_name() {
        let page = render_page(TEMPLATE, "Tidal Wave");

        assert!(page.contains("<title>Tidal Wave - Geometry Dash Demon List</title>"));
        assert!(!page.contains(TITLE_ANCHOR));
    }

    #[test]
    fn test_render_page_leaves_rest_untouched() {
        let page = render_page(TEMPLATE, "Tidal Wave");
        let expected = TEMPLATE.replacen(
            TITLE_ANCHOR,
            "<title>Tidal Wave - Geometry Dash Demon List</title>",
            1,
        );

        assert_eq!(page, expected);
    }

    #[test]
    fn test_render_page_without_anchor_is_identity() {
        let template = "<html><head><title>Something else</title></head></html>";
        assert_eq!(render_page(template, "Bloodbath"), template);
    }

    #[test]
    fn test_render_page_replaces_only_first_anchor() {
        let template = format!("{TITLE_ANCHOR}\n{TITLE_ANCHOR}\n");
        let page = render_page(&template, "Acheron");

        assert_eq!(page.matches(TITLE_ANCHOR).count(), 1);
        assert!(page.starts_with("<title>Acheron - Geometry Dash Demon List</title>"));
    }

    #[test]
    fn test_render_page_unicode_name() {
        let page = render_page(TEMPLATE, "ИЛЛЮЗИЯ");
        assert!(page.contains("<title>ИЛЛЮЗИЯ - Geometry Dash Demon List</title>"));
    }

    // ------------------------------------------------------------------------
    // page_path
    // ------------------------------------------------------------------------

    #[test]
    fn test_page_path_pattern() {
        let mut config = SiteConfig::default();
        config.build.output = PathBuf::from("/site/demons");

        assert_eq!(
            page_path(&config, "demon_42"),
            Path::new("/site/demons/demon-demon_42.html")
        );
    }

    #[test]
    fn test_page_path_honors_custom_prefix() {
        let mut config = SiteConfig::default();
        config.build.output = PathBuf::from("/site/out");
        config.build.page_prefix = "level-".into();

        assert_eq!(
            page_path(&config, "7"),
            Path::new("/site/out/level-7.html")
        );
    }

    // ------------------------------------------------------------------------
    // generate_pages
    // ------------------------------------------------------------------------

    #[test]
    fn test_one_page_per_demon() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        write_inputs(
            tmp.path(),
            r#"{"demons": [
                {"id": "a", "name": "Bloodbath"},
                {"id": "b", "name": "Tidal Wave"},
                {"id": "c", "name": "Acheron"}
            ]}"#,
        );

        let count = generate_pages(&config).unwrap();

        assert_eq!(count, 3);
        for id in ["a", "b", "c"] {
            assert!(tmp.path().join(format!("demons/demon-{id}.html")).exists());
        }
    }

    #[test]
    fn test_written_page_has_substituted_title() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        write_inputs(
            tmp.path(),
            r#"{"demons": [{"id": "tw", "name": "Tidal Wave"}]}"#,
        );

        generate_pages(&config).unwrap();

        let page = fs::read_to_string(tmp.path().join("demons/demon-tw.html")).unwrap();
        assert_eq!(page, render_page(TEMPLATE, "Tidal Wave"));
    }

    #[test]
    fn test_runs_are_deterministic() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        write_inputs(
            tmp.path(),
            r#"{"demons": [{"id": "a", "name": "Zodiac"}, {"id": "b", "name": "Tartarus"}]}"#,
        );

        generate_pages(&config).unwrap();
        let first = fs::read(tmp.path().join("demons/demon-a.html")).unwrap();

        generate_pages(&config).unwrap();
        let second = fs::read(tmp.path().join("demons/demon-a.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_overwrites_previous_output() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        write_inputs(tmp.path(), r#"{"demons": [{"id": "a", "name": "Sonic Wave"}]}"#);

        fs::create_dir_all(tmp.path().join("demons")).unwrap();
        fs::write(tmp.path().join("demons/demon-a.html"), "stale").unwrap();

        generate_pages(&config).unwrap();

        let page = fs::read_to_string(tmp.path().join("demons/demon-a.html")).unwrap();
        assert!(page.contains("Sonic Wave"));
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        write_inputs(tmp.path(), r#"{"demons": []}"#);

        let count = generate_pages(&config).unwrap();

        assert_eq!(count, 0);
        assert_eq!(fs::read_dir(tmp.path().join("demons")).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_demons_field_generates_nothing() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        write_inputs(tmp.path(), "{}");

        assert_eq!(generate_pages(&config).unwrap(), 0);
    }

    #[test]
    fn test_template_without_anchor_passes_through() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        write_inputs(tmp.path(), r#"{"demons": [{"id": "a", "name": "Cataclysm"}]}"#);
        let template = "<html><head><title>static</title></head></html>";
        fs::write(tmp.path().join("demon-template.html"), template).unwrap();

        generate_pages(&config).unwrap();

        let page = fs::read_to_string(tmp.path().join("demons/demon-a.html")).unwrap();
        assert_eq!(page, template);
    }

    #[test]
    fn test_missing_template_aborts_before_writing() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        fs::create_dir_all(tmp.path().join("data")).unwrap();
        fs::write(
            tmp.path().join("data/demons.json"),
            r#"{"demons": [{"id": "a", "name": "Bloodlust"}]}"#,
        )
        .unwrap();

        let err = generate_pages(&config).unwrap_err();

        assert!(format!("{err:#}").contains("failed to read template"));
        // No output at all: the template is loaded before the directory is created
        assert!(!tmp.path().join("demons").exists());
    }

    #[test]
    fn test_missing_data_file_is_fatal() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        fs::write(tmp.path().join("demon-template.html"), TEMPLATE).unwrap();

        assert!(generate_pages(&config).is_err());
    }

    #[test]
    fn test_unparseable_data_file_is_fatal() {
        let tmp = tempdir().unwrap();
        let config = config_at(tmp.path());
        write_inputs(tmp.path(), "demons: [not json]");

        let err = generate_pages(&config).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse data file"));
    }
}
