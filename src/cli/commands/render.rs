//! Render command handler.
//!
//! Loads a section config file and emits the rendered page as HTML or
//! as a JSON render tree.

use std::path::Path;

use tracing::{info, warn};

use crate::cli::args::{RenderArgs, RenderFormat};
use crate::error::SitewrightError;
use crate::render::{RenderContext, render_page};
use crate::section::loader::load_sections;

/// Render a section config file.
///
/// # Errors
///
/// Returns a config error if the file fails to load or validate, or an
/// I/O error if the output file cannot be written.
pub fn run(args: &RenderArgs) -> Result<(), SitewrightError> {
    info!(file = %args.file.display(), "loading sections");
    let loaded = load_sections(&args.file)?;

    for warning in &loaded.warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }

    let ctx = args
        .year
        .map_or_else(RenderContext::new, RenderContext::with_year);
    let page = render_page(&loaded.sections, &ctx);

    let rendered = match args.format {
        RenderFormat::Html => page.to_html(),
        RenderFormat::Json => serde_json::to_string_pretty(&page)?,
    };

    emit(&rendered, args.output.as_deref())?;
    info!(sections = loaded.sections.len(), "render complete");
    Ok(())
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<(), SitewrightError> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))?;
            info!(output = %path.display(), "output written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn render_args(file: PathBuf, format: RenderFormat, output: Option<PathBuf>) -> RenderArgs {
        RenderArgs {
            file,
            format,
            output,
            year: Some(2026),
        }
    }

    #[test]
    fn renders_html_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("page.json");
        std::fs::write(
            &config,
            r#"[
                { "kind": "hero", "content": { "title": "Welcome" } },
                { "kind": "footer", "content": { "companyName": "Acme" } }
            ]"#,
        )
        .unwrap();

        let out = dir.path().join("page.html");
        run(&render_args(config, RenderFormat::Html, Some(out.clone()))).unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<main class=\"page\">"));
        assert!(html.contains("Welcome"));
        assert!(html.contains("\u{a9} 2026 Acme. All rights reserved."));
        assert!(html.ends_with('\n'));
    }

    #[test]
    fn renders_json_tree_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("page.json");
        std::fs::write(&config, r#"{ "kind": "hero", "content": { "title": "Hi" } }"#).unwrap();

        let out = dir.path().join("page.json.out");
        run(&render_args(config, RenderFormat::Json, Some(out.clone()))).unwrap();

        let tree: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(tree["tag"], "main");
        assert_eq!(tree["children"][0]["tag"], "section");
    }

    #[test]
    fn missing_config_maps_to_config_error() {
        let args = render_args(PathBuf::from("/nonexistent/page.json"), RenderFormat::Html, None);
        let err = run(&args).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::ExitCode::CONFIG_ERROR);
    }
}
