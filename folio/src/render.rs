//! Page rendering.
//!
//! Renders the portfolio page from the content model through an askama
//! template. Typewriter roles, radar axes, and skill labels are embedded as
//! JSON payloads for the WASM entry points; the animated pieces themselves
//! live in the folio-viz crate loaded by the generated page.

use std::fs;
use std::path::Path;

use askama::Template;

use crate::content::SiteContent;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    name: &'a str,
    tagline: Option<&'a str>,
    /// Shown before the first typewriter tick replaces it.
    first_role: &'a str,
    roles_json: String,
    radar_json: String,
    skills_json: String,
}

/// Render the site into the output directory.
pub fn render(content: &SiteContent, output_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)?;
    let page = render_index(content)?;
    fs::write(output_dir.join("index.html"), page)?;
    Ok(())
}

fn render_index(content: &SiteContent) -> anyhow::Result<String> {
    let template = IndexTemplate {
        name: &content.name,
        tagline: content.tagline.as_deref(),
        first_role: content.roles.first().map(String::as_str).unwrap_or(""),
        roles_json: script_payload(&content.roles)?,
        radar_json: script_payload(&content.radar)?,
        skills_json: script_payload(&content.skills)?,
    };
    Ok(template.render()?)
}

/// Serialize a value for embedding inside an inline script block.
///
/// `</` is escaped so no payload string can terminate the surrounding
/// `<script>` element.
fn script_payload<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
