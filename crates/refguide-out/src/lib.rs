//! REFGUIDE-OUT: Section to Text Layout
//!
//! This crate turns the structured [`Section`]s produced by topics into
//! the fixed-width text written to the terminal. Layout lives in a
//! Handlebars templates file compiled into the crate.
//!
//! # Example
//!
//! ```
//! use refguide_core::{cells, Section, Table};
//! use refguide_out::render_section;
//!
//! let section = Section::new("demo.bools", "BOOLEANS")
//!     .note("true or false")
//!     .table(Table::new(&[("Type", 6), ("Value", 6)]).row(cells!["bool", true]));
//!
//! let text = render_section(&section, 20).unwrap();
//! assert!(text.contains("▶ BOOLEANS (true or false)"));
//! assert!(text.contains("bool   | true  "));
//! ```

pub mod templates;
pub mod renderer;

use refguide_core::{Block, EmitContext, GuideError, Section, SectionFormatter};
use renderer::{TemplateRenderer, CELL_SEPARATOR};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur during layout
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Render failed: {0}")]
    Render(String),
}

impl From<RenderError> for GuideError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Template(msg) => GuideError::TemplateError(msg),
            RenderError::Render(msg) => GuideError::RenderError(msg),
        }
    }
}

/// Template-driven implementation of the runner's formatter seam
pub struct TemplateLayout<'a> {
    renderer: TemplateRenderer<'a>,
}

impl<'a> TemplateLayout<'a> {
    /// Layout using the embedded templates
    pub fn new() -> Result<Self, RenderError> {
        let renderer = TemplateRenderer::embedded().map_err(RenderError::Template)?;
        Ok(Self { renderer })
    }

    /// Layout using a templates file on disk
    pub fn from_path(path: &str) -> Result<Self, RenderError> {
        let renderer = TemplateRenderer::load(path).map_err(RenderError::Template)?;
        Ok(Self { renderer })
    }

    fn render(&self, name: &str, data: &Value) -> Result<String, RenderError> {
        self.renderer.render(name, data).map_err(RenderError::Render)
    }

    /// Lay out one section at the given rule width. Columns grow to fit
    /// their widest cell and a wider table gets rules as wide as itself.
    pub fn render_section(&self, section: &Section, width: usize) -> Result<String, RenderError> {
        let mut text = self.render(
            "header",
            &json!({ "title": section.title, "note": section.note }),
        )?;

        for block in &section.blocks {
            let rendered = match block {
                Block::Table(table) => {
                    let widths = table.fitted_widths();
                    let separators = CELL_SEPARATOR.chars().count() * widths.len().saturating_sub(1);
                    let table_width = widths.iter().sum::<usize>() + separators;
                    self.render(
                        "table",
                        &json!({
                            "width": width.max(table_width),
                            "headers": table.headers,
                            "widths": widths,
                            "rows": table.rows,
                        }),
                    )?
                }
                Block::Lines(lines) => self.render("lines", &json!(lines))?,
            };
            text.push_str(&rendered);
        }

        Ok(text)
    }
}

impl SectionFormatter for TemplateLayout<'_> {
    fn banner(&self, ctx: &EmitContext) -> Result<String, GuideError> {
        Ok(self.render("banner", &json!({ "title": ctx.guide, "width": ctx.rule_width }))?)
    }

    fn section(&self, section: &Section, ctx: &EmitContext) -> Result<String, GuideError> {
        Ok(self.render_section(section, ctx.rule_width)?)
    }

    fn footer(&self, ctx: &EmitContext) -> Result<String, GuideError> {
        Ok(self.render("footer", &json!({ "width": ctx.rule_width }))?)
    }
}

/// Lay out a single section with the embedded templates
pub fn render_section(section: &Section, width: usize) -> Result<String, RenderError> {
    TemplateLayout::new()?.render_section(section, width)
}

/// Render with an inline template string
pub fn render_string(template: &str, data: &Value) -> Result<String, RenderError> {
    let renderer = TemplateRenderer::embedded().map_err(RenderError::Template)?;
    renderer.render_string(template, data).map_err(RenderError::Render)
}
