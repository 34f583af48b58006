//! Template rendering for the guide layout.
//!
//! Uses Handlebars with HTML escaping disabled and custom helpers:
//! - pad: Left-align text to a minimum width
//! - row: Pad every cell to its column width and join with " | "
//! - rule: Repeat a character to draw a horizontal rule
//! - center: Center text within a width

use handlebars::{Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext};
use serde_json::Value;

use crate::templates::TemplatesFile;

/// Column separator used by the row helper
pub const CELL_SEPARATOR: &str = " | ";

/// Default rule character
pub const RULE_CHAR: &str = "─";

/// Compiled renderer with registered helpers
pub struct TemplateRenderer<'a> {
    handlebars: Handlebars<'a>,
    templates: TemplatesFile,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a new renderer from a templates file
    pub fn new(templates: TemplatesFile) -> Result<Self, String> {
        let mut handlebars = Handlebars::new();

        // Output is plain text for a terminal
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(false);

        handlebars.register_helper("pad", Box::new(PadHelper));
        handlebars.register_helper("row", Box::new(RowHelper));
        handlebars.register_helper("rule", Box::new(RuleHelper));
        handlebars.register_helper("center", Box::new(CenterHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| format!("Template '{}' failed to compile: {}", name, e))?;
        }

        Ok(TemplateRenderer { handlebars, templates })
    }

    /// Renderer over the templates compiled into the crate
    pub fn embedded() -> Result<Self, String> {
        Self::new(TemplatesFile::embedded()?)
    }

    /// Load from a file path
    pub fn load(path: &str) -> Result<Self, String> {
        Self::new(TemplatesFile::load(path)?)
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, String> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| format!("Render error: {}", e))
    }

    /// Render a template string directly (not from file)
    pub fn render_string(&self, template: &str, data: &Value) -> Result<String, String> {
        self.handlebars
            .render_template(template, data)
            .map_err(|e| format!("Render error: {}", e))
    }

    /// List available template names
    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}

/// Left-align `text` to `width` columns (counted in chars)
pub fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// Pad each cell to its column width and join them. Cells without a
/// width are written as-is.
pub fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match widths.get(i) {
            Some(w) => pad(cell, *w),
            None => cell.clone(),
        })
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// Custom Helpers
// ============================================================================

struct PadHelper;

impl HelperDef for PadHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = h.param(0).map(|v| value_text(v.value())).unwrap_or_default();
        let width = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(0) as usize;

        out.write(&pad(&text, width))?;
        Ok(())
    }
}

struct RowHelper;

impl HelperDef for RowHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let cells: Vec<String> = h
            .param(0)
            .and_then(|v| v.value().as_array())
            .map(|arr| arr.iter().map(value_text).collect())
            .unwrap_or_default();

        let widths: Vec<usize> = h
            .param(1)
            .and_then(|v| v.value().as_array())
            .map(|arr| {
                arr.iter()
                    .map(|w| w.as_u64().unwrap_or(0) as usize)
                    .collect()
            })
            .unwrap_or_default();

        out.write(&format_row(&cells, &widths))?;
        Ok(())
    }
}

struct RuleHelper;

impl HelperDef for RuleHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let width = h.param(0).and_then(|v| v.value().as_u64()).unwrap_or(60) as usize;
        let fill = h
            .param(1)
            .and_then(|v| v.value().as_str())
            .unwrap_or(RULE_CHAR);

        out.write(&fill.repeat(width))?;
        Ok(())
    }
}

struct CenterHelper;

impl HelperDef for CenterHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let text = h.param(0).map(|v| value_text(v.value())).unwrap_or_default();
        let width = h.param(1).and_then(|v| v.value().as_u64()).unwrap_or(0) as usize;

        let indent = width.saturating_sub(text.chars().count()) / 2;
        out.write(&" ".repeat(indent))?;
        out.write(&text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn renderer() -> TemplateRenderer<'static> {
        TemplateRenderer::embedded().unwrap()
    }

    #[test]
    fn test_pad_and_row() {
        assert_eq!(pad("i8", 5), "i8   ");
        assert_eq!(pad("too long", 3), "too long");
        let row = format_row(&["a".to_string(), "bb".to_string()], &[3, 2]);
        assert_eq!(row, "a   | bb");
    }

    #[test]
    fn test_row_helper() {
        let result = renderer()
            .render_string("{{row cells widths}}", &json!({ "cells": ["u8", 255], "widths": [4, 3] }))
            .unwrap();
        assert_eq!(result, "u8   | 255");
    }

    #[test]
    fn test_rule_helper() {
        let r = renderer();
        assert_eq!(r.render_string("{{rule 3}}", &json!({})).unwrap(), "───");
        assert_eq!(r.render_string("{{rule 4 \"=\"}}", &json!({})).unwrap(), "====");
    }

    #[test]
    fn test_center_helper() {
        let result = renderer()
            .render_string("{{center title 10}}", &json!({ "title": "ab" }))
            .unwrap();
        assert_eq!(result, "    ab");
    }

    #[test]
    fn test_no_html_escaping() {
        let result = renderer()
            .render_string("{{text}}", &json!({ "text": "a && b << 2 \"quoted\"" }))
            .unwrap();
        assert_eq!(result, "a && b << 2 \"quoted\"");
    }

    #[test]
    fn test_header_template() {
        let r = renderer();
        let with_note = r
            .render("header", &json!({ "title": "BOOLEANS", "note": "true or false" }))
            .unwrap();
        assert_eq!(with_note, "\n▶ BOOLEANS (true or false)\n");

        let without = r.render("header", &json!({ "title": "BOOLEANS", "note": null })).unwrap();
        assert_eq!(without, "\n▶ BOOLEANS\n");
    }

    #[test]
    fn test_list_templates() {
        let r = renderer();
        let names = r.list_templates();
        assert_eq!(names, vec!["banner", "footer", "header", "lines", "table"]);
    }
}
