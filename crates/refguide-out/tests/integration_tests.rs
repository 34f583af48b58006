//! Integration tests for refguide-out with the real templates file.
//!
//! These tests drive the layout from disk the same way the embedded
//! copy is used, and check the text a reader actually sees.

use refguide_core::{cells, EmitContext, GuideError, Lines, Section, SectionFormatter, Table};
use refguide_out::templates::TemplatesFile;
use refguide_out::{RenderError, TemplateLayout};

/// Path to the templates file relative to the crate root
const TEMPLATES_PATH: &str = "templates/reference-templates.yaml";

fn templates_path() -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    std::path::Path::new(&manifest_dir)
        .join(TEMPLATES_PATH)
        .to_string_lossy()
        .to_string()
}

fn sample_section() -> Section {
    Section::new("demo.floats", "FLOATING-POINT NUMBERS")
        .note("decimals")
        .table(
            Table::new(&[("Type", 6), ("Value", 10), ("Size", 4)])
                .row(cells!["f32", 3.14_f32, 4])
                .row(cells!["f64", 3.14159, 8]),
        )
        .lines(Lines::titled("Special values:").line("f64::NAN != f64::NAN"))
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_file_on_disk_matches_embedded() {
    let on_disk = TemplatesFile::load(&templates_path()).unwrap();
    let embedded = TemplatesFile::embedded().unwrap();
    assert_eq!(on_disk.version, "1.0");
    assert_eq!(on_disk.list_templates(), embedded.list_templates());
}

#[test]
fn test_missing_required_template_rejected() {
    let yaml = r#"
version: "1.0"
templates:
  banner:
    description: only a banner
    template: "{{title}}"
"#;
    let err = TemplatesFile::from_yaml(yaml).unwrap_err();
    assert!(err.contains("footer"));
    assert!(err.contains("table"));
}

#[test]
fn test_missing_file_is_template_error() {
    let err = match TemplateLayout::from_path("does/not/exist.yaml") {
        Ok(_) => panic!("loaded a missing file"),
        Err(e) => e,
    };
    assert!(matches!(err, RenderError::Template(_)));

    let guide_err: GuideError = err.into();
    assert!(guide_err.to_string().starts_with("TEMPLATE/"));
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_section_layout_from_disk() {
    let layout = TemplateLayout::from_path(&templates_path()).unwrap();
    let text = layout.render_section(&sample_section(), 26).unwrap();

    let expected = "\n▶ FLOATING-POINT NUMBERS (decimals)\n\
                    ──────────────────────────\n\
                    Type   | Value      | Size\n\
                    ──────────────────────────\n\
                    f32    | 3.14       | 4   \n\
                    f64    | 3.14159    | 8   \n\
                    Special values:\n  \
                    f64::NAN != f64::NAN\n";
    assert_eq!(text, expected);
}

#[test]
fn test_formatter_seam() {
    let layout = TemplateLayout::new().unwrap();
    let ctx = EmitContext::new("RUST DATA TYPES REFERENCE GUIDE");

    let banner = layout.banner(&ctx).unwrap();
    let rules: Vec<&str> = banner.lines().filter(|l| l.starts_with('═')).collect();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].chars().count(), ctx.rule_width);
    assert!(banner.contains("RUST DATA TYPES REFERENCE GUIDE"));

    let section = layout.section(&sample_section(), &ctx).unwrap();
    assert!(section.starts_with("\n▶ FLOATING-POINT NUMBERS"));

    let footer = layout.footer(&ctx).unwrap();
    assert!(footer.contains("Reference Guide Complete"));
    assert!(footer.ends_with("\n\n"));
}

#[test]
fn test_long_cells_are_not_cut() {
    let section = Section::new("demo.text", "TEXT").table(
        Table::new(&[("Type", 4), ("Value", 5)]).row(cells!["String", "Hello, 世界"]),
    );
    let text = refguide_out::render_section(&section, 12).unwrap();
    assert!(text.contains("String | Hello, 世界"));
}
