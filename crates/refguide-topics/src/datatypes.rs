//! Data types guide: scalar types, text, defaults, absence and tagged values.

use refguide_core::{cells, EmitContext, Lines, Section, Table, Topic, TopicError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::{size_of, size_of_val};

const NUMERIC_COLUMNS: &[(&str, usize)] = &[
    ("Type", 15),
    ("Range", 30),
    ("Example Value", 42),
    ("Size(bytes)", 11),
];

/// A slot that can hold differently typed values across reassignment.
/// The active variant is always known where the value is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DynamicValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl DynamicValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Int(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Domain alias shown in the aliases table
pub type Score = u32;

pub struct SignedIntegers;

impl Topic for SignedIntegers {
    fn id(&self) -> &'static str {
        "datatypes.signed_integers"
    }

    fn title(&self) -> &'static str {
        "SIGNED INTEGERS"
    }

    fn build(&self, ctx: &EmitContext) -> Result<Section, TopicError> {
        let small: i8 = i8::MAX;
        let medium: i16 = i16::MAX;
        let large: i32 = i32::MAX;
        let huge: i64 = i64::MAX;
        let widest: i128 = i128::MAX;
        let default_int: isize = 42;

        Ok(Section::new(self.id(), self.title())
            .note("can be positive or negative")
            .table(
                Table::new(NUMERIC_COLUMNS)
                    .row(cells!["i8", "-128 to 127", small, size_of_val(&small)])
                    .row(cells!["i16", "-32,768 to 32,767", medium, size_of_val(&medium)])
                    .row(cells!["i32", "-2.1B to 2.1B", large, size_of_val(&large)])
                    .row(cells!["i64", "-9.2E18 to 9.2E18", huge, size_of_val(&huge)])
                    .row(cells!["i128", "-1.7E38 to 1.7E38", widest, size_of_val(&widest)])
                    .row(cells!["isize", "Platform dependent", default_int, size_of_val(&default_int)]),
            )
            .lines(Lines::new().line(format!("isize: {}", ctx.platform_note()))))
    }
}

pub struct UnsignedIntegers;

impl Topic for UnsignedIntegers {
    fn id(&self) -> &'static str {
        "datatypes.unsigned_integers"
    }

    fn title(&self) -> &'static str {
        "UNSIGNED INTEGERS"
    }

    fn build(&self, ctx: &EmitContext) -> Result<Section, TopicError> {
        let small: u8 = u8::MAX;
        let medium: u16 = u16::MAX;
        let large: u32 = u32::MAX;
        let huge: u64 = u64::MAX;
        let widest: u128 = u128::MAX;
        let default_uint: usize = 42;

        Ok(Section::new(self.id(), self.title())
            .note("only positive numbers")
            .table(
                Table::new(NUMERIC_COLUMNS)
                    .row(cells!["u8 (byte)", "0 to 255", small, size_of_val(&small)])
                    .row(cells!["u16", "0 to 65,535", medium, size_of_val(&medium)])
                    .row(cells!["u32", "0 to 4.2B", large, size_of_val(&large)])
                    .row(cells!["u64", "0 to 1.8E19", huge, size_of_val(&huge)])
                    .row(cells!["u128", "0 to 3.4E38", widest, size_of_val(&widest)])
                    .row(cells!["usize", "Platform dependent", default_uint, size_of_val(&default_uint)]),
            )
            .lines(Lines::new().line(format!("usize: {}", ctx.platform_note()))))
    }
}

pub struct FloatingPoint;

impl Topic for FloatingPoint {
    fn id(&self) -> &'static str {
        "datatypes.floating_point"
    }

    fn title(&self) -> &'static str {
        "FLOATING-POINT NUMBERS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let single: f32 = f32::MAX;
        let double: f64 = f64::MAX;

        Ok(Section::new(self.id(), self.title())
            .note("decimal values, IEEE-754")
            .table(
                Table::new(&[
                    ("Type", 15),
                    ("Range (approx)", 30),
                    ("Example Value", 42),
                    ("Size(bytes)", 11),
                ])
                .row(cells![
                    "f32",
                    "±1.4e-45 to ±3.4e+38",
                    format!("{:.2}", single),
                    size_of_val(&single)
                ])
                .row(cells![
                    "f64",
                    "±5.0e-324 to ±1.7e+308",
                    format!("{:.2e}", double),
                    size_of_val(&double)
                ]),
            ))
    }
}

pub struct Constants;

impl Topic for Constants {
    fn id(&self) -> &'static str {
        "datatypes.constants"
    }

    fn title(&self) -> &'static str {
        "CONSTANTS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        const PI: f64 = std::f64::consts::PI;
        const E: f32 = std::f32::consts::E;

        Ok(Section::new(self.id(), self.title())
            .note("immutable, inlined at compile time")
            .table(
                Table::new(&[("Type", 15), ("Value", 15), ("Precision", 15), ("Size(bytes)", 11)])
                    .row(cells!["PI (f64)", format!("{:.8}", PI), "15 decimals", size_of_val(&PI)])
                    .row(cells!["E (f32)", format!("{:.5}", E), "6 decimals", size_of_val(&E)]),
            ))
    }
}

pub struct Booleans;

impl Topic for Booleans {
    fn id(&self) -> &'static str {
        "datatypes.booleans"
    }

    fn title(&self) -> &'static str {
        "BOOLEANS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let is_true: bool = true;
        let is_false = false;

        Ok(Section::new(self.id(), self.title())
            .note("true or false")
            .table(
                Table::new(&[("Type", 15), ("Value", 15), ("Use Case", 15), ("Size(bytes)", 11)])
                    .row(cells!["bool", is_true, "Control flow", size_of_val(&is_true)])
                    .row(cells!["bool", is_false, "Flags", size_of_val(&is_false)]),
            ))
    }
}

pub struct Text;

impl Topic for Text {
    fn id(&self) -> &'static str {
        "datatypes.text"
    }

    fn title(&self) -> &'static str {
        "STRINGS AND CHARACTERS"
    }

    fn build(&self, ctx: &EmitContext) -> Result<Section, TopicError> {
        let greeting: &str = "Hello, Rust!";
        let name = String::from("Ferris");
        let initial = 'R';

        Ok(Section::new(self.id(), self.title())
            .note("UTF-8 text; &str borrows, String owns")
            .table(
                Table::new(&[("Variable", 15), ("Value", 20), ("Use Case", 20), ("Size(bytes)", 11)])
                    .row(cells!["greeting: &str", greeting, "Messages", size_of_val(&greeting)])
                    .row(cells!["name: String", name, "Names/Identifiers", size_of_val(&name)])
                    .row(cells!["initial: char", initial, "Single characters", size_of_val(&initial)]),
            )
            .lines(
                Lines::new()
                    .line(format!("Sizes are of the handle, not the text; {}", ctx.platform_note())),
            ))
    }
}

pub struct ZeroValues;

impl Topic for ZeroValues {
    fn id(&self) -> &'static str {
        "datatypes.zero_values"
    }

    fn title(&self) -> &'static str {
        "ZERO VALUES"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let zero_int: i32 = Default::default();
        let zero_float: f64 = Default::default();
        let zero_bool: bool = Default::default();
        let zero_string: String = Default::default();
        let zero_option: Option<i32> = Default::default();

        Ok(Section::new(self.id(), self.title())
            .note("Default::default() for each type")
            .table(
                Table::new(&[("Type", 15), ("Default Value", 20), ("Value", 15), ("Size(bytes)", 11)])
                    .row(cells!["i32", "0", zero_int, size_of_val(&zero_int)])
                    .row(cells!["f64", "0.0", format!("{:.1}", zero_float), size_of_val(&zero_float)])
                    .row(cells!["bool", "false", zero_bool, size_of_val(&zero_bool)])
                    .row(cells![
                        "String",
                        "\"\" (empty)",
                        format!("\"{}\"", zero_string),
                        size_of_val(&zero_string)
                    ])
                    .row(cells![
                        "Option<i32>",
                        "None (absent)",
                        format!("{:?}", zero_option),
                        size_of_val(&zero_option)
                    ]),
            )
            .lines(Lines::new().line("Bindings must be initialized before use; defaults are explicit")))
    }
}

pub struct AbsenceAndDynamic;

impl Topic for AbsenceAndDynamic {
    fn id(&self) -> &'static str {
        "datatypes.absence_and_dynamic"
    }

    fn title(&self) -> &'static str {
        "ABSENT AND DYNAMIC VALUES"
    }

    fn build(&self, ctx: &EmitContext) -> Result<Section, TopicError> {
        let no_ref: Option<&i32> = None;
        let no_box: Option<Box<i32>> = None;

        let mut table = Table::new(&[("Type", 24), ("Value", 20), ("Meaning", 20), ("Size(bytes)", 11)])
            .row(cells!["Option<&i32>", format!("{:?}", no_ref), "No value", size_of_val(&no_ref)])
            .row(cells!["Option<Box<i32>>", format!("{:?}", no_box), "No owned value", size_of_val(&no_box)]);

        let mut holder = DynamicValue::Text("I can be anything!".to_string());
        table.push_row(cells![
            format!("DynamicValue ({})", holder.kind()),
            holder,
            "Tagged variant",
            size_of_val(&holder)
        ]);

        holder = DynamicValue::Int(42);
        table.push_row(cells![
            format!("DynamicValue ({})", holder.kind()),
            holder,
            "Variant changed",
            size_of_val(&holder)
        ]);

        let doubled = match &holder {
            DynamicValue::Int(n) => n * 2,
            other => {
                return Err(TopicError::Mismatch {
                    expected: "int".to_string(),
                    got: other.kind().to_string(),
                })
            }
        };

        Ok(Section::new(self.id(), self.title())
            .note("Option for absence, enums for varying types")
            .table(table)
            .lines(
                Lines::new()
                    .line(format!("Matched as Int: {} * 2 = {}", holder, doubled))
                    .line(format!(
                        "Option<&T> costs no extra space: the null niche encodes None; {}",
                        ctx.platform_note()
                    )),
            ))
    }
}

pub struct TypeAliases;

impl Topic for TypeAliases {
    fn id(&self) -> &'static str {
        "datatypes.type_aliases"
    }

    fn title(&self) -> &'static str {
        "TYPE ALIASES"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let byte_val: u8 = b'\xff';
        let rune_val = 'A';
        let score: Score = 100;

        Ok(Section::new(self.id(), self.title())
            .note("byte and character types, user aliases")
            .table(
                Table::new(&[("Alias", 15), ("Actual Type", 30), ("Common Use", 15)])
                    .row(cells!["b'…' literal", "u8", "Raw bytes"])
                    .row(cells!["char", "Unicode scalar value (4 bytes)", "Unicode characters"])
                    .row(cells!["Score", "u32 (type Score = u32)", "Domain naming"]),
            )
            .lines(Lines::new().line(format!(
                "Example: b'\\xff' = {}, 'A' as u32 = {}, Score = {} ({} bytes)",
                byte_val,
                rune_val as u32,
                score,
                size_of::<Score>()
            ))))
    }
}

pub struct DeclarationStyles;

impl Topic for DeclarationStyles {
    fn id(&self) -> &'static str {
        "datatypes.declaration_styles"
    }

    fn title(&self) -> &'static str {
        "DECLARATION STYLES"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        Ok(Section::new(self.id(), self.title())
            .note("ways to declare bindings")
            .table(
                Table::new(&[("Declaration Method", 35), ("Example", 30)])
                    .row(cells!["let with type", "let x: i32 = 10;"])
                    .row(cells!["let with type inference", "let x = 10; // inferred as i32"])
                    .row(cells!["mutable binding", "let mut x = 10; x += 1;"])
                    .row(cells!["tuple destructuring", "let (x, y) = (1, 2);"])
                    .row(cells!["shadowing", "let x = x * 2; // new binding"])
                    .row(cells!["constant", "const PI: f64 = 3.14; // inlined"])
                    .row(cells!["static", "static GREETING: &str = \"hi\";"]),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> EmitContext {
        EmitContext::new("test")
    }

    fn size_of_row(section: &Section, label: &str) -> usize {
        section
            .find_row(label)
            .and_then(|r| r.cell(3))
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| panic!("no size for {}", label))
    }

    #[test]
    fn test_signed_sizes_are_fixed() {
        let section = SignedIntegers.build(&ctx()).unwrap();
        assert_eq!(size_of_row(&section, "i8"), 1);
        assert_eq!(size_of_row(&section, "i16"), 2);
        assert_eq!(size_of_row(&section, "i32"), 4);
        assert_eq!(size_of_row(&section, "i64"), 8);
        assert_eq!(size_of_row(&section, "i128"), 16);
        assert_eq!(size_of_row(&section, "isize"), size_of::<usize>());
        assert_eq!(section.find_row("i8").and_then(|r| r.cell(2)), Some("127"));
    }

    #[test]
    fn test_unsigned_sizes_are_fixed() {
        let section = UnsignedIntegers.build(&ctx()).unwrap();
        assert_eq!(size_of_row(&section, "u8 (byte)"), 1);
        assert_eq!(size_of_row(&section, "u16"), 2);
        assert_eq!(size_of_row(&section, "u32"), 4);
        assert_eq!(size_of_row(&section, "u64"), 8);
        assert_eq!(size_of_row(&section, "u128"), 16);
        assert_eq!(
            section.find_row("u64").and_then(|r| r.cell(2)),
            Some("18446744073709551615")
        );
    }

    #[test]
    fn test_float_and_bool_sizes() {
        let floats = FloatingPoint.build(&ctx()).unwrap();
        assert_eq!(size_of_row(&floats, "f32"), 4);
        assert_eq!(size_of_row(&floats, "f64"), 8);

        let bools = Booleans.build(&ctx()).unwrap();
        assert_eq!(size_of_row(&bools, "bool"), 1);
    }

    #[test]
    fn test_constants_precision() {
        let section = Constants.build(&ctx()).unwrap();
        assert_eq!(section.find_row("PI (f64)").and_then(|r| r.cell(1)), Some("3.14159265"));
        assert_eq!(section.find_row("E (f32)").and_then(|r| r.cell(1)), Some("2.71828"));
    }

    #[test]
    fn test_zero_values() {
        let section = ZeroValues.build(&ctx()).unwrap();
        assert_eq!(section.find_row("i32").and_then(|r| r.cell(2)), Some("0"));
        assert_eq!(section.find_row("f64").and_then(|r| r.cell(2)), Some("0.0"));
        assert_eq!(section.find_row("bool").and_then(|r| r.cell(2)), Some("false"));
        assert_eq!(section.find_row("String").and_then(|r| r.cell(2)), Some("\"\""));
        assert_eq!(section.find_row("Option<i32>").and_then(|r| r.cell(2)), Some("None"));
    }

    #[test]
    fn test_dynamic_value_tracks_kind() {
        let section = AbsenceAndDynamic.build(&ctx()).unwrap();
        let text = section.find_row("DynamicValue (text)").unwrap();
        assert_eq!(text.cell(1), Some("I can be anything!"));
        let int = section.find_row("DynamicValue (int)").unwrap();
        assert_eq!(int.cell(1), Some("42"));
        assert_eq!(text.cell(3), int.cell(3));
        assert!(section.find_line("42 * 2 = 84").is_some());
        assert_eq!(section.find_row("Option<&i32>").and_then(|r| r.cell(1)), Some("None"));
    }

    #[test]
    fn test_dynamic_value_display() {
        assert_eq!(DynamicValue::Float(1.5).to_string(), "1.5");
        assert_eq!(DynamicValue::Bool(true).kind(), "bool");
    }

    #[test]
    fn test_alias_example_line() {
        let section = TypeAliases.build(&ctx()).unwrap();
        assert!(section
            .find_line("b'\\xff' = 255, 'A' as u32 = 65, Score = 100 (4 bytes)")
            .is_some());
    }
}
