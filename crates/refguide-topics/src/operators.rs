//! Operator families: arithmetic, relational, logical, bitwise and text.

use refguide_core::{cells, EmitContext, Lines, Section, Table, Topic, TopicError};
use std::cell::Cell;

use crate::element;

/// Results of the binary bitwise operators on one pair of bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitwiseResults {
    pub and: u8,
    pub or: u8,
    pub xor: u8,
    /// `!x`, all bits of the left operand flipped
    pub not_left: u8,
}

pub fn bitwise(x: u8, y: u8) -> BitwiseResults {
    BitwiseResults {
        and: x & y,
        or: x | y,
        xor: x ^ y,
        not_left: !x,
    }
}

pub struct Arithmetic;

impl Topic for Arithmetic {
    fn id(&self) -> &'static str {
        "operations.arithmetic"
    }

    fn title(&self) -> &'static str {
        "1. ARITHMETIC OPERATIONS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let (a, b) = (20, 8);

        let basic = Table::new(&[("Operation", 16), ("Expression", 12), ("Result", 8)])
            .row(cells!["Addition", format!("{} + {}", a, b), a + b])
            .row(cells!["Subtraction", format!("{} - {}", a, b), a - b])
            .row(cells!["Multiplication", format!("{} * {}", a, b), a * b])
            .row(cells!["Division", format!("{} / {}", a, b), a / b])
            .row(cells!["Remainder", format!("{} % {}", a, b), a % b]);

        let mut x = 10;
        let mut step = Lines::titled("Increment & Decrement (no ++/--, use += 1 / -= 1):")
            .line(format!("x = {}", x));
        x += 1;
        step = step.line(format!("After x += 1: {}", x));
        x -= 1;
        step = step.line(format!("After x -= 1: {}", x));

        let mut y = 20;
        let mut compound = Lines::titled("Compound Assignment Operators:").line(format!("Initial: y = {}", y));
        y += 5;
        compound = compound.line(format!("y += 5:  {} (same as y = y + 5)", y));
        y -= 3;
        compound = compound.line(format!("y -= 3:  {} (same as y = y - 3)", y));
        y *= 2;
        compound = compound.line(format!("y *= 2:  {} (same as y = y * 2)", y));
        y /= 4;
        compound = compound.line(format!("y /= 4:  {} (same as y = y / 4)", y));
        y %= 5;
        compound = compound.line(format!("y %= 5:  {} (same as y = y % 5)", y));

        let (f1, f2) = (15.5_f64, 3.2_f64);
        let floats = Lines::titled("Floating Point Operations:")
            .line(format!("Values: f1 = {:.1}, f2 = {:.1}", f1, f2))
            .line(format!("f1 + f2 = {:.2}", f1 + f2))
            .line(format!("f1 - f2 = {:.2}", f1 - f2))
            .line(format!("f1 * f2 = {:.2}", f1 * f2))
            .line(format!("f1 / f2 = {:.2}", f1 / f2));

        let (sum, wrapped) = i32::MAX.overflowing_add(1);
        let overflow = Lines::titled("Overflow Handling:")
            .line(format!("i32::MAX.checked_add(1) = {:?}", i32::MAX.checked_add(1)))
            .line(format!("i32::MAX.wrapping_add(1) = {}", i32::MAX.wrapping_add(1)))
            .line(format!("i32::MAX.saturating_add(1) = {}", i32::MAX.saturating_add(1)))
            .line(format!("i32::MAX.overflowing_add(1) = ({}, {})", sum, wrapped));

        Ok(Section::new(self.id(), self.title())
            .note(format!("a = {}, b = {}", a, b))
            .table(basic)
            .lines(step)
            .lines(compound)
            .lines(floats)
            .lines(overflow))
    }
}

pub struct Relational;

impl Topic for Relational {
    fn id(&self) -> &'static str {
        "operations.relational"
    }

    fn title(&self) -> &'static str {
        "2. RELATIONAL (COMPARISON) OPERATIONS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let (p, q) = (15, 10);
        let (str1, str2) = ("apple", "banana");

        let numbers = Table::new(&[("Expression", 10), ("Meaning", 18), ("Result", 6)])
            .row(cells!["p == q", "equal", p == q])
            .row(cells!["p != q", "not equal", p != q])
            .row(cells!["p > q", "greater than", p > q])
            .row(cells!["p < q", "less than", p < q])
            .row(cells!["p >= q", "greater or equal", p >= q])
            .row(cells!["p <= q", "less or equal", p <= q]);

        let text = Lines::titled("String Comparisons:")
            .line(format!("str1 = \"{}\", str2 = \"{}\"", str1, str2))
            .line(format!("str1 == str2: {}", str1 == str2))
            .line(format!("str1 != str2: {}", str1 != str2))
            .line(format!("str1 < str2: {} (lexicographic)", str1 < str2));

        Ok(Section::new(self.id(), self.title())
            .note(format!("p = {}, q = {}", p, q))
            .table(numbers)
            .lines(text))
    }
}

pub struct Logical;

impl Topic for Logical {
    fn id(&self) -> &'static str {
        "operations.logical"
    }

    fn title(&self) -> &'static str {
        "3. LOGICAL OPERATIONS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let is_student = true;
        let has_classes = false;
        let is_working = true;

        let table = Table::new(&[("Expression", 41), ("Operands", 16), ("Result", 6)])
            .row(cells!["!is_student", "!true", !is_student])
            .row(cells!["!has_classes", "!false", !has_classes])
            .row(cells!["is_student && has_classes", "true && false", is_student && has_classes])
            .row(cells!["is_student && is_working", "true && true", is_student && is_working])
            .row(cells!["is_student || has_classes", "true || false", is_student || has_classes])
            .row(cells!["has_classes || is_working", "false || true", has_classes || is_working])
            .row(cells![
                "is_student && (has_classes || is_working)",
                "can graduate",
                is_student && (has_classes || is_working)
            ]);

        let calls = Cell::new(0);
        let probe = || {
            calls.set(calls.get() + 1);
            true
        };
        let and_result = has_classes && probe();
        let or_result = is_student || probe();

        Ok(Section::new(self.id(), self.title())
            .note(format!(
                "is_student = {}, has_classes = {}, is_working = {}",
                is_student, has_classes, is_working
            ))
            .table(table)
            .lines(
                Lines::titled("Short-circuit Evaluation:")
                    .line(format!("has_classes && probe() = {}", and_result))
                    .line(format!("is_student || probe() = {}", or_result))
                    .line(format!("probe() calls: {} (right operand skipped)", calls.get())),
            ))
    }
}

pub struct Bitwise;

impl Topic for Bitwise {
    fn id(&self) -> &'static str {
        "operations.bitwise"
    }

    fn title(&self) -> &'static str {
        "4. BITWISE OPERATIONS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let bit_x: u8 = 12;
        let bit_y: u8 = 10;
        let r = bitwise(bit_x, bit_y);

        let shift_left = 5u8 << 2;
        let shift_right = 8u8 >> 1;

        let table = Table::new(&[("Operation", 18), ("Expression", 10), ("Result", 6), ("Binary", 8)])
            .row(cells!["Bitwise AND (&)", format!("{} & {}", bit_x, bit_y), r.and, format!("{:04b}", r.and)])
            .row(cells!["Bitwise OR (|)", format!("{} | {}", bit_x, bit_y), r.or, format!("{:04b}", r.or)])
            .row(cells!["Bitwise XOR (^)", format!("{} ^ {}", bit_x, bit_y), r.xor, format!("{:04b}", r.xor)])
            .row(cells!["Bitwise NOT (!)", format!("!{}", bit_x), r.not_left, format!("{:08b}", r.not_left)])
            .row(cells!["Left Shift (<<)", "5 << 2", shift_left, format!("{:b}", shift_left)])
            .row(cells!["Right Shift (>>)", "8 >> 1", shift_right, format!("{:b}", shift_right)]);

        Ok(Section::new(self.id(), self.title())
            .note(format!(
                "bit_x = {} ({:04b}), bit_y = {} ({:04b}) as u8",
                bit_x, bit_x, bit_y, bit_y
            ))
            .table(table)
            .lines(
                Lines::new()
                    .line("<< n multiplies by 2^n, >> n divides by 2^n")
                    .line("! on an unsigned integer flips every bit of the type"),
            ))
    }
}

pub struct Strings;

impl Topic for Strings {
    fn id(&self) -> &'static str {
        "operations.strings"
    }

    fn title(&self) -> &'static str {
        "5. STRING OPERATIONS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let greeting = "Hello";
        let name = "Rust";
        let full_greeting = greeting.to_string() + " " + name;

        let text = "Programming";
        let accented = "naïve";

        let word = "FERRIS";
        let bytes = word.as_bytes();
        let first = *element(bytes, 0)? as char;
        let last = *element(bytes, bytes.len() - 1)? as char;
        let sub = |range: std::ops::Range<usize>| {
            word.get(range.clone())
                .ok_or_else(|| TopicError::example(format!("{:?} is not a char boundary range", range)))
        };
        let head = sub(0..2)?;
        let middle = sub(2..5)?;
        let tail = word
            .get(2..)
            .ok_or_else(|| TopicError::example("2.. is not a char boundary"))?;

        let phrase = "rust programming";
        let position = phrase
            .find("prog")
            .ok_or_else(|| TopicError::example("\"prog\" not found"))?;

        Ok(Section::new(self.id(), self.title())
            .lines(
                Lines::titled("String Concatenation:")
                    .line(format!("\"{}\" + \" \" + \"{}\" = \"{}\"", greeting, name, full_greeting))
                    .line(format!("format!(\"{{}}, {{}}!\") = \"{}, {}!\"", greeting, name)),
            )
            .lines(
                Lines::titled("String Length:")
                    .line(format!("\"{}\".len() = {}", text, text.len()))
                    .line(format!(
                        "\"{}\".len() = {} bytes, .chars().count() = {}",
                        accented,
                        accented.len(),
                        accented.chars().count()
                    )),
            )
            .lines(
                Lines::titled("String Indexing & Slicing (byte offsets):")
                    .line(format!("String: \"{}\"", word))
                    .line(format!("as_bytes()[0] = {} (first character)", first))
                    .line(format!("as_bytes()[{}] = {} (last character)", bytes.len() - 1, last))
                    .line(format!("&word[0..2] = \"{}\" (first 2 characters)", head))
                    .line(format!("&word[2..5] = \"{}\" (from index 2 to 5)", middle))
                    .line(format!("&word[2..] = \"{}\" (from index 2 to end)", tail)),
            )
            .lines(
                Lines::titled("String Methods:")
                    .line(format!("\"{}\".to_uppercase() = \"{}\"", phrase, phrase.to_uppercase()))
                    .line(format!("\"RUST LANG\".to_lowercase() = \"{}\"", "RUST LANG".to_lowercase()))
                    .line(format!("\"{}\".contains(\"prog\") = {}", phrase, phrase.contains("prog")))
                    .line(format!("\"{}\".find(\"prog\") = Some({})", phrase, position))
                    .line(format!("\"{}\".find(\"xyz\") = {:?}", phrase, phrase.find("xyz"))),
            ))
    }
}
