//! Elementwise math functions and numeric conversions.

use refguide_core::{cells, EmitContext, Lines, Section, Table, Topic, TopicError};
use std::f64::consts::{E, FRAC_PI_4};

/// Float to integer with `as`: truncates toward zero, saturates at the
/// integer bounds and maps NaN to 0.
pub fn truncate_to_int(value: f64) -> i64 {
    value as i64
}

pub struct MathFunctions;

impl Topic for MathFunctions {
    fn id(&self) -> &'static str {
        "operations.math_functions"
    }

    fn title(&self) -> &'static str {
        "9. ADVANCED MATH OPERATIONS"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let num = -12.7_f64;
        let angle = FRAC_PI_4;

        let powers = Table::new(&[("Expression", 22), ("Result", 8), ("Meaning", 24)])
            .row(cells!["2.0_f64.powf(3.0)", format!("{:.0}", 2.0_f64.powf(3.0)), "2^3"])
            .row(cells!["5.0_f64.powi(2)", format!("{:.0}", 5.0_f64.powi(2)), "5^2"])
            .row(cells!["16.0_f64.sqrt()", format!("{:.0}", 16.0_f64.sqrt()), "square root of 16"])
            .row(cells!["25.0_f64.sqrt()", format!("{:.0}", 25.0_f64.sqrt()), "square root of 25"]);

        let rounding = Table::new(&[("Expression", 22), ("Result", 8), ("Meaning", 24)])
            .row(cells![format!("({:.1}_f64).abs()", num), format!("{:.1}", num.abs()), "absolute value"])
            .row(cells!["12.7_f64.floor()", format!("{:.0}", 12.7_f64.floor()), "round down"])
            .row(cells!["12.3_f64.ceil()", format!("{:.0}", 12.3_f64.ceil()), "round up"])
            .row(cells!["12.5_f64.round()", format!("{:.0}", 12.5_f64.round()), "half away from zero"]);

        let trig = Table::new(&[("Expression", 22), ("Result", 8), ("Meaning", 24)])
            .row(cells!["(π/4).sin()", format!("{:.2}", angle.sin()), "sine of 45°"])
            .row(cells!["(π/4).cos()", format!("{:.2}", angle.cos()), "cosine of 45°"])
            .row(cells!["(π/4).tan()", format!("{:.2}", angle.tan()), "tangent of 45°"])
            .row(cells!["E.ln()", format!("{:.2}", E.ln()), "natural log of e"])
            .row(cells!["100.0_f64.log10()", format!("{:.1}", 100.0_f64.log10()), "log base 10 of 100"]);

        Ok(Section::new(self.id(), self.title())
            .note("methods on f64")
            .lines(Lines::titled("Power & Root Operations:"))
            .table(powers)
            .lines(Lines::titled("Rounding & Absolute Value:"))
            .table(rounding)
            .lines(Lines::titled("Trigonometric & Logarithmic Functions:"))
            .table(trig))
    }
}

pub struct Conversions;

impl Topic for Conversions {
    fn id(&self) -> &'static str {
        "operations.conversions"
    }

    fn title(&self) -> &'static str {
        "10. TYPE CONVERSION"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let int_val: i32 = 42;
        let float_val = int_val as f64;

        let positive = 45.8_f64;
        let negative = -45.8_f64;
        let too_big = 300.0_f64;

        let parsed: i32 = "2024"
            .parse()
            .map_err(|e| TopicError::example(format!("\"2024\" did not parse: {}", e)))?;
        let bad_parse = "abc".parse::<i32>();
        let narrow_ok = u8::try_from(200_i32);
        let narrow_err = u8::try_from(300_i32);

        let table = Table::new(&[("Conversion", 24), ("Input", 8), ("Output", 10), ("Rule", 30)])
            .row(cells!["i32 as f64", int_val, format!("{:?}", float_val), "exact"])
            .row(cells!["f64 as i64", positive, truncate_to_int(positive), "decimal part truncated"])
            .row(cells!["f64 as i64 (negative)", negative, truncate_to_int(negative), "truncated toward zero"])
            .row(cells!["f64 as u8", too_big, too_big as u8, "saturates at u8::MAX"])
            .row(cells!["i32::from(u8)", 200_u8, i32::from(200_u8), "lossless widening"]);

        let int_text = 123.to_string();
        let float_text = format!("{:.2}", 45.67);

        let text = Lines::titled("Numbers and Text:")
            .line(format!("123.to_string() = \"{}\"", int_text))
            .line(format!("format!(\"{{:.2}}\", 45.67) = \"{}\"", float_text))
            .line(format!("\"2024\".parse::<i32>() = Ok({})", parsed))
            .line(format!("\"abc\".parse::<i32>().is_err() = {}", bad_parse.is_err()));

        let fallible = Lines::titled("Fallible Narrowing:")
            .line(format!("u8::try_from(200) = {:?}", narrow_ok.ok()))
            .line(format!("u8::try_from(300).is_err() = {}", narrow_err.is_err()));

        Ok(Section::new(self.id(), self.title())
            .note("as casts, From/TryFrom, parse")
            .table(table)
            .lines(text)
            .lines(fallible))
    }
}
