//! Per-field template state and value rendering.

use unicode_width::UnicodeWidthStr;

use crate::error::{Result, WriterError};
use crate::pattern::{self, Kind};
use crate::value::Number;

/// Fixed-point digits used when a float pattern gives no precision.
const DEFAULT_FLOAT_PRECISION: usize = 6;

/// A named value slot: the literal text around its substitution site plus
/// the current type, width, and precision state.
///
/// The width is a high-water mark: it starts at the pattern's declared
/// minimum (0 when absent) and only ever grows as wider values are
/// rendered. It never shrinks for the lifetime of the field.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    prefix: String,
    suffix: String,
    kind: Kind,
    width: usize,
    precision: Option<usize>,
}

impl Field {
    /// Parses a message template into a field. Validation runs before
    /// anything is built, so a failed parse has no effect anywhere.
    pub(crate) fn parse(name: impl Into<String>, message: &str) -> Result<Field> {
        let parsed = pattern::parse_message(message)?;
        Ok(Field {
            name: name.into(),
            prefix: message[..parsed.site.range.start].to_string(),
            suffix: message[parsed.site.range.end..].to_string(),
            kind: parsed.kind,
            width: parsed.width.unwrap_or(0),
            precision: parsed.precision,
        })
    }

    /// The field's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The numeric kind this field renders.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The current minimum rendered width. Monotonically non-decreasing.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Digits after the decimal point, when declared.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// The message template with its substitution site replaced by `{}`.
    pub fn template(&self) -> String {
        format!("{}{{}}{}", self.prefix, self.suffix)
    }

    /// The field's current pattern, recomposed from its stored state.
    pub fn pattern(&self) -> String {
        pattern::compose(Some(self.kind.tag()), Some(self.width), self.precision)
    }

    /// Raises the width high-water mark to `measured` when it is wider
    /// than anything seen before. Returns `true` when the mark moved.
    ///
    /// This is the only mutation a render call performs.
    pub fn ratchet(&mut self, measured: usize) -> bool {
        if measured > self.width {
            self.width = measured;
            true
        } else {
            false
        }
    }

    /// Formats a value against the current width and precision, without
    /// touching the high-water mark.
    ///
    /// Integers pad with leading spaces to the minimum width. Floats round
    /// to the declared precision (6 digits when undeclared) before
    /// padding. Integer values widen into float fields; float values into
    /// integer fields are a [`WriterError::TypeMismatch`].
    pub(crate) fn render_value(&self, value: Number) -> Result<String> {
        match self.kind {
            Kind::Int => match value {
                Number::I64(n) => Ok(format!("{:>width$}", n, width = self.width)),
                Number::U64(n) => Ok(format!("{:>width$}", n, width = self.width)),
                Number::F64(_) => Err(WriterError::TypeMismatch {
                    name: self.name.clone(),
                    expected: self.kind.name(),
                    actual: value.kind_name(),
                }),
            },
            Kind::Float => {
                let precision = self.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
                Ok(format!(
                    "{:>width$.precision$}",
                    value.to_f64(),
                    width = self.width,
                    precision = precision,
                ))
            }
        }
    }

    /// Ratchets the width to a freshly rendered value and substitutes it
    /// into the literal template.
    pub(crate) fn finish(&mut self, rendered: &str) -> String {
        self.ratchet(rendered.width());
        format!("{}{}{}", self.prefix, rendered, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_the_literal_around_the_site() {
        let field = Field::parse("delta", "value += {:.2f} so far").unwrap();
        assert_eq!(field.name(), "delta");
        assert_eq!(field.template(), "value += {} so far");
        assert_eq!(field.kind(), Kind::Float);
        assert_eq!(field.width(), 0);
        assert_eq!(field.precision(), Some(2));
    }

    #[test]
    fn parse_defaults_missing_width_to_zero() {
        let field = Field::parse("n", "{:d}").unwrap();
        assert_eq!(field.width(), 0);
    }

    #[test]
    fn ratchet_only_grows() {
        let mut field = Field::parse("n", "{:4d}").unwrap();
        assert!(!field.ratchet(3));
        assert_eq!(field.width(), 4);
        assert!(field.ratchet(7));
        assert_eq!(field.width(), 7);
        assert!(!field.ratchet(5));
        assert_eq!(field.width(), 7);
    }

    #[test]
    fn integers_pad_with_leading_spaces() {
        let field = Field::parse("n", "{:5d}").unwrap();
        assert_eq!(field.render_value(Number::I64(42)).unwrap(), "   42");
        assert_eq!(field.render_value(Number::I64(-42)).unwrap(), "  -42");
        assert_eq!(field.render_value(Number::U64(123456)).unwrap(), "123456");
    }

    #[test]
    fn floats_round_then_pad() {
        let field = Field::parse("v", "{:8.2f}").unwrap();
        assert_eq!(field.render_value(Number::F64(3.14159)).unwrap(), "    3.14");
    }

    #[test]
    fn float_precision_defaults_to_six() {
        let field = Field::parse("v", "{:f}").unwrap();
        assert_eq!(field.render_value(Number::F64(3.5)).unwrap(), "3.500000");
    }

    #[test]
    fn integers_widen_into_float_fields() {
        let field = Field::parse("v", "{:.1f}").unwrap();
        assert_eq!(field.render_value(Number::I64(3)).unwrap(), "3.0");
    }

    #[test]
    fn floats_into_integer_fields_are_rejected() {
        let field = Field::parse("n", "{:d}").unwrap();
        let err = field.render_value(Number::F64(1.5)).unwrap_err();
        assert!(matches!(err, WriterError::TypeMismatch { .. }));
    }

    #[test]
    fn pattern_recomposes_current_state() {
        let mut field = Field::parse("n", "{:4d}").unwrap();
        assert_eq!(field.pattern(), "{:4d}");
        field.ratchet(9);
        assert_eq!(field.pattern(), "{:9d}");
    }

    #[test]
    fn finish_substitutes_and_ratchets() {
        let mut field = Field::parse("n", "count: {:d}!").unwrap();
        let rendered = field.render_value(Number::I64(500)).unwrap();
        assert_eq!(field.finish(&rendered), "count: 500!");
        assert_eq!(field.width(), 3);
    }
}
