//! The line writer: an ordered field table with registration and
//! rendering.

use crate::error::{Result, WriterError};
use crate::field::Field;
use crate::value::Values;

/// The default separator: a vertically aligning glyph bracketed by
/// spaces.
pub const DEFAULT_SEPARATOR: &str = " ‖ ";

/// A field definition for [`LineWriter::from_defs`].
///
/// Only named definitions can currently be registered. Positional
/// definitions are reserved for a future version and constructing a
/// writer from one is rejected with [`WriterError::UnnamedFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDef {
    /// A named message template.
    Named { name: String, message: String },
    /// A positional template, reserved for future use.
    Positional { message: String },
}

impl FieldDef {
    /// Creates a named definition.
    pub fn named(name: impl Into<String>, message: impl Into<String>) -> FieldDef {
        FieldDef::Named {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a positional definition.
    pub fn positional(message: impl Into<String>) -> FieldDef {
        FieldDef::Positional {
            message: message.into(),
        }
    }
}

/// Prints repeated results while maintaining alignment for changing
/// values.
///
/// A `LineWriter` de-clutters the output of iterative processes, such as
/// model fitting: each named field keeps a width high-water mark, so a
/// column that once held a wide value stays wide and the columns line up
/// across successive prints.
///
/// # Example
///
/// ```rust
/// use tidyline::{LineWriter, Values};
///
/// let mut writer = LineWriter::with_fields([
///     ("iter", "iter {:3d}"),
///     ("loss", "loss {:.3f}"),
/// ])?;
///
/// let line = writer.format(&Values::new().set("iter", 7).set("loss", 0.25))?;
/// assert_eq!(line, "iter   7 ‖ loss 0.250");
/// # Ok::<(), tidyline::WriterError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LineWriter {
    sep: String,
    fields: Vec<Field>,
}

impl Default for LineWriter {
    fn default() -> Self {
        LineWriter::new()
    }
}

impl LineWriter {
    /// Creates an empty writer with the default separator.
    pub fn new() -> Self {
        LineWriter {
            sep: DEFAULT_SEPARATOR.to_string(),
            fields: Vec::new(),
        }
    }

    /// Creates an empty writer with a custom separator.
    ///
    /// Characters that encourage vertical alignment (such as the default)
    /// make for prettier output.
    pub fn with_separator(sep: impl Into<String>) -> Self {
        LineWriter {
            sep: sep.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a writer from an ordered list of `(name, message)` pairs.
    ///
    /// Registration order defines output order. Any invalid message fails
    /// the whole construction.
    pub fn with_fields<I, N, M>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, M)>,
        N: Into<String>,
        M: AsRef<str>,
    {
        let mut writer = LineWriter::new();
        for (name, message) in fields {
            writer.add_field(name, message.as_ref())?;
        }
        Ok(writer)
    }

    /// Creates a writer from prepared field definitions.
    ///
    /// Any [`FieldDef::Positional`] definition is rejected with
    /// [`WriterError::UnnamedFields`].
    pub fn from_defs<I>(defs: I) -> Result<Self>
    where
        I: IntoIterator<Item = FieldDef>,
    {
        let mut writer = LineWriter::new();
        for def in defs {
            match def {
                FieldDef::Named { name, message } => writer.add_field(name, &message)?,
                FieldDef::Positional { .. } => return Err(WriterError::UnnamedFields),
            }
        }
        Ok(writer)
    }

    /// Creates a writer from a JSON object mapping names to message
    /// templates, in the map's order.
    ///
    /// Non-string template values are rejected with
    /// [`WriterError::NotString`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tidyline::LineWriter;
    ///
    /// let layout = serde_json::json!({
    ///     "iter": "iteration {:d}",
    ///     "loss": "loss {:.4f}",
    /// });
    /// let writer = LineWriter::from_json(layout.as_object().unwrap())?;
    /// assert_eq!(writer.names().collect::<Vec<_>>(), ["iter", "loss"]);
    /// # Ok::<(), tidyline::WriterError>(())
    /// ```
    pub fn from_json(fields: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut writer = LineWriter::new();
        for (name, template) in fields {
            let message = template.as_str().ok_or_else(|| WriterError::NotString {
                found: json_type_name(template),
            })?;
            writer.add_field(name.clone(), message)?;
        }
        Ok(writer)
    }

    /// The current separator.
    pub fn separator(&self) -> &str {
        &self.sep
    }

    /// Replaces the separator used by subsequent render calls.
    pub fn set_separator(&mut self, sep: impl Into<String>) {
        self.sep = sep.into();
    }

    /// Registers a named message template.
    ///
    /// Validation runs before any mutation, so a failed call leaves the
    /// writer unchanged. Re-registering an existing name replaces its
    /// type, width, and precision in place without changing its position;
    /// note that the width restarts at the new pattern's declared minimum
    /// rather than carrying over the old high-water mark.
    pub fn add_field(&mut self, name: impl Into<String>, message: &str) -> Result<()> {
        let field = Field::parse(name, message)?;
        match self
            .fields
            .iter_mut()
            .find(|existing| existing.name() == field.name())
        {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        Ok(())
    }

    /// Registered field names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::name)
    }

    /// Looks up a registered field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders one line from the given values.
    ///
    /// Every registered field must be present in `values`; names the
    /// writer does not know about are ignored. Fields are rendered and
    /// joined in registration order, regardless of the order the values
    /// were set.
    ///
    /// Rendering a value wider than the field's high-water mark raises
    /// the mark, so the value appears unpadded now and every later value
    /// pads out to at least its width. Presence and value kinds are
    /// checked before any mark moves, so a failed call has no side
    /// effects.
    pub fn format(&mut self, values: &Values) -> Result<String> {
        let mut supplied = Vec::with_capacity(self.fields.len());
        let mut missing = Vec::new();
        for field in &self.fields {
            match values.get(field.name()) {
                Some(value) => supplied.push(value),
                None => missing.push(field.name().to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(WriterError::MissingFields { names: missing });
        }

        let mut rendered = Vec::with_capacity(self.fields.len());
        for (field, value) in self.fields.iter().zip(&supplied) {
            rendered.push(field.render_value(*value)?);
        }

        let mut parts = Vec::with_capacity(self.fields.len());
        for (field, text) in self.fields.iter_mut().zip(&rendered) {
            parts.push(field.finish(text));
        }
        Ok(parts.join(&self.sep))
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_field_failure_leaves_the_writer_unchanged() {
        let mut writer = LineWriter::new();
        writer.add_field("good", "{:d}").unwrap();

        let err = writer.add_field("bad", "no pattern").unwrap_err();
        assert!(matches!(err, WriterError::NoPattern { .. }));
        assert_eq!(writer.len(), 1);
        assert_eq!(writer.names().collect::<Vec<_>>(), ["good"]);
    }

    #[test]
    fn empty_writer_formats_an_empty_line() {
        let mut writer = LineWriter::new();
        assert_eq!(writer.format(&Values::new()).unwrap(), "");
    }

    #[test]
    fn field_lookup() {
        let mut writer = LineWriter::new();
        writer.add_field("n", "{:d}").unwrap();
        assert!(writer.field("n").is_some());
        assert!(writer.field("m").is_none());
    }

    #[test]
    fn json_type_names_cover_all_variants() {
        assert_eq!(json_type_name(&serde_json::json!(null)), "null");
        assert_eq!(json_type_name(&serde_json::json!(true)), "a boolean");
        assert_eq!(json_type_name(&serde_json::json!(1)), "a number");
        assert_eq!(json_type_name(&serde_json::json!("s")), "a string");
        assert_eq!(json_type_name(&serde_json::json!([])), "an array");
        assert_eq!(json_type_name(&serde_json::json!({})), "an object");
    }
}
