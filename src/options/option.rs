//! A single configuration option.

use std::cell::Cell;
use std::fmt;

/// Error type for option field access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    /// The requested field does not exist.
    #[error("option '{name}' is missing argument #{index}")]
    MissingArgument { name: String, index: usize },

    /// The field exceeds the allowed length.
    #[error("option '{name}' argument #{index} is longer than {max_len} bytes")]
    TooLong {
        name: String,
        index: usize,
        max_len: usize,
    },

    /// A uniquely-named option appears more than once.
    #[error("more than one instance of option '{name}'")]
    Duplicate { name: String },
}

/// One tokenized configuration line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOption {
    fields: Vec<String>,
    touched: Cell<bool>,
}

impl ConfigOption {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            touched: Cell::new(false),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The option name (field 0), if any.
    pub fn name(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Read a required field.
    pub fn get(&self, index: usize, max_len: usize) -> Result<&str, OptionError> {
        let field = self
            .fields
            .get(index)
            .ok_or_else(|| OptionError::MissingArgument {
                name: self.display_name(),
                index,
            })?;
        self.check_len(index, field, max_len)
    }

    /// Read an optional field. A missing field reads as `""`.
    pub fn get_optional(&self, index: usize, max_len: usize) -> Result<&str, OptionError> {
        match self.fields.get(index) {
            Some(field) => self.check_len(index, field, max_len),
            None => Ok(""),
        }
    }

    /// Mark this option as consumed.
    pub fn touch(&self) {
        self.touched.set(true);
    }

    pub fn touched(&self) -> bool {
        self.touched.get()
    }

    fn check_len<'a>(&self, index: usize, field: &'a str, max_len: usize) -> Result<&'a str, OptionError> {
        if field.len() > max_len {
            return Err(OptionError::TooLong {
                name: self.display_name(),
                index,
                max_len,
            });
        }
        Ok(field)
    }

    fn display_name(&self) -> String {
        self.name().unwrap_or_default().to_string()
    }
}

impl fmt::Display for ConfigOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(" "))
    }
}
