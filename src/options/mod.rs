//! Tokenized configuration options.
//!
//! # Data Flow
//! ```text
//! server config text
//!     → OptionList::parse (one option per line, whitespace split)
//!     → ConfigOption (ordered string fields + touched flag)
//!     → consumers read fields by index via get / get_optional
//! ```
//!
//! # Design Decisions
//! - Field reads are bounds and length checked; nothing indexes raw vectors
//! - Consumers mark options as touched so leftovers can be reported

mod option;

pub use option::{ConfigOption, OptionError};

/// An ordered list of configuration options.
#[derive(Debug, Clone, Default)]
pub struct OptionList {
    options: Vec<ConfigOption>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize configuration text into options.
    ///
    /// Blank lines and lines whose first non-blank character is `#` or `;`
    /// are skipped.
    pub fn parse(text: &str) -> Self {
        let options = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with(';'))
            .map(|line| ConfigOption::new(line.split_whitespace()))
            .collect();
        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigOption> {
        self.options.iter()
    }

    /// Look up the single option named `name`.
    ///
    /// Returns `Ok(None)` when absent and an error when the name occurs more
    /// than once. A found option is marked touched.
    pub fn get_ptr(&self, name: &str) -> Result<Option<&ConfigOption>, OptionError> {
        let mut found = self.options.iter().filter(|o| o.name() == Some(name));
        match (found.next(), found.next()) {
            (None, _) => Ok(None),
            (Some(option), None) => {
                option.touch();
                Ok(Some(option))
            }
            (Some(_), Some(_)) => Err(OptionError::Duplicate {
                name: name.to_string(),
            }),
        }
    }

    /// Options nobody has touched yet.
    pub fn unused(&self) -> impl Iterator<Item = &ConfigOption> + '_ {
        self.options.iter().filter(|o| !o.touched())
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a ConfigOption;
    type IntoIter = std::slice::Iter<'a, ConfigOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let list = OptionList::parse(
            "# server config\n\nlisten 0.0.0.0 1194 udp\n  ; old\nproto   tcp\n",
        );
        assert_eq!(list.len(), 2);

        let fields: Vec<Vec<&str>> = list
            .iter()
            .map(|o| o.fields().iter().map(String::as_str).collect())
            .collect();
        assert_eq!(fields[0], ["listen", "0.0.0.0", "1194", "udp"]);
        assert_eq!(fields[1], ["proto", "tcp"]);
    }

    #[test]
    fn test_get_ptr_unique() {
        let list = OptionList::parse("proto udp\nport 1195\n");
        let proto = list.get_ptr("proto").unwrap().unwrap();
        assert_eq!(proto.get(1, 16).unwrap(), "udp");
        assert!(proto.touched());
        assert!(list.get_ptr("local").unwrap().is_none());
    }

    #[test]
    fn test_get_ptr_duplicate() {
        let list = OptionList::parse("port 1195\nport 1196\n");
        let err = list.get_ptr("port").unwrap_err();
        assert!(matches!(err, OptionError::Duplicate { ref name } if name == "port"));
    }

    #[test]
    fn test_unused_tracks_touch() {
        let list = OptionList::parse("a 1\nb 2\nc 3\n");
        list.get_ptr("b").unwrap();
        let names: Vec<_> = list.unused().filter_map(ConfigOption::name).collect();
        assert_eq!(names, ["a", "c"]);
    }
}
