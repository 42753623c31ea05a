//! Shared utilities for integration tests.

use tunlisten::listen::{ListenError, ListenList, LoadMode};
use tunlisten::options::OptionList;

/// Load `text` as a server config with the `listen` directive.
pub fn load(text: &str, mode: LoadMode, cores: u32) -> Result<ListenList, ListenError> {
    ListenList::load(&OptionList::parse(text), "listen", mode, cores)
}

/// Load a config that is expected to be valid.
#[allow(dead_code)]
pub fn load_ok(text: &str) -> ListenList {
    load(text, LoadMode::Nominal, 3).unwrap_or_else(|e| panic!("{:?} should load: {}", text, e))
}

/// Split a rendered entry into its whitespace-separated fields.
#[allow(dead_code)]
pub fn rendered_fields(rendered: &str) -> Vec<String> {
    rendered.split_whitespace().map(String::from).collect()
}
