//! The greeting helper.

/// `"Hello {name}!"`.
pub fn hello(name: &str) -> String {
    format!("Hello {name}!")
}
