//! Shared primitives used across Shade crates.

use core::fmt;

/// Result alias used across the workspace.
pub type ShadeResult<T> = Result<T, ShadeError>;

/// Top-level error type for the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeError {
    pub code: &'static str,
    pub message: String,
}

impl ShadeError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// An element identifier that did not resolve to a node.
    pub fn node_missing(element_id: &str) -> Self {
        Self::new(
            "dom.lookup.node_missing",
            format!("no node with element id `{element_id}`"),
        )
    }

    /// A content glob in the style build configuration failed to compile.
    pub fn bad_content_glob(pattern: &str, detail: impl fmt::Display) -> Self {
        Self::new(
            "style.content.bad_glob",
            format!("content pattern `{pattern}` is not a valid glob: {detail}"),
        )
    }
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ShadeError {}

#[cfg(test)]
mod tests {
    use super::ShadeError;

    #[test]
    fn display_includes_code_and_message() {
        let error = ShadeError::node_missing("sidebar");
        assert_eq!(error.code, "dom.lookup.node_missing");
        assert_eq!(
            error.to_string(),
            "dom.lookup.node_missing: no node with element id `sidebar`"
        );
    }

    #[test]
    fn glob_error_carries_pattern() {
        let error = ShadeError::bad_content_glob("./[", "unclosed character class");
        assert_eq!(error.code, "style.content.bad_glob");
        assert!(error.message.contains("./["));
    }
}
