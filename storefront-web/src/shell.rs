//! Centering container for the sign-in and sign-up forms.

use std::fmt;

use axum::response::{Html, IntoResponse, Response};

/// Markup emitted before the children.
pub const SHELL_OPEN: &str = "<div class=\"flex min-h-screen items-center justify-center bg-muted\">\n<div class=\"w-full max-w-md rounded-lg border bg-background p-6 shadow-sm\">\n";
/// Markup emitted after the children.
pub const SHELL_CLOSE: &str = "\n</div>\n</div>";

/// Stateless wrapper that places already-rendered markup inside fixed
/// styling containers.
///
/// Children are written verbatim: nothing is escaped, trimmed or added
/// between the two containers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthShell {
    children: String,
}

impl AuthShell {
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
        }
    }

    pub fn children(&self) -> &str {
        &self.children
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AuthShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SHELL_OPEN)?;
        f.write_str(&self.children)?;
        f.write_str(SHELL_CLOSE)
    }
}

impl IntoResponse for AuthShell {
    fn into_response(self) -> Response {
        Html(self.render()).into_response()
    }
}
