//! Path template rewriting into target interpolation syntax

use crate::generation::naming::PARAM_MARKER;

/// Interpolation opening token for JavaScript template literals
pub const JS_INTERPOLATION_OPEN: &str = "${";

/// Rewrites `{param}` placeholders into `${param}`.
///
/// Only the opening brace is rewritten; the closing `}` is already valid
/// template-literal syntax.
///
/// # Examples
/// ```
/// use sdkgen::generation::templating::to_template_literal;
///
/// assert_eq!(to_template_literal("/users/{userId}"), "/users/${userId}");
/// ```
pub fn to_template_literal(path: &str) -> String {
    path.replace(PARAM_MARKER, JS_INTERPOLATION_OPEN)
}
