//! HTML text escaping for card markup.
//!
//! TRADE-OFFS
//! ==========
//! Cards are rendered from a markup string. `RenderMode::Raw` reproduces the
//! plain interpolation behavior and lets author/body inject markup into the
//! page; it exists only as an explicit opt-in.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

use std::borrow::Cow;

/// How user-supplied text is interpolated into card markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Escape HTML-significant characters.
    #[default]
    Escaped,
    /// Insert text verbatim. Injection-prone.
    Raw,
}

impl RenderMode {
    /// Prepare `text` for interpolation under this mode.
    pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Escaped => escape_html(text),
            Self::Raw => Cow::Borrowed(text),
        }
    }
}

/// Escape `&`, `<`, `>`, `"` and `'`. Borrows when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
