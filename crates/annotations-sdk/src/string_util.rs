/// String helpers shared across the reporter crates.
pub struct StringUtil;

/// Maximum number of characters of a response body kept in error messages.
pub const MAX_LOGGED_BODY: usize = 512;

impl StringUtil {
    /// Returns the value unchanged unless it is absent or empty. Whitespace is
    /// kept as given.
    pub fn non_empty(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.is_empty())
    }

    /// Cut `input` down to at most `max_chars` characters, appending `...` when
    /// anything was dropped.
    pub fn truncate(input: &str, max_chars: usize) -> String {
        match input.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &input[..idx]),
            None => input.to_string(),
        }
    }
}
