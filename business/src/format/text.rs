/// Visible text of a long-text cell and its hover content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    pub visible: String,
    /// `Some` only when the value was cut.
    pub full: Option<String>,
}

pub const ELLIPSIS: &str = "...";

/// Cuts `text` to its first `max_len` characters.
///
/// Strings of at most `max_len` characters are returned whole with no tooltip.
pub fn truncate(text: &str, max_len: Option<usize>) -> Truncated {
    match max_len {
        Some(max_len) if text.chars().count() > max_len => {
            let prefix: String = text.chars().take(max_len).collect();
            Truncated {
                visible: format!("{prefix}{ELLIPSIS}"),
                full: Some(text.to_owned()),
            }
        }
        _ => Truncated {
            visible: text.to_owned(),
            full: None,
        },
    }
}
