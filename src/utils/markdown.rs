//! Telegram MarkdownV2 helpers.
//!
//! Every piece of user-supplied or dynamic text that ends up in a MarkdownV2
//! message has to go through [`escape_markdown`], otherwise Telegram rejects
//! the whole message.

const SPECIAL_CHARS: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!', '\\',
];

/// Escapes all characters that have special meaning in MarkdownV2.
///
/// # Example
/// ```
/// use channel_gate_bot::utils::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("11.01 • 09:30"), "11\\.01 • 09:30");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes the target of an inline link, where only `)` and `\` are special.
pub fn escape_link_url(url: &str) -> String {
    url.replace('\\', "\\\\").replace(')', "\\)")
}

/// Bold text.
pub fn bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}

/// Italic text.
pub fn italic(text: &str) -> String {
    format!("_{}_", escape_markdown(text))
}

/// Inline code.
pub fn code(text: &str) -> String {
    format!("`{}`", text.replace('\\', "\\\\").replace('`', "\\`"))
}

/// Inline link with escaped label and target.
pub fn link(label: &str, url: &str) -> String {
    format!("[{}]({})", escape_markdown(label), escape_link_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_basic_markdown() {
        assert_eq!(escape_markdown("Hello *world*"), "Hello \\*world\\*");
        assert_eq!(escape_markdown("_italic_"), "\\_italic\\_");
        assert_eq!(escape_markdown("Do'stim"), "Do'stim");
    }

    #[test]
    fn test_escape_phone_and_dates() {
        assert_eq!(escape_markdown("+998 93 495 48 08"), "\\+998 93 495 48 08");
        assert_eq!(escape_markdown("11.01.2024"), "11\\.01\\.2024");
    }

    #[test]
    fn test_escape_empty_and_plain_text() {
        assert_eq!(escape_markdown(""), "");
        assert_eq!(escape_markdown("plain text"), "plain text");
    }

    #[test]
    fn test_link_escapes_label_and_target() {
        assert_eq!(
            link("Ko'rish!", "https://t.me/some_channel/42"),
            "[Ko'rish\\!](https://t.me/some_channel/42)"
        );
        assert_eq!(escape_link_url("https://x.y/a)b"), "https://x.y/a\\)b");
    }

    #[test]
    fn test_bold_and_code() {
        assert_eq!(bold("Statistika:"), "*Statistika:*");
        assert_eq!(code("+998 93"), "`+998 93`");
    }
}
