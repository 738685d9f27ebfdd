//! Utilities for sanitizing diagnostic text.
//!
//! Error details end up in site results, JSON reports and log lines, so
//! control characters are removed and the text is cut to a short prefix.

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can cause
/// issues when written to CSV or displayed in logs. This function removes
/// them while preserving readability.
///
/// # Arguments
///
/// * `message` - The error message to sanitize
///
/// # Returns
///
/// A sanitized version of the message with control characters removed.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7f}')
        .collect()
}

/// Sanitizes an error message and keeps at most `max_chars` characters.
///
/// Line breaks are flattened to spaces so the detail stays on one line.
/// Truncation counts characters, not bytes, so multi-byte text is never split.
pub fn sanitize_and_truncate_error_message(message: &str, max_chars: usize) -> String {
    sanitize_error_message(message)
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(max_chars)
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_error_message_removes_control_chars() {
        let input = "Error\x00message\x01with\x02control\x03chars";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Errormessagewithcontrolchars");
    }

    #[test]
    fn test_sanitize_error_message_preserves_tabs_and_newlines() {
        let input = "Error\tmessage\nwith\twhitespace";
        assert_eq!(sanitize_error_message(input), input);
    }

    #[test]
    fn test_sanitize_error_message_preserves_unicode() {
        let input = "Error message with unicode: 测试 🚀";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Error message with unicode: 测试 🚀");
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let input = "x".repeat(250);
        assert_eq!(sanitize_and_truncate_error_message(&input, 100).len(), 100);
    }

    #[test]
    fn test_truncate_short_message_unchanged() {
        assert_eq!(
            sanitize_and_truncate_error_message("HTTP 503", 100),
            "HTTP 503"
        );
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let input = "é".repeat(120);
        let output = sanitize_and_truncate_error_message(&input, 100);
        assert_eq!(output.chars().count(), 100);
    }

    #[test]
    fn test_truncate_flattens_line_breaks() {
        assert_eq!(
            sanitize_and_truncate_error_message("line one\nline two", 100),
            "line one line two"
        );
    }
}
