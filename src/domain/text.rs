use unicode_width::UnicodeWidthStr;

/// Wrap text to the given display width, breaking on character boundaries.
/// Width is measured in terminal cells, so double-width characters count
/// as two.
pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        if c == '\n' {
            result.push(c);
            current_line_width = 0;
            continue;
        }

        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }

        result.push(c);
    }

    result
}

/// Cap text at `max_height` lines, replacing the overflow with an ellipsis
/// line.
pub fn truncate_text(s: &str, max_height: usize) -> String {
    if max_height == 0 {
        return String::new();
    }

    let lines: Vec<&str> = s.lines().collect();
    if lines.len() > max_height {
        if max_height == 1 {
            String::from("...")
        } else {
            format!("{}\n...", lines[..max_height - 1].join("\n"))
        }
    } else {
        s.to_string()
    }
}

/// Shorten a single line to the given display width, appending an ellipsis
/// when anything was cut.
pub fn ellipsize(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let budget = width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        if used + char_width > budget {
            break;
        }
        used += char_width;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        let actual = wrap_text("hello, world!", 13);
        let expected = "hello, world!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        let actual = wrap_text("hello, world!", 4);
        let expected = "hell\no, w\norld\n!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        let actual = wrap_text("こんにちは、世界！", 7);
        let expected = "こんに\nちは、\n世界！";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_preserves_newlines() {
        let actual = wrap_text("ab\ncd", 4);
        let expected = "ab\ncd";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let actual = wrap_text("hello, world!", 0);
        let expected = "";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_no_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 3);
        let expected = "foo\nbar\nbaz";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_truncate() {
        let actual = truncate_text("foo\nbar\nbaz", 2);
        let expected = "foo\n...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_truncate_text_single_line() {
        let actual = truncate_text("foo\nbar", 1);
        let expected = "...";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_ellipsize_short() {
        assert_eq!(ellipsize("hi", 10), "hi");
    }

    #[test]
    fn test_ellipsize_cut() {
        assert_eq!(ellipsize("hello, world!", 6), "hello…");
    }

    #[test]
    fn test_ellipsize_double_width() {
        assert_eq!(ellipsize("こんにちは", 5), "こん…");
    }
}
