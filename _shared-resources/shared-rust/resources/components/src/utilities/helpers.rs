// Helper utilities for tab components
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Marker appended to a label line that was cut short
pub const ELLIPSIS: &str = "…";

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color from a config string
/// Accepts named colors ("cyan", "dark_blue", ...), "#rrggbb" and "reset"
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(hex_color);
    }

    let parsed = match color.to_lowercase().as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Color::DarkGray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}

/// Pull the foreground color out of a style, dropping everything else
pub fn color_from_style(style: Option<&Style>) -> Option<Color> {
    style.and_then(|s| s.fg)
}

/// Display width of a string in terminal columns
pub fn display_width(text: &str) -> u16 {
    u16::try_from(Span::raw(text).width()).unwrap_or(u16::MAX)
}

/// Wrap text to fit within max width (in terminal columns)
/// Words wider than the limit are broken at character boundaries
pub fn wrap_text(text: &str, max_width: u16) -> Vec<String> {
    let mut lines = Vec::new();
    if max_width == 0 {
        return lines;
    }

    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0u16;

        for word in paragraph.split_whitespace() {
            let word_width = display_width(word);

            if word_width > max_width {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }
                let mut chunks = split_to_width(word, max_width);
                // Last chunk stays open so following words can join it
                let tail = chunks.pop().unwrap_or_default();
                lines.extend(chunks);
                current_width = display_width(&tail);
                current_line = tail;
                continue;
            }

            if current_line.is_empty() {
                current_line.push_str(word);
                current_width = word_width;
            } else if current_width.saturating_add(1).saturating_add(word_width) <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width = current_width.saturating_add(1).saturating_add(word_width);
            } else {
                lines.push(std::mem::replace(&mut current_line, word.to_string()));
                current_width = word_width;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    lines
}

fn split_to_width(word: &str, max_width: u16) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0u16;

    for ch in word.chars() {
        let mut buf = [0u8; 4];
        let ch_width = display_width(ch.encode_utf8(&mut buf));
        if chunk_width.saturating_add(ch_width) > max_width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(ch);
        chunk_width = chunk_width.saturating_add(ch_width);
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Wrap text and keep at most `max_lines` lines
/// When lines are dropped the last kept line ends with an ellipsis
pub fn wrap_and_truncate(text: &str, max_width: u16, max_lines: u16) -> Vec<String> {
    let max_lines = usize::from(max_lines.max(1));
    let mut lines = wrap_text(text, max_width);
    if lines.len() <= max_lines {
        return lines;
    }

    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        *last = with_ellipsis(last, max_width);
    }
    lines
}

/// Append an ellipsis, trimming characters so the result fits `max_width`
pub fn with_ellipsis(line: &str, max_width: u16) -> String {
    let budget = max_width.saturating_sub(display_width(ELLIPSIS));
    let mut kept = String::new();
    let mut kept_width = 0u16;

    for ch in line.trim_end().chars() {
        let mut buf = [0u8; 4];
        let ch_width = display_width(ch.encode_utf8(&mut buf));
        if kept_width.saturating_add(ch_width) > budget {
            break;
        }
        kept.push(ch);
        kept_width = kept_width.saturating_add(ch_width);
    }

    let mut out = kept.trim_end().to_string();
    out.push_str(ELLIPSIS);
    out
}

/// Rectangle of the given size centered inside `area` (clamped to it)
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex_colors() {
        assert_eq!(parse_color("Cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("dark_blue"), Some(Color::Rgb(0, 0, 139)));
        assert_eq!(parse_color("#1a2b3c"), Some(Color::Rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn color_from_style_keeps_only_foreground() {
        let style = Style::default().fg(Color::Red).bg(Color::Blue);
        assert_eq!(color_from_style(Some(&style)), Some(Color::Red));
        assert_eq!(color_from_style(Some(&Style::default().bg(Color::Blue))), None);
        assert_eq!(color_from_style(None), None);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("alpha beta gamma", 10),
            vec!["alpha beta".to_string(), "gamma".to_string()]
        );
    }

    #[test]
    fn breaks_words_wider_than_the_limit() {
        assert_eq!(
            wrap_text("abcdefgh ij", 3),
            vec!["abc".to_string(), "def".to_string(), "gh".to_string(), "ij".to_string()]
        );
    }

    #[test]
    fn truncates_to_max_lines_with_ellipsis() {
        let lines = wrap_and_truncate("one two three four five six", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert!(lines[1].ends_with(ELLIPSIS));
        assert!(display_width(&lines[1]) <= 9);
    }

    #[test]
    fn short_text_is_left_alone() {
        assert_eq!(wrap_and_truncate("Home", 10, 1), vec!["Home".to_string()]);
    }

    #[test]
    fn ellipsis_fits_narrow_width() {
        assert_eq!(with_ellipsis("abcdef", 4), "abc…");
        assert_eq!(with_ellipsis("abcdef", 1), "…");
    }

    #[test]
    fn wide_lines_do_not_overflow_width_sums() {
        let word = "a".repeat(40_000);
        let lines = wrap_text(&format!("{word} {word}"), 60_000);
        assert_eq!(lines, vec![word.clone(), word.clone()]);

        let truncated = wrap_and_truncate(&format!("{word} {word}"), 60_000, 1);
        assert_eq!(truncated.len(), 1);
        assert!(truncated[0].ends_with(ELLIPSIS));
        assert_eq!(display_width(&truncated[0]), 40_001);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(2, 1, 10, 3);
        assert_eq!(centered_rect(4, 1, area), Rect::new(5, 2, 4, 1));
        assert_eq!(centered_rect(20, 9, area), area);
    }
}
