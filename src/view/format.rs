//! Text helpers shared by the row renderers and the status bar.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Marker appended to truncated text.
pub const ELLIPSIS: char = '…';

/// Format a count with `,` thousands separators.
pub fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Truncate a line to `width` display columns, ending in an ellipsis when
/// anything was cut. Wide characters never straddle the limit.
pub fn truncate_line(line: Line<'static>, width: usize) -> Line<'static> {
    if line.width() <= width {
        return line;
    }
    if width == 0 {
        return Line::default().style(line.style);
    }

    // Leave one column for the ellipsis.
    let budget = width - 1;
    let mut used = 0;
    let mut spans: Vec<Span<'static>> = Vec::new();

    'spans: for span in line.spans {
        let mut kept = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > budget {
                if !kept.is_empty() {
                    spans.push(Span::styled(kept, span.style));
                }
                spans.push(Span::styled(ELLIPSIS.to_string(), span.style));
                break 'spans;
            }
            used += w;
            kept.push(ch);
        }
        spans.push(Span::styled(kept, span.style));
    }

    Line::from(spans).style(line.style)
}

/// Pad or cut `lines` to exactly `height` lines.
pub fn fit_height(mut lines: Vec<Line<'static>>, height: u16) -> Vec<Line<'static>> {
    lines.resize_with(usize::from(height), Line::default);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    #[test]
    fn format_count_inserts_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(10_000), "10,000");
        assert_eq!(format_count(100_000), "100,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn short_lines_are_untouched() {
        let line = Line::from("short");
        assert_eq!(truncate_line(line.clone(), 10), line);
        assert_eq!(truncate_line(line.clone(), 5), line);
    }

    #[test]
    fn long_lines_end_with_ellipsis() {
        let line = truncate_line(Line::from("abcdefghij"), 5);
        assert_eq!(line.to_string(), "abcd…");
        assert_eq!(line.width(), 5);
    }

    #[test]
    fn truncation_keeps_span_styles() {
        let red = Style::default().fg(Color::Red);
        let line = Line::from(vec![Span::raw("ab"), Span::styled("cdef", red)]);

        let cut = truncate_line(line, 4);

        assert_eq!(cut.to_string(), "abc…");
        assert_eq!(cut.spans[1].style, red);
    }

    #[test]
    fn wide_characters_do_not_straddle_limit() {
        // Each ideograph is two columns wide.
        let cut = truncate_line(Line::from("日本語テキスト"), 6);
        assert_eq!(cut.to_string(), "日本…");
        assert!(cut.width() <= 6);
    }

    #[test]
    fn zero_width_gives_empty_line() {
        assert_eq!(truncate_line(Line::from("abc"), 0).width(), 0);
    }

    #[test]
    fn fit_height_pads_and_cuts() {
        let lines = vec![Line::from("a"), Line::from("b")];
        assert_eq!(fit_height(lines.clone(), 3).len(), 3);
        assert_eq!(fit_height(lines.clone(), 1), vec![Line::from("a")]);
        assert!(fit_height(lines, 0).is_empty());
    }
}
