//! Status line showing where the active list is scrolled to.

use super::format::format_count;
use super::styles::Palette;
use crate::view_state::VirtualScroll;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINT: &str = "? help  q quit ";

/// Rows currently on screen as a 0-based half-open range, or `None` for an
/// empty list. Overscan rows are not counted.
pub fn on_screen_rows(scroll: &VirtualScroll) -> Option<(usize, usize)> {
    let count = scroll.item_count();
    if count == 0 {
        return None;
    }

    let geometry = scroll.geometry();
    let extent = geometry.item_extent();
    let offset = scroll.offset();

    let first = ((offset / extent).floor() as usize).min(count - 1);
    let end = ((offset + geometry.viewport_extent()) / extent).ceil() as usize;
    Some((first, end.clamp(first + 1, count)))
}

/// Status text for a list: `{count} records · rows {first}-{last} · offset {offset}`.
pub fn status_line(scroll: &VirtualScroll) -> String {
    match on_screen_rows(scroll) {
        None => "no records".to_string(),
        Some((first, end)) => format!(
            "{} records · rows {}-{} · offset {}",
            format_count(scroll.item_count()),
            format_count(first + 1),
            format_count(end),
            format_count(scroll.offset().round() as usize),
        ),
    }
}

/// Render the status line with the key hint on the right.
pub fn render_status_bar(frame: &mut Frame, area: Rect, scroll: &VirtualScroll, palette: &Palette) {
    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {}", status_line(scroll)),
        palette.text,
    )));
    frame.render_widget(status, area);

    let hint = Paragraph::new(Line::from(Span::styled(HINT, palette.muted)))
        .alignment(Alignment::Right);
    frame.render_widget(hint, area);
}
