//! Virtualized list widget.
//!
//! Draws only the items of the current window. Item `i` of the window sits
//! at `render_offset + (i - start) * item_height` in content coordinates;
//! subtracting the scroll offset gives its row in the viewport. Rows that
//! fall outside the viewport are clipped.
//!
//! The scrollbar plays the part of the full-height spacer. Its state counts
//! scroll positions (`0..=max_scroll`) rather than content rows, so the
//! thumb reaches the end of the track exactly when the list is scrolled to
//! the bottom.

use super::rows::ItemRow;
use super::styles::Palette;
use crate::state::ListPane;
use ratatui::{
    layout::{Margin, Rect},
    widgets::{Block, Borders, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Render a list pane into `area`, bordered and titled.
pub fn render_list<T: ItemRow>(
    frame: &mut Frame,
    area: Rect,
    pane: &mut ListPane<T>,
    title: &str,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border)
        .title(format!(" {title} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let offset = pane.scroll().offset();
    let max_scroll = pane.scroll().max_scroll();
    let selected = pane.selected();
    let viewport_rows = i64::from(inner.height);
    let item_height = i64::from(pane.item_height());

    let materialized = pane.materialize(inner.width, |item, width, height| {
        item.render_row(width, height, palette)
    });

    let first_row = (materialized.window.render_offset - offset).floor() as i64;
    let buffer = frame.buffer_mut();

    for (k, lines) in materialized.rows.iter().enumerate() {
        let is_selected = selected == Some(materialized.window.start + k);
        let item_top = first_row + k as i64 * item_height;
        for (j, line) in lines.iter().enumerate() {
            let y = item_top + j as i64;
            if y < 0 || y >= viewport_rows {
                continue;
            }
            // y is in 0..inner.height, so it fits in u16.
            let row = inner.y + y as u16;
            buffer.set_line(inner.x, row, line, inner.width);
            if is_selected {
                buffer.set_style(Rect::new(inner.x, row, inner.width, 1), palette.selected);
            }
        }
    }

    if pane.is_empty() {
        return;
    }

    let mut scrollbar_state = ScrollbarState::new(max_scroll.round() as usize + 1)
        .viewport_content_length(usize::from(inner.height))
        .position(offset.round() as usize);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area.inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar_state,
    );
}
