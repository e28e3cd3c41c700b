//! Dataset tab bar widget.
//!
//! Displays one tab per available dataset using ratatui's Tabs widget. The
//! click handler in `state::mouse_handler` assumes the widget's default
//! padding and divider, so neither is customised here.

use super::styles::Palette;
use crate::state::Tab;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the tab bar.
///
/// # Arguments
/// * `frame` - The ratatui frame to render into
/// * `area` - The area to render the tab bar within
/// * `tabs` - Available tabs in display order
/// * `active` - Tab to highlight; ignored if it is not in `tabs`
pub fn render_tab_bar(frame: &mut Frame, area: Rect, tabs: &[Tab], active: Tab, palette: &Palette) {
    let titles: Vec<Line> = tabs.iter().map(|tab| Line::from(tab.label())).collect();

    let mut widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border)
                .title(" vscroll "),
        )
        .style(palette.text);

    if let Some(index) = tabs.iter().position(|tab| *tab == active) {
        widget = widget.highlight_style(palette.highlight).select(index);
    }

    frame.render_widget(widget, area);
}
