//! Row renderers for each item type.
//!
//! A row renderer turns one item into exactly `height` terminal lines, each
//! no wider than `width` display columns. The list widget relies on both
//! limits to position rows at `index * item_height`.

use super::format::{fit_height, truncate_line};
use super::styles::Palette;
use crate::model::{DemoItem, Item, ProductItem, RecordItem, UserItem};
use ratatui::text::{Line, Span};

/// An item that knows how to draw itself as list rows.
pub trait ItemRow: Item {
    /// Content lines before fitting; may be any length or width.
    fn row_lines(&self, palette: &Palette) -> Vec<Line<'static>>;

    /// Lines fitted to exactly `height` rows of at most `width` columns.
    fn render_row(&self, width: u16, height: u16, palette: &Palette) -> Vec<Line<'static>> {
        let lines = self
            .row_lines(palette)
            .into_iter()
            .map(|line| truncate_line(line, usize::from(width)))
            .collect();
        fit_height(lines, height)
    }
}

impl ItemRow for DemoItem {
    fn row_lines(&self, palette: &Palette) -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::styled(format!("{:>6}  ", self.id), palette.muted),
            Span::styled(format!("{:<12}", self.name), palette.text),
            Span::styled(format!("{:<26}", self.email), palette.muted),
            Span::styled(format!("{:<10}", self.role), palette.text),
            Span::styled(self.status.label(), palette.status(self.status)),
        ])]
    }
}

impl ItemRow for UserItem {
    fn row_lines(&self, palette: &Palette) -> Vec<Line<'static>> {
        vec![
            Line::from(vec![
                Span::styled(format!("({}) ", self.initial()), palette.accent),
                Span::styled(self.name.clone(), palette.title),
                Span::styled(format!("  {}", self.role), palette.text),
            ]),
            Line::from(vec![
                Span::styled(format!("    {}  ", self.email), palette.muted),
                Span::styled(self.status.label(), palette.status(self.status)),
            ]),
        ]
    }
}

impl ItemRow for ProductItem {
    fn row_lines(&self, palette: &Palette) -> Vec<Line<'static>> {
        let stock = if self.in_stock() {
            format!("In stock ({})", self.stock)
        } else {
            "Out of stock".to_string()
        };

        vec![
            Line::from(vec![
                Span::styled(self.name.clone(), palette.title),
                Span::styled(format!("  ${:.2}", self.price), palette.accent),
            ]),
            Line::from(vec![
                Span::styled(format!("{} · ", self.category), palette.text),
                Span::styled(stock, palette.stock(self.in_stock())),
            ]),
            Line::from(Span::styled(self.description.clone(), palette.muted)),
        ]
    }
}

impl ItemRow for RecordItem {
    fn row_lines(&self, palette: &Palette) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{}  ", self.id), palette.muted),
            Span::styled(self.label.clone(), palette.title),
        ])];
        // One extra line per field, shown when the configured height allows.
        lines.extend(self.fields.iter().map(|(key, value)| {
            Line::from(vec![
                Span::styled(format!("    {key}: "), palette.muted),
                Span::styled(value.to_string(), palette.text),
            ])
        }));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::{generate_demo_data, generate_product_data, generate_user_data};
    use crate::model::ItemId;
    use crate::view::styles::ColorConfig;

    fn palette() -> Palette {
        Palette::new(ColorConfig::from_env_and_args(true))
    }

    fn text(lines: &[Line<'static>]) -> Vec<String> {
        lines.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn demo_row_is_single_line() {
        let item = &generate_demo_data(1)[0];
        let lines = item.render_row(80, 1, &palette());

        assert_eq!(lines.len(), 1);
        let row = lines[0].to_string();
        assert!(row.contains("User 1"), "got: {row}");
        assert!(row.contains("user1@example.com"), "got: {row}");
        assert!(row.contains("Admin"), "got: {row}");
        assert!(row.contains("active"), "got: {row}");
    }

    #[test]
    fn user_row_shows_initial_and_email() {
        let item = &generate_user_data(2)[1];
        let rows = text(&item.render_row(60, 2, &palette()));

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("(U) User 2"), "got: {:?}", rows);
        assert!(rows[1].contains("user2@example.com"), "got: {:?}", rows);
        assert!(rows[1].contains("inactive"), "got: {:?}", rows);
    }

    #[test]
    fn product_row_has_price_stock_and_description() {
        let item = &generate_product_data(1)[0];
        let rows = text(&item.render_row(80, 3, &palette()));

        assert!(rows[0].contains(&format!("${:.2}", item.price)));
        assert!(rows[1].starts_with("Electronics · "));
        assert_eq!(rows[2], "Detailed description of product 1");
    }

    #[test]
    fn rows_are_padded_to_height() {
        let item = &generate_demo_data(1)[0];
        let lines = item.render_row(80, 3, &palette());

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].width(), 0);
    }

    #[test]
    fn rows_are_cut_to_height() {
        let item = &generate_product_data(1)[0];
        let lines = item.render_row(80, 1, &palette());

        assert_eq!(lines.len(), 1);
        assert!(lines[0].to_string().starts_with("Product 1"));
    }

    #[test]
    fn rows_never_exceed_width() {
        let palette = palette();
        let item = &generate_demo_data(100)[99];
        for width in [0u16, 1, 5, 20, 37] {
            for line in item.render_row(width, 1, &palette) {
                assert!(line.width() <= usize::from(width), "width {width}");
            }
        }
    }

    #[test]
    fn record_row_lists_fields_below_label() {
        let mut fields = serde_json::Map::new();
        fields.insert("stock".to_string(), serde_json::Value::from(3));
        let item = RecordItem {
            id: ItemId::from("sku-1"),
            label: "Widget".to_string(),
            fields,
        };

        let rows = text(&item.render_row(40, 2, &palette()));

        assert_eq!(rows, vec!["sku-1  Widget", "    stock: 3"]);
    }
}
