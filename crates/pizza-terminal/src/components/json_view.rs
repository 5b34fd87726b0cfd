// crates/pizza-terminal/src/components/json_view.rs

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Pending orders as JSON, in place of the order list.
pub fn draw_json_view(f: &mut Frame, area: Rect, app: &App) {
    let json = Paragraph::new(app.orders_json())
        .style(Style::default().fg(Color::Cyan))
        .wrap(Wrap { trim: false })
        .block(Block::default()
            .title(" Orders JSON ([J] to hide) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(json, area);
}
