// crates/pizza-terminal/src/components/order_list.rs

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Panel};

pub fn draw_order_list(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.current_panel == Panel::Orders;
    let orders = app.orders();

    let block = Block::default()
        .title(format!(" Pending Orders ({}) ", orders.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White }));

    if orders.is_empty() {
        let empty = Paragraph::new("No orders yet. Build one and press [A].")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["#", "Time", "Order"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = orders.iter().enumerate().map(|(i, order)| {
        Row::new(vec![
            Cell::from(format!("Order {}", i + 1)).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(order.created_at().with_timezone(&Local).format("%H:%M:%S").to_string())
                .style(Style::default().fg(Color::Gray)),
            Cell::from(order.to_string()),
        ])
    }).collect();

    let widths = [
        Constraint::Length(9),   // Order N
        Constraint::Length(9),   // Time
        Constraint::Min(20),     // Summary
    ];

    let highlight = if focused {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(highlight);

    // Selected even when unfocused so the list keeps its scroll position.
    let mut state = TableState::default();
    state.select(Some(app.selected_order_index));

    f.render_stateful_widget(table, area, &mut state);
}
