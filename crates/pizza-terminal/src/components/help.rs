// crates/pizza-terminal/src/components/help.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

const SHORTCUTS: &[(&str, Color, &str)] = &[
    ("A/a", Color::Green, "Add order from the form"),
    ("R/r", Color::Yellow, "Reset form to defaults"),
    ("D/Del", Color::Red, "Remove selected order"),
    ("P/p", Color::Green, "Place all orders"),
    ("J", Color::Cyan, "Toggle JSON view"),
    ("Space/Enter", Color::White, "Toggle checkbox / next choice"),
    ("←/h →/l", Color::White, "Previous / next choice"),
    ("↑/k ↓/j", Color::White, "Move up / down"),
    ("Tab", Color::Blue, "Switch panel"),
    ("Esc", Color::Gray, "Dismiss message"),
    ("F1/?", Color::Gray, "Toggle help"),
    ("Q/q", Color::Red, "Quit"),
];

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items: Vec<ListItem> = SHORTCUTS
        .iter()
        .map(|(keys, color, action)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", keys),
                    Style::default().fg(*color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" - {}", action)),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Bottom row is reserved for the close instruction
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    f.render_widget(List::new(help_items), chunks[0]);

    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(footer, chunks[1]);
}
