// crates/pizza-terminal/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, NoticeLevel};

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = match &app.notice {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => Color::Green,
                NoticeLevel::Warning => Color::Yellow,
            };
            let line = Line::from(vec![
                Span::styled(notice.text.as_str(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled("  [Esc] dismiss", Style::default().fg(Color::Gray)),
            ]);
            (line, Style::default().fg(color))
        }
        None => {
            let shortcuts = vec![
                Span::styled("[A]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("dd "),
                Span::styled("[R]", Style::default().fg(Color::Yellow)),
                Span::raw("eset "),
                Span::styled("[D]", Style::default().fg(Color::Red)),
                Span::raw("elete "),
                Span::styled("[P]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("lace all "),
                Span::styled("[J]", Style::default().fg(Color::Cyan)),
                Span::raw("SON "),
                Span::styled("[Q]", Style::default().fg(Color::Gray)),
                Span::raw("uit"),
            ];
            (Line::from(shortcuts), Style::default())
        }
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
