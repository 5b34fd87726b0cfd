// crates/pizza-terminal/src/components/order_form.rs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, FormField, Panel};

pub fn draw_order_form(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.current_panel == Panel::Form;
    let block = Block::default()
        .title(" Build Your Pizza ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White }));

    let cursor = if focused { Some(app.current_field()) } else { None };
    let mut lines = Vec::with_capacity(app.form_len() + 6);

    lines.push(selector_line("Size", app.size.as_str(), cursor == Some(FormField::Size)));
    lines.push(selector_line(
        "Delivery",
        app.delivery.as_str(),
        cursor == Some(FormField::Delivery),
    ));

    lines.push(Line::from(""));
    lines.push(section_line("Toppings"));
    for (i, (label, checked)) in app.toppings.iter().enumerate() {
        lines.push(checkbox_line(label, *checked, cursor == Some(FormField::Topping(i))));
    }

    lines.push(Line::from(""));
    lines.push(section_line("Addons"));
    for (i, (label, checked)) in app.addons.iter().enumerate() {
        lines.push(checkbox_line(label, *checked, cursor == Some(FormField::Addon(i))));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[A]dd order  [R]eset form",
        Style::default().fg(Color::Gray),
    )));

    let form = Paragraph::new(lines).block(block);
    f.render_widget(form, area);
}

fn cursor_span(selected: bool) -> Span<'static> {
    if selected {
        Span::styled("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        Span::raw("  ")
    }
}

fn selector_line<'a>(label: &'a str, value: &'a str, selected: bool) -> Line<'a> {
    Line::from(vec![
        cursor_span(selected),
        Span::raw(format!("{:<10}", format!("{}:", label))),
        Span::styled("< ", Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(" >", Style::default().fg(Color::Gray)),
    ])
}

fn section_line(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
    ))
}

fn checkbox_line(label: &str, checked: bool, selected: bool) -> Line<'_> {
    let (mark, style) = if checked {
        ("[x] ", Style::default().fg(Color::Green))
    } else {
        ("[ ] ", Style::default())
    };
    Line::from(vec![
        cursor_span(selected),
        Span::styled(mark, style),
        Span::styled(label, style),
    ])
}
