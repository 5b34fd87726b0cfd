// crates/pizza-terminal/tests/render.rs
use crossterm::event::KeyCode;
use pizza_terminal::app::App;
use pizza_terminal::components::help::draw_help;
use pizza_terminal::config::AppConfig;
use pizza_terminal::ui;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn empty_form_renders_menu_and_placeholder() {
    let app = App::new(AppConfig::default());
    let text = screen_text(&app);

    assert!(text.contains("Build Your Pizza"));
    assert!(text.contains("Pepperoni"));
    assert!(text.contains("Garlic Dip"));
    assert!(text.contains("No orders yet"));
}

#[test]
fn placed_orders_show_up_in_the_list() {
    let mut app = App::new(AppConfig::default());
    app.handle_key(KeyCode::Right);
    app.handle_key(KeyCode::Char('a'));
    let text = screen_text(&app);

    assert!(text.contains("Pending Orders (1)"));
    assert!(text.contains("Order 1"));
    assert!(text.contains("Large pizza - no toppings (Home Delivery)"));
}

#[test]
fn json_view_and_help_overlay_render() {
    let mut app = App::new(AppConfig::default());
    app.handle_key(KeyCode::Char('a'));
    app.handle_key(KeyCode::Char('J'));
    app.handle_key(KeyCode::F(1));
    let text = screen_text(&app);

    assert!(text.contains("Orders JSON"));
    assert!(text.contains("Keyboard Shortcuts"));
}

#[test]
fn order_list_scrolls_to_keep_the_selection_visible() {
    let mut app = App::new(AppConfig::default());
    for _ in 0..60 {
        app.handle_key(KeyCode::Char('a'));
    }
    app.handle_key(KeyCode::Tab);
    for _ in 0..59 {
        app.handle_key(KeyCode::Down);
    }
    assert_eq!(app.selected_order_index, 59);

    let text = screen_text(&app);
    assert!(text.contains("Pending Orders (60)"));
    assert!(text.contains("Order 60"));
}

#[test]
fn help_footer_keeps_its_own_row_when_the_overlay_is_short() {
    let (width, height) = (60, 14);
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| draw_help(f, Rect::new(0, 0, width, height)))
        .unwrap();

    let buffer = terminal.backend().buffer();
    let rows: Vec<String> = (0..height)
        .map(|y| (0..width).map(|x| buffer.get(x, y).symbol()).collect())
        .collect();

    let footer_row = rows
        .iter()
        .position(|row| row.contains("Press F1 or ESC to close help"))
        .unwrap();
    assert_eq!(footer_row, usize::from(height) - 2);
    assert_eq!(
        rows[footer_row].trim_matches(|c: char| c == '│' || c.is_whitespace()),
        "Press F1 or ESC to close help"
    );
    assert!(rows[footer_row - 1].contains("Toggle help"));
}
