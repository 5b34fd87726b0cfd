// crates/pizza-terminal/src/app.rs

use crossterm::event::KeyCode;
use indexmap::IndexMap;
use pizza_core::{Delivery, Event, Order, OrderBuilder, OrderDesk, Size};
use pizza_protocol::command_codec::CART_EMPTY_MESSAGE;
use pizza_protocol::encode_orders;
use tracing::{info, warn};

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Form,
    Orders,
}

/// The form row under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Size,
    Delivery,
    Topping(usize),
    Addon(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// One-line message shown in the status bar until dismissed or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

pub struct App {
    // Order state
    pub desk: OrderDesk,
    pub config: AppConfig,

    // UI state
    pub current_panel: Panel,
    pub should_quit: bool,
    pub show_help: bool,
    pub show_json: bool,
    pub notice: Option<Notice>,

    // Form
    pub size: Size,
    pub delivery: Delivery,
    pub toppings: IndexMap<String, bool>,
    pub addons: IndexMap<String, bool>,
    pub form_cursor: usize,

    // Selection state
    pub selected_order_index: usize,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let toppings = config.menu.toppings.iter().map(|t| (t.clone(), false)).collect();
        let addons = config.menu.addons.iter().map(|a| (a.clone(), false)).collect();

        Self {
            desk: OrderDesk::new(),
            size: config.form.default_size,
            delivery: config.form.default_delivery,
            config,
            current_panel: Panel::Form,
            should_quit: false,
            show_help: false,
            show_json: false,
            notice: None,
            toppings,
            addons,
            form_cursor: 0,
            selected_order_index: 0,
        }
    }

    /// Map a key press to an action.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Tab => self.next_panel(),
            KeyCode::BackTab => self.prev_panel(),

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
            KeyCode::Left | KeyCode::Char('h') => self.change_field(false),
            KeyCode::Right | KeyCode::Char('l') => self.change_field(true),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.current_panel == Panel::Form {
                    self.change_field(true);
                }
            }

            // Orders
            KeyCode::Char('a') | KeyCode::Char('A') => self.add_order(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset_form(),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => self.remove_selected_order(),
            KeyCode::Char('p') | KeyCode::Char('P') => self.place_all_orders(),

            // View toggles
            KeyCode::Char('J') => self.toggle_json(),
            KeyCode::F(1) | KeyCode::Char('?') => self.show_help = true,
            KeyCode::Esc => self.dismiss(),

            _ => {}
        }
    }

    pub fn next_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Form => Panel::Orders,
            Panel::Orders => Panel::Form,
        };
    }

    pub fn prev_panel(&mut self) {
        // Only two panels, so backwards is the same as forwards.
        self.next_panel();
    }

    /// Number of rows in the form: size, delivery, then every checkbox.
    pub fn form_len(&self) -> usize {
        2 + self.toppings.len() + self.addons.len()
    }

    pub fn current_field(&self) -> FormField {
        let toppings = self.toppings.len();
        match self.form_cursor {
            0 => FormField::Size,
            1 => FormField::Delivery,
            n if n < 2 + toppings => FormField::Topping(n - 2),
            n => FormField::Addon(n - 2 - toppings),
        }
    }

    pub fn move_selection_up(&mut self) {
        match self.current_panel {
            Panel::Form => {
                if self.form_cursor > 0 {
                    self.form_cursor -= 1;
                }
            }
            Panel::Orders => {
                if self.selected_order_index > 0 {
                    self.selected_order_index -= 1;
                }
            }
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.current_panel {
            Panel::Form => {
                if self.form_cursor < self.form_len().saturating_sub(1) {
                    self.form_cursor += 1;
                }
            }
            Panel::Orders => {
                if self.selected_order_index < self.desk.store().len().saturating_sub(1) {
                    self.selected_order_index += 1;
                }
            }
        }
    }

    /// Cycle the selector or flip the checkbox under the form cursor.
    pub fn change_field(&mut self, forward: bool) {
        if self.current_panel != Panel::Form {
            return;
        }

        match self.current_field() {
            FormField::Size => {
                self.size = if forward { self.size.next() } else { self.size.prev() };
            }
            FormField::Delivery => self.delivery = self.delivery.toggle(),
            FormField::Topping(i) => {
                if let Some((_, checked)) = self.toppings.get_index_mut(i) {
                    *checked = !*checked;
                }
            }
            FormField::Addon(i) => {
                if let Some((_, checked)) = self.addons.get_index_mut(i) {
                    *checked = !*checked;
                }
            }
        }
    }

    /// Build an order from the form with a fresh builder and place it.
    pub fn add_order(&mut self) {
        let order = self.build_from_form();
        let summary = order.to_string();
        if let Event::Placed { position, .. } = self.desk.place(order) {
            self.notify(NoticeLevel::Info, format!("Added order {}: {}", position + 1, summary));
        }
        self.on_orders_changed();
    }

    /// Uncheck every box and return the selectors to their configured defaults.
    pub fn reset_form(&mut self) {
        self.size = self.config.form.default_size;
        self.delivery = self.config.form.default_delivery;
        for checked in self.toppings.values_mut().chain(self.addons.values_mut()) {
            *checked = false;
        }
    }

    pub fn remove_selected_order(&mut self) {
        if self.current_panel != Panel::Orders {
            return;
        }
        if let Event::Removed { position, .. } = self.desk.remove(self.selected_order_index) {
            self.notify(NoticeLevel::Info, format!("Removed order {}", position + 1));
        }
        self.on_orders_changed();
    }

    /// Place every pending order, or warn when there is nothing to place.
    pub fn place_all_orders(&mut self) {
        match self.desk.checkout() {
            Event::CheckedOut { orders } => {
                match encode_orders(&orders) {
                    Ok(json) => info!(count = orders.len(), orders = %json, "placed orders"),
                    Err(e) => warn!(error = %e, "could not encode placed orders"),
                }
                self.notify(
                    NoticeLevel::Info,
                    format!("Placing {} order(s). Details written to the log.", orders.len()),
                );
                self.on_orders_changed();
            }
            _ => self.notify(NoticeLevel::Warning, CART_EMPTY_MESSAGE),
        }
    }

    pub fn toggle_json(&mut self) {
        self.show_json = !self.show_json;
    }

    /// The pending order list as pretty JSON.
    pub fn orders_json(&self) -> String {
        encode_orders(&self.desk.store().get_all())
            .unwrap_or_else(|e| format!("could not encode orders: {}", e))
    }

    pub fn orders(&self) -> Vec<Order> {
        self.desk.store().get_all()
    }

    /// Close the topmost overlay: help, then the notice, then the JSON view.
    pub fn dismiss(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.notice.is_some() {
            self.notice = None;
        } else {
            self.show_json = false;
        }
    }

    fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
        });
    }

    fn build_from_form(&self) -> Order {
        let mut builder = OrderBuilder::new();
        builder.set_size(self.size).set_delivery(self.delivery);
        for (topping, _) in self.toppings.iter().filter(|(_, checked)| **checked) {
            builder.add_topping(topping.as_str());
        }
        for (addon, _) in self.addons.iter().filter(|(_, checked)| **checked) {
            builder.add_addon(addon.as_str());
        }
        builder.build()
    }

    /// Any change to the list hides the JSON view and keeps the selection in range.
    fn on_orders_changed(&mut self) {
        self.show_json = false;
        let len = self.desk.store().len();
        if self.selected_order_index >= len {
            self.selected_order_index = len.saturating_sub(1);
        }
    }
}
