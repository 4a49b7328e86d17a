// App state for the TUI
//
// Wraps the store with presentation-only state: keyboard focus, list cursor,
// toasts, theme and animation frame. Key handling turns keystrokes into store
// actions and hands the resulting commands back to the event loop.

use super::components::Toast;
use super::theme::{Theme, ThemeKind};
use crate::api::CustomerId;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::store::{Action, Command, Completion, Field, Notice, Store};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::time::Instant;

/// Notices waiting behind the visible toast; the oldest is dropped when full
const MAX_QUEUED_TOASTS: usize = 8;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Which screen is shown, derived from the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Main,
}

/// Focusable widgets, in Tab order per screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Username,
    Password,
    Search,
    Customers,
    CustomerName,
    CustomerEmail,
    PurchaseHistory,
    InteractionType,
    InteractionDetails,
}

const LOGIN_ORDER: &[Focus] = &[Focus::Username, Focus::Password];

const MAIN_ORDER: &[Focus] = &[
    Focus::Search,
    Focus::Customers,
    Focus::CustomerName,
    Focus::CustomerEmail,
    Focus::PurchaseHistory,
    Focus::InteractionType,
    Focus::InteractionDetails,
];

impl Focus {
    /// Text buffer edited while this widget has focus
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Username => Some(Field::Username),
            Focus::Password => Some(Field::Password),
            Focus::Search => Some(Field::Search),
            Focus::Customers => None,
            Focus::CustomerName => Some(Field::CustomerName),
            Focus::CustomerEmail => Some(Field::CustomerEmail),
            Focus::PurchaseHistory => Some(Field::PurchaseHistory),
            Focus::InteractionType => Some(Field::InteractionType),
            Focus::InteractionDetails => Some(Field::InteractionDetails),
        }
    }

    /// Action submitted by Enter while this widget has focus
    fn submit(self) -> Option<Action> {
        match self {
            Focus::Username | Focus::Password => Some(Action::Login),
            Focus::CustomerName | Focus::CustomerEmail | Focus::PurchaseHistory => {
                Some(Action::CreateCustomer)
            }
            Focus::InteractionType | Focus::InteractionDetails => Some(Action::CreateInteraction),
            Focus::Search | Focus::Customers => None,
        }
    }
}

pub struct App {
    pub store: Store,
    pub focus: Focus,
    /// Highlighted row in the filtered customer list
    pub list_cursor: usize,
    pub toast: Option<Toast>,
    toast_queue: VecDeque<Notice>,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub api_url: String,
    pub should_quit: bool,
    animation_frame: usize,
}

impl App {
    pub fn new(store: Store, config: &Config, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        tracing::debug!(theme = theme_kind.name(), "Theme selected");
        let focus = if store.login_state().username.is_empty() {
            Focus::Username
        } else {
            Focus::Password
        };
        Self {
            store,
            focus,
            list_cursor: 0,
            toast: None,
            toast_queue: VecDeque::new(),
            theme: theme_kind.theme(),
            log_buffer,
            api_url: config.api_url.clone(),
            should_quit: false,
            animation_frame: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.store.is_authenticated() {
            Screen::Main
        } else {
            Screen::Login
        }
    }

    fn focus_order(&self) -> &'static [Focus] {
        match self.screen() {
            Screen::Login => LOGIN_ORDER,
            Screen::Main => MAIN_ORDER,
        }
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    // ─────────────────────────────────────────────────────────────────────
    // Store plumbing
    // ─────────────────────────────────────────────────────────────────────

    /// Dispatch an action and return the commands to run
    pub fn dispatch(&mut self, action: Action) -> Vec<Command> {
        let before = self.screen();
        let commands = self.store.dispatch(action);
        self.sync(before);
        commands
    }

    /// Apply a completion and return follow-up commands
    pub fn apply(&mut self, completion: Completion) -> Vec<Command> {
        let before = self.screen();
        let commands = self.store.resolve(completion);
        self.sync(before);
        commands
    }

    /// Bring presentation state in line with the store
    fn sync(&mut self, before: Screen) {
        for notice in self.store.drain_notices() {
            if self.toast_queue.len() >= MAX_QUEUED_TOASTS {
                self.toast_queue.pop_front();
            }
            self.toast_queue.push_back(notice);
        }
        if self.toast.is_none() {
            self.toast = self.toast_queue.pop_front().map(Toast::from_notice);
        }

        let after = self.screen();
        if before != after {
            self.focus = match after {
                Screen::Main => Focus::Customers,
                Screen::Login => Focus::Password,
            };
            self.list_cursor = 0;
        }

        let visible = self.store.visible_customers().len();
        if self.list_cursor >= visible {
            self.list_cursor = visible.saturating_sub(1);
        }
    }

    /// Customer under the list cursor
    pub fn highlighted_customer(&self) -> Option<CustomerId> {
        self.store
            .visible_customers()
            .get(self.list_cursor)
            .map(|c| c.id)
    }

    /// True while any request the user is waiting on is outstanding
    pub fn is_busy(&self) -> bool {
        self.store.login_state().is_pending()
            || self.store.customers().is_loading()
            || self.store.detail().is_loading()
            || self.store.interactions().is_loading()
            || self.store.recommendations().is_loading()
            || self.store.analytics().is_loading()
            || self.store.customer_form().pending
            || self.store.interaction_form().pending
    }

    // ─────────────────────────────────────────────────────────────────────
    // Keyboard
    // ─────────────────────────────────────────────────────────────────────

    /// Handle one key event; returns commands for the runtime
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Command> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        if let Some(action) = self.global_action(key.code) {
            return self.dispatch(action);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                Vec::new()
            }
            KeyCode::BackTab => {
                self.focus_prev();
                Vec::new()
            }
            KeyCode::Up if self.focus == Focus::Customers => {
                self.list_cursor = self.list_cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Down if self.focus == Focus::Customers => {
                let visible = self.store.visible_customers().len();
                if self.list_cursor + 1 < visible {
                    self.list_cursor += 1;
                }
                Vec::new()
            }
            KeyCode::Enter => self.enter(),
            KeyCode::Esc if self.focus == Focus::Search => {
                self.list_cursor = 0;
                self.dispatch(Action::Edit(Field::Search, String::new()))
            }
            KeyCode::Backspace => self.edit_focused(|buf| {
                buf.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_focused(|buf| buf.push(c))
            }
            _ => Vec::new(),
        }
    }

    /// Function keys; only meaningful once signed in
    fn global_action(&self, code: KeyCode) -> Option<Action> {
        if self.screen() != Screen::Main {
            return None;
        }
        match code {
            KeyCode::F(2) => Some(Action::ToggleAnalytics),
            KeyCode::F(3) => Some(Action::LoadAnalytics),
            KeyCode::F(4) => Some(Action::RequestRecommendations),
            KeyCode::F(5) => Some(Action::RefreshCustomers),
            KeyCode::F(6) => Some(Action::SendEmail),
            KeyCode::F(10) => Some(Action::Logout),
            _ => None,
        }
    }

    fn enter(&mut self) -> Vec<Command> {
        match self.focus {
            Focus::Customers => match self.highlighted_customer() {
                Some(id) => self.dispatch(Action::Select(id)),
                None => Vec::new(),
            },
            Focus::Search => {
                self.focus = Focus::Customers;
                Vec::new()
            }
            other => match other.submit() {
                Some(action) => self.dispatch(action),
                None => Vec::new(),
            },
        }
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) -> Vec<Command> {
        let Some(field) = self.focus.field() else {
            return Vec::new();
        };
        let mut value = self.store.field(field).to_string();
        edit(&mut value);
        if field == Field::Search {
            self.list_cursor = 0;
        }
        self.dispatch(Action::Edit(field, value))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Animation and toast
    // ─────────────────────────────────────────────────────────────────────

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    /// Retire an expired toast and show the next queued notice
    pub fn advance_toasts(&mut self) {
        self.advance_toasts_at(Instant::now());
    }

    fn advance_toasts_at(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired_at(now)) {
            self.toast = None;
        }
        if self.toast.is_none() {
            self.toast = self.toast_queue.pop_front().map(Toast::from_notice);
        }
    }
}
