//! Key handling and request execution for the dashboard view.
//!
//! The dashboard owns all the state; this layer owns what is purely a view
//! concern (which pane has focus, which form field is active, which grid row
//! is selected) and wires key events to the dashboard's mutators. Requests
//! the dashboard hands back are executed synchronously on this thread, so at
//! most one is ever in flight.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use contacts_core::{Dashboard, Modal};

use crate::transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Phone,
            FormField::Phone => FormField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Phone,
            FormField::Email => FormField::Name,
            FormField::Phone => FormField::Email,
        }
    }
}

pub struct App {
    pub dashboard: Dashboard,
    pub focus: Focus,
    pub field: FormField,
    pub selected: usize,
    pub quit: bool,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            focus: Focus::Grid,
            field: FormField::Name,
            selected: 0,
            quit: false,
        }
    }

    /// Full reload; also the "Show All" action from the search bar.
    pub fn reload(&mut self) {
        let req = self.dashboard.start_load();
        let result = transport::execute(req);
        self.dashboard.finish_load(result, Instant::now());
        self.clamp_selection();
    }

    fn run_search(&mut self) {
        let now = Instant::now();
        if let Some(req) = self.dashboard.start_search(now) {
            let result = transport::execute(req);
            self.dashboard.finish_search(result, Instant::now());
            self.clamp_selection();
        }
    }

    fn submit(&mut self) {
        let now = Instant::now();
        if let Some(req) = self.dashboard.submit_form(now) {
            let result = transport::execute(req);
            if let Some(reload) = self.dashboard.finish_save(result, Instant::now()) {
                let result = transport::execute(reload);
                self.dashboard.finish_load(result, Instant::now());
                self.clamp_selection();
            }
        }
    }

    fn confirm_pending_delete(&mut self) {
        if let Some(req) = self.dashboard.confirm_delete() {
            let result = transport::execute(req);
            if let Some(reload) = self.dashboard.finish_delete(result, Instant::now()) {
                let result = transport::execute(reload);
                self.dashboard.finish_load(result, Instant::now());
                self.clamp_selection();
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.dashboard.contacts().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        if self.dashboard.pending_delete().is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if !matches!(self.dashboard.modal(), Modal::Closed) {
            self.handle_modal_key(key);
            return;
        }
        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Grid => self.handle_grid_key(key),
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self.confirm_pending_delete(),
            KeyCode::Char('n') | KeyCode::Esc => self.dashboard.cancel_delete(),
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.dashboard.close_modal();
                self.field = FormField::Name;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.field = self.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.prev(),
            KeyCode::Char(c) => {
                if let Some(value) = self.active_field_mut() {
                    value.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(value) = self.active_field_mut() {
                    value.pop();
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Grid,
            KeyCode::Enter => {
                self.run_search();
                self.focus = Focus::Grid;
            }
            KeyCode::Char(c) => self.dashboard.search_id_mut().push(c),
            KeyCode::Backspace => {
                self.dashboard.search_id_mut().pop();
            }
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('r') | KeyCode::Char('s') => self.reload(),
            KeyCode::Char('a') => {
                self.dashboard.open_create();
                self.field = FormField::Name;
            }
            KeyCode::Char('e') => {
                if let Some(contact) = self.dashboard.contacts().get(self.selected).cloned() {
                    self.dashboard.open_edit(&contact);
                    self.field = FormField::Name;
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.dashboard.contacts().get(self.selected).map(|c| c.id) {
                    self.dashboard.request_delete(id);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.dashboard.contacts().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        let field = self.field;
        let draft = self.dashboard.draft_mut()?;
        Some(match field {
            FormField::Name => &mut draft.name,
            FormField::Email => &mut draft.email,
            FormField::Phone => &mut draft.phone,
        })
    }
}
