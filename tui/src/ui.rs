//! Pure rendering of the dashboard state into terminal widgets.
//!
//! Nothing here mutates state: the view reads the dashboard and the app's
//! focus/selection and draws. Overlays (the modal form, the delete
//! confirmation) are drawn last over a cleared region.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Clear, Paragraph, Row, Table, TableState};

use contacts_core::{Modal, NoticeKind};

use crate::app::{App, Focus, FormField};

pub fn render(frame: &mut Frame, app: &App) {
    let [header, search, notice, grid, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_search(frame, app, search);
    render_notice(frame, app, notice);
    render_grid(frame, app, grid);
    render_footer(frame, app, footer);

    match app.dashboard.modal() {
        Modal::Closed => {}
        modal => render_form(frame, app, modal),
    }
    if app.dashboard.pending_delete().is_some() {
        render_confirm(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("Contact App", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  ·  manage your contacts with ease"),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus == Focus::Search {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let input = if app.focus == Focus::Search {
        format!("{}_", app.dashboard.search_id())
    } else {
        app.dashboard.search_id().to_string()
    };
    let block = Block::bordered()
        .title("Search contact by ID")
        .border_style(style);
    frame.render_widget(Paragraph::new(input).block(block), area);
}

fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = if let Some(notice) = app.dashboard.notice() {
        let style = match notice.kind {
            NoticeKind::Success => Style::default().fg(Color::Green),
            NoticeKind::Error => Style::default().fg(Color::Red),
        };
        Paragraph::new(notice.text.clone()).style(style)
    } else if app.dashboard.is_loading() {
        Paragraph::new("Loading contacts...").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new("")
    };
    frame.render_widget(paragraph, area);
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let contacts = app.dashboard.contacts();
    if contacts.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::raw("No contacts found"),
            Line::raw("Add your first contact to get started"),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::bordered().title("Contacts"));
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = contacts
        .iter()
        .map(|c| Row::new(vec![c.id.to_string(), c.name.clone(), c.email.clone(), c.phone.clone()]))
        .collect();
    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(30),
        Constraint::Percentage(40),
        Constraint::Percentage(24),
    ];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["ID", "Name", "Email", "Phone"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::bordered().title(format!("Contacts ({})", contacts.len())))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.dashboard.pending_delete().is_some() {
        "y confirm · n cancel"
    } else if !matches!(app.dashboard.modal(), Modal::Closed) {
        "Tab next field · Enter save · Esc cancel"
    } else if app.focus == Focus::Search {
        "Enter search · Esc back"
    } else {
        "a add · e edit · d delete · / search · s show all · r reload · q quit"
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_form(frame: &mut Frame, app: &App, modal: &Modal) {
    let (title, draft) = match modal {
        Modal::Create { draft } => ("Add New Contact", draft),
        Modal::Edit { draft, .. } => ("Edit Contact", draft),
        Modal::Closed => return,
    };

    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let fields = [
        (FormField::Name, "Name ", draft.name.clone()),
        (FormField::Email, "Email", draft.email.clone()),
        (FormField::Phone, "Phone", draft.phone.clone()),
    ];
    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    for (field, label, value) in fields {
        let active = app.field == field;
        let marker = if active { "› " } else { "  " };
        let value = if active { format!("{value}_") } else { value };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{label}  "), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(value),
        ]));
    }
    lines.push(Line::raw(""));

    let form = Paragraph::new(lines).block(Block::bordered().title(title));
    frame.render_widget(form, area);
}

fn render_confirm(frame: &mut Frame) {
    let area = centered_rect(52, 5, frame.area());
    frame.render_widget(Clear, area);
    let dialog = Paragraph::new(vec![
        Line::raw(""),
        Line::raw("Are you sure you want to delete this contact?"),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().title("Delete Contact"));
    frame.render_widget(dialog, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
