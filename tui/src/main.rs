//! Terminal front end for the contact dashboard.
//!
//! The base URL comes from `CONTACTS_API` (default `http://localhost:8080`);
//! pair it with the workspace's mock-server for a local run. The event loop
//! polls with a short timeout and ticks the dashboard every iteration so
//! notices expire without user input.

mod app;
mod transport;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;

use contacts_core::{ContactClient, Dashboard};

use crate::app::App;

const DEFAULT_API: &str = "http://localhost:8080";

fn main() -> io::Result<()> {
    let base_url = std::env::var("CONTACTS_API").unwrap_or_else(|_| DEFAULT_API.to_string());
    let mut app = App::new(Dashboard::new(ContactClient::new(&base_url)));
    app.reload();

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.quit {
        terminal.draw(|frame| ui::render(frame, app))?;
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        app.dashboard.tick(Instant::now());
    }
    Ok(())
}
