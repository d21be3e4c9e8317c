//! # Terminal UI
//!
//! The product form: owns the store handle and the form state, reads keys,
//! dispatches commands, draws.
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐    ┌──────────────┐    ┌──────────────────────────┐     │
//! │   │  draw    │───►│ next key     │───►│ input::map_key           │     │
//! │   └──────────┘    │ (EventStream)│    └────────────┬─────────────┘     │
//! │        ▲          └──────────────┘                 │                   │
//! │        │                                           ▼                   │
//! │        │          ┌───────────────────────────────────────────────┐    │
//! │        └──────────│ Run(action) → commands::dispatch (awaited)    │    │
//! │                   │               → Alert::from_result            │    │
//! │                   │ Char / Backspace → focused entry              │    │
//! │                   │ Up / Down → select (copies into entries)      │    │
//! │                   └───────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod alert;
pub mod input;
pub mod view;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use stockroom_db::Database;
use tracing::debug;

use crate::commands::{self, Action};
use crate::state::{Field, FormState, UiConfig};
pub use alert::{Alert, AlertLevel};
pub use input::Input;

/// Which widget receives typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    List,
    Entry(Field),
}

impl Focus {
    /// list → name → price → stock → list
    pub fn next(self) -> Self {
        match self {
            Focus::List => Focus::Entry(Field::Name),
            Focus::Entry(Field::Name) => Focus::Entry(Field::Price),
            Focus::Entry(Field::Price) => Focus::Entry(Field::Stock),
            Focus::Entry(Field::Stock) => Focus::List,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::List => Focus::Entry(Field::Stock),
            Focus::Entry(Field::Name) => Focus::List,
            Focus::Entry(Field::Price) => Focus::Entry(Field::Name),
            Focus::Entry(Field::Stock) => Focus::Entry(Field::Price),
        }
    }
}

pub struct App {
    db: Database,
    form: FormState,
    focus: Focus,
    alert: Option<Alert>,
    ui: UiConfig,
    should_quit: bool,
}

impl App {
    pub fn new(db: Database, ui: UiConfig) -> Self {
        App {
            db,
            form: FormState::new(),
            focus: Focus::default(),
            alert: None,
            ui,
            should_quit: false,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn ui(&self) -> &UiConfig {
        &self.ui
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Initial list load.
    pub async fn load(&mut self) {
        self.run_command(Action::ShowAll).await;
    }

    pub async fn run_command(&mut self, action: Action) {
        let result = commands::dispatch(action, &self.db, &mut self.form).await;
        self.alert = Alert::from_result(&result);
    }

    /// Draws and handles keys until the user quits or the event stream ends.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        let mut events = EventStream::new();

        while !self.should_quit {
            terminal.draw(|frame| view::render(frame, self))?;

            match events.next().await {
                Some(Ok(Event::Key(key))) => self.handle_key(key).await,
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }

        Ok(())
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        let input = input::map_key(key, self.alert.is_some());
        self.apply(input).await;
    }

    pub async fn apply(&mut self, input: Input) {
        match input {
            Input::Run(action) => {
                debug!(?action, "Running command");
                self.run_command(action).await;
            }
            Input::FocusNext => self.focus = self.focus.next(),
            Input::FocusPrevious => self.focus = self.focus.previous(),
            Input::SelectNext => {
                self.form.select_next();
            }
            Input::SelectPrevious => {
                self.form.select_previous();
            }
            Input::Char(c) => {
                if let Focus::Entry(field) = self.focus {
                    self.form.entry_mut(field).push(c);
                }
            }
            Input::Backspace => {
                if let Focus::Entry(field) = self.focus {
                    self.form.entry_mut(field).pop();
                }
            }
            Input::Dismiss => self.alert = None,
            Input::Quit => self.should_quit = true,
            Input::Ignore => {}
        }
    }
}
