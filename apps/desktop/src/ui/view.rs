//! # Rendering
//!
//! ```text
//! ┌ Product Management ─────────────────────────────────────────┐
//! │ ┌ Products ───────────────────────────────────────────────┐ │
//! │ │ ID   Name                     Price        Stock        │ │
//! │ │ 1    Widget                   $9.99        5            │ │
//! │ └─────────────────────────────────────────────────────────┘ │
//! │ ┌ Product Name ┐ ┌ Price ┐ ┌ Stock ┐                         │
//! │ F1 Add  F2 Delete  F3 Update  F4 Search  F5 Show All ...    │
//! └─────────────────────────────────────────────────────────────┘
//!               ┌ Success ──────────────────┐
//!               │ Product added successfully│   (modal, when open)
//!               └───────────────────────────┘
//! ```

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use super::{Alert, AlertLevel, App, Focus};
use crate::commands::COMMANDS;
use crate::state::Field;

const ENTRY_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, app: &App) {
    let [title, list, entries, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(ENTRY_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(app.ui().title.as_str()).bold().centered()),
        title,
    );
    render_list(frame, app, list);
    render_entries(frame, app, entries);
    frame.render_widget(Paragraph::new(hint_line()), hints);

    if let Some(alert) = app.alert() {
        render_alert(frame, alert);
    }
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let symbol = &app.ui().currency_symbol;
    let rows = app.form().rows().iter().map(|p| {
        Row::new(vec![
            p.id.to_string(),
            p.name.clone(),
            format!("{}{}", symbol, p.price),
            p.stock.to_string(),
        ])
    });

    let header = Row::new(vec!["ID", "Name", "Price", "Stock"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(focused_block("Products", app.focus() == Focus::List))
    .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

    let mut state = TableState::default().with_selected(app.form().selected_index());
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_entries(frame: &mut Frame, app: &App, area: Rect) {
    let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for (field, area) in Field::ALL.into_iter().zip(areas.iter()) {
        let focused = app.focus() == Focus::Entry(field);
        let value = app.form().entry(field);

        frame.render_widget(
            Paragraph::new(value).block(focused_block(field.label(), focused)),
            *area,
        );

        if focused && app.alert().is_none() {
            let offset = (value.chars().count() as u16).min(area.width.saturating_sub(3));
            frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
        }
    }
}

fn focused_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if focused {
        block.border_style(Style::default().fg(Color::Yellow))
    } else {
        block
    }
}

fn hint_line() -> Line<'static> {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = Vec::new();

    for command in COMMANDS.iter() {
        spans.push(Span::styled(format!("F{}", command.key), key_style));
        spans.push(Span::raw(format!(" {}  ", command.label)));
    }
    spans.push(Span::styled("Tab", key_style));
    spans.push(Span::raw(" Focus  "));
    spans.push(Span::styled("Esc", key_style));
    spans.push(Span::raw(" Quit"));

    Line::from(spans)
}

fn render_alert(frame: &mut Frame, alert: &Alert) {
    let area = centered(frame.area(), 50, 7);
    let color = match alert.level {
        AlertLevel::Info => Color::Green,
        AlertLevel::Error => Color::Red,
    };

    let body = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from("Enter to dismiss").dim().centered(),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: true }).block(
            Block::bordered()
                .title(alert.title.as_str())
                .border_style(Style::default().fg(color)),
        ),
        area,
    );
}

/// A `width` x `height` rect centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(vertical);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Action;
    use crate::state::UiConfig;
    use crate::ui::Input;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use stockroom_db::{Database, DbConfig};

    async fn app() -> App {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        App::new(db, UiConfig::default())
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
        terminal.draw(|f| render(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_renders_rows_and_chrome() {
        let mut app = app().await;
        app.form_mut().set_entry(Field::Name, "Widget");
        app.form_mut().set_entry(Field::Price, "9.99");
        app.form_mut().set_entry(Field::Stock, "5");
        app.run_command(Action::Add).await;
        app.apply(Input::Dismiss).await;

        let screen = draw(&app);

        assert!(screen.contains("Product Management"));
        assert!(screen.contains("Widget"));
        assert!(screen.contains("$9.99"));
        assert!(screen.contains("F5 Show All"));
        assert!(screen.contains("Product Name"));
    }

    #[tokio::test]
    async fn test_renders_alert() {
        let mut app = app().await;
        app.run_command(Action::Search).await;

        let screen = draw(&app);

        assert!(screen.contains("Error"));
        assert!(screen.contains("search term is required"));
        assert!(screen.contains("Enter to dismiss"));
    }

    #[test]
    fn test_centered_is_clipped() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered(area, 50, 7);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 5);

        let rect = centered(Rect::new(0, 0, 100, 20), 50, 8);
        assert_eq!((rect.x, rect.y), (25, 6));
    }
}
