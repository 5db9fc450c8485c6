//! TUI rendering with ratatui
//!
//! Game board, word bank editor and status panels.

use super::app::{App, InputMode, MessageStyle, Tab};
use crate::game::{Phase, PlayerSlot};
use crate::output::formatters::{hangman_art, keyboard_row, lives_bar, wrong_letters_text};
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

/// Colors for one theme
#[derive(Debug, Clone, Copy)]
struct Palette {
    fg: Color,
    bg: Color,
    accent: Color,
    muted: Color,
    highlight: Color,
}

impl Palette {
    const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                muted: Color::Gray,
                highlight: Color::LightBlue,
            },
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Black,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                highlight: Color::Blue,
            },
        }
    }

    fn base(self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }
}

/// Main UI rendering function
pub fn ui<S, R>(f: &mut Frame, app: &App<S, R>) {
    let palette = Palette::for_theme(app.theme);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, palette, chunks[0]);

    match app.tab {
        Tab::Game => render_game(f, app, palette, chunks[1]),
        Tab::WordBank => render_word_bank(f, app, palette, chunks[1]),
    }

    render_input(f, app, palette, chunks[2]);
    render_status(f, app, palette, chunks[3]);
}

fn panel(title: &str, palette: Palette) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
}

fn render_header<S, R>(f: &mut Frame, app: &App<S, R>, palette: Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(12)])
        .split(area);

    let titles = Tab::ALL.iter().map(|tab| Line::from(tab.title()));
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(palette.muted))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(panel(" 🪢 HANGMAN DUEL ", palette));
    f.render_widget(tabs, chunks[0]);

    let theme = Paragraph::new(format!("{} ^T", app.theme.icon()))
        .alignment(Alignment::Center)
        .block(panel("", palette));
    f.render_widget(theme, chunks[1]);
}

fn render_game<S, R>(f: &mut Frame, app: &App<S, R>, palette: Palette, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Scores and messages
        ])
        .split(area);

    render_board(f, app, palette, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(columns[1]);

    render_scoreboard(f, app, palette, right[0]);
    render_messages(f, app, palette, right[1]);
}

fn render_board<S, R>(f: &mut Frame, app: &App<S, R>, palette: Palette, area: Rect) {
    let Some(round) = app.session.round() else {
        let text = if app.session.players().is_some() {
            "Press Enter to start the round."
        } else {
            "Press Enter to enter player names and start a game."
        };
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(panel(" Game ", palette));
        f.render_widget(paragraph, area);
        return;
    };

    let rules = app.session.rules();
    let mut lines: Vec<Line> = hangman_art(round.visible_parts())
        .into_iter()
        .map(|row| Line::styled(row, Style::default().fg(palette.fg)))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        round.masked_word(),
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("Lives: "),
        Span::styled(
            lives_bar(round.lives_left(), rules.max_wrong),
            Style::default().fg(Color::Red),
        ),
    ]));
    lines.push(Line::from(format!(
        "Wrong letters: {}",
        wrong_letters_text(&round.wrong_letters())
    )));
    lines.push(Line::from(Span::styled(
        keyboard_row(round),
        Style::default().fg(palette.muted),
    )));

    if let Some(status) = app.session.status_message() {
        let color = if app.session.phase() == Phase::Won {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(" Game ", palette));
    f.render_widget(paragraph, area);
}

fn render_scoreboard<S, R>(f: &mut Frame, app: &App<S, R>, palette: Palette, area: Rect) {
    let current = app.session.current_player();
    let lines: Vec<Line> = app.session.players().map_or_else(
        || vec![Line::from("No players yet")],
        |players| {
            players
                .iter()
                .map(|(slot, player)| score_line(slot, &player.name, player.score, current, palette))
                .collect()
        },
    );

    let paragraph = Paragraph::new(lines).block(panel(" Scoreboard ", palette));
    f.render_widget(paragraph, area);
}

fn score_line(
    slot: PlayerSlot,
    name: &str,
    score: u32,
    current: PlayerSlot,
    palette: Palette,
) -> Line<'static> {
    let (marker, style) = if slot == current {
        (
            "▶ ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(palette.fg))
    };
    Line::from(vec![
        Span::styled(format!("{marker}{name}"), style),
        Span::raw(format!(": {score}")),
    ])
}

fn render_messages<S, R>(f: &mut Frame, app: &App<S, R>, palette: Palette, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(palette.fg),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(panel(" Messages ", palette));
    f.render_widget(list, area);
}

fn render_word_bank<S, R>(f: &mut Frame, app: &App<S, R>, palette: Palette, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = format!(" Word Bank ({} words) ", app.bank.len());

    if app.bank.is_empty() {
        let empty = Paragraph::new("No words in the bank. Press 'a' to add one.")
            .style(Style::default().fg(palette.muted))
            .block(panel(&title, palette));
        f.render_widget(empty, columns[0]);
    } else {
        let items: Vec<ListItem> = app
            .bank
            .words()
            .iter()
            .enumerate()
            .map(|(i, word)| ListItem::new(format!("{:>3}. {word}", i + 1)))
            .collect();

        let list = List::new(items)
            .block(panel(&title, palette))
            .highlight_style(
                Style::default()
                    .bg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(app.selected));
        f.render_stateful_widget(list, columns[0], &mut state);
    }

    render_messages(f, app, palette, columns[1]);
}

fn render_input<S, R>(f: &mut Frame, app: &App<S, R>, palette: Palette, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Normal => (" Input ", "", palette.muted),
        InputMode::PlayerOneName => (
            " Player 1 name | Enter to confirm, Esc to cancel ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::PlayerTwoName => (
            " Player 2 name | Enter to start, Esc to cancel ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::AddWord => (
            " New word (letters only) | Esc to cancel ",
            app.input_buffer.as_str(),
            palette.accent,
        ),
        InputMode::EditWord(_) => (
            " Edit word | Esc to cancel ",
            app.input_buffer.as_str(),
            palette.accent,
        ),
        InputMode::ConfirmDelete(_) => (
            " Are you sure you want to delete this word? (y/n) ",
            "",
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S, R>(f: &mut Frame, app: &App<S, R>, palette: Palette, area: Rect) {
    let help_text = match (app.tab, app.input_mode) {
        (_, InputMode::ConfirmDelete(_)) => "y: Delete | any other key: Cancel",
        (Tab::Game, InputMode::Normal) => match app.session.phase() {
            Phase::InProgress => "A-Z: Guess | Tab: Word Bank | ^N: New Game | ^T: Theme | Esc: Quit",
            Phase::Won | Phase::Lost => "Enter: Next Round | ^N: New Game | Tab: Word Bank | Esc: Quit",
            Phase::NotStarted => "Enter: Start | Tab: Word Bank | ^T: Theme | Esc: Quit",
        },
        (Tab::WordBank, InputMode::Normal) => {
            "↑/↓: Select | a: Add | e: Edit | d: Delete | Tab: Game | Esc: Quit"
        }
        _ => "Enter: Confirm | Backspace: Erase | Esc: Cancel",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted));
    f.render_widget(help, area);
}
