//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Mark, WORD_LEN};
use crate::output::formatters::{KEYBOARD_ROWS, key_mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🥧 WORDPIE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Option<Mark>) -> Style {
    let (fg, bg) = match mark {
        Some(Mark::Correct) => (Color::Black, Color::Green),
        Some(Mark::Present) => (Color::Black, Color::Yellow),
        Some(Mark::Absent) => (Color::White, Color::DarkGray),
        None => (Color::White, Color::Reset),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let max_guesses = app.session.max_guesses();

    // Window of rows that fits inside the borders, kept on the current guess
    let visible = max_guesses.min(usize::from(area.height.saturating_sub(2)).max(1));
    let first = (history.len() + 1)
        .saturating_sub(visible)
        .min(max_guesses - visible);
    let mut lines = Vec::with_capacity(visible);

    for row in first..first + visible {
        let spans: Vec<Span> = if let Some(record) = history.get(row) {
            record
                .word
                .as_str()
                .chars()
                .zip(record.evaluation.marks())
                .map(|(letter, &mark)| Span::styled(format!(" {letter} "), mark_style(Some(mark))))
                .collect()
        } else if row == history.len() && app.input_mode == InputMode::Typing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LEN)
                .map(|i| {
                    let letter = typed.get(i).copied().unwrap_or('_');
                    Span::styled(format!(" {letter} "), mark_style(None))
                })
                .collect()
        } else {
            (0..WORD_LEN)
                .map(|_| Span::styled(" · ", Style::default().fg(Color::DarkGray)))
                .collect()
        };
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keys = app.session.keyboard();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| Span::styled(format!(" {letter} "), mark_style(key_mark(&keys, letter))))
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Candidates gauge
            Constraint::Length(4), // Statistics
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let total = app.lexicon.len().max(1);
    let remaining = app.candidates_count();
    let ruled_out = total.saturating_sub(remaining);
    let percent = (ruled_out * 100 / total).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Ruled Out ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining} of {total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let distribution: Vec<String> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(guesses, count)| format!("{guesses}:{count}"))
        .collect();

    let content = vec![
        Line::from(format!(
            "Games: {} | Won: {} | Win rate: {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(distribution.join("  ")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match &app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::ConfirmAdd(word) => (
            " Add to word list? (y/n) ".to_string(),
            word.to_string(),
            Color::Magenta,
        ),
        InputMode::Typing => (
            format!(
                " Guess {}/{} | Enter to submit ",
                app.session.history().len() + 1,
                app.session.max_guesses()
            ),
            app.input_buffer.clone(),
            Color::Yellow,
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::ConfirmAdd(_) => "y: Add word | n: Cancel",
        InputMode::Typing => "Esc: Quit | ?: Hint | Tab: Solver guess | Ctrl-S: Solve | Ctrl-N: New",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::lexicon::Lexicon;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_keyboard() {
        let lexicon = Lexicon::embedded().unwrap();
        let mut app = App::new(lexicon, GameConfig::default().with_seed(1)).unwrap();
        for c in "CRANE".chars() {
            app.type_char(c);
        }
        app.submit_input();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("WORDPIE"));
        assert!(text.contains("Board"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("candidates remain"));
    }

    #[test]
    fn huge_guess_budget_draws_a_window() {
        let config = GameConfig {
            max_guesses: usize::MAX,
            ..GameConfig::default().with_seed(1)
        };
        let app = App::new(Lexicon::embedded().unwrap(), config).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Board"));
        assert!(text.contains(" _ "));
    }
}
