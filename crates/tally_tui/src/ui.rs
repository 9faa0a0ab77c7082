//! Stateless rendering of the app.

use crate::app::{App, Mode, NameField, NameForm};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tally_tictactoe::{Cell, Mark, Position};

/// Draws the whole frame for the current mode.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Min(11),   // Board or name form
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tally - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    match app.mode() {
        Mode::NameEntry(form) => {
            draw_name_form(frame, chunks[2], form);
            draw_help(
                frame,
                chunks[4],
                "Tab: switch field  Enter: next/start  Esc: back",
            );
        }
        Mode::Playing => {
            draw_scoreboard(frame, chunks[1], app);
            draw_board(frame, chunks[2], app);
            draw_status(frame, chunks[3], app);
            let help = if app.screen().next_round_available() {
                "n: next round  s: new game  q: quit"
            } else {
                "Arrows + Enter or 1-9: play  s: new game  q: quit"
            };
            draw_help(frame, chunks[4], help);
        }
    }
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App) {
    let [one, draws, two] = app.screen().scoreboard();
    let line = Line::from(vec![
        Span::styled(one, mark_style(Mark::X)),
        Span::raw("   "),
        Span::raw(draws),
        Span::raw("   "),
        Span::styled(two, mark_style(Mark::O)),
    ]);
    let scoreboard = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scoreboard, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let highlight = app.screen().winning_line();

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row, highlight);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize, highlight: Option<[Position; 3]>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        let Some(pos) = Position::from_row_col(row, col) else {
            continue;
        };
        let winning = highlight.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, cols[col * 2], app, pos, winning);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let index = pos.to_index();
    let (text, mut style) = match app.screen().cells()[index] {
        Cell::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    if winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let in_play = app.screen().accepts_moves();
    if in_play && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let cell = Paragraph::new(vec![Line::from(""), Line::from(text)])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    let (text, color) = match screen.result() {
        Some(result) => (result.to_string(), Color::Green),
        None => (screen.turn_line().unwrap_or_default(), Color::Yellow),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_name_form(frame: &mut Frame, area: Rect, form: &NameForm) {
    let form_area = center_rect(area, 40, 8);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Length(3)])
        .split(form_area);

    draw_name_field(
        frame,
        rows[0],
        "Player 1 (X)",
        &form.player_one,
        form.focus == NameField::One,
    );
    draw_name_field(
        frame,
        rows[2],
        "Player 2 (O)",
        &form.player_two,
        form.focus == NameField::Two,
    );
}

fn draw_name_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    let field = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(label.to_string()),
    );
    frame.render_widget(field, area);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
