//! Full-screen renderer built on ratatui.

use super::Renderer;
use crate::error::{EnvError, EnvErrorKind};
use crate::games::tictactoe::{BOARD_SIZE, Cell, GameState, GameStatus};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

/// Horizontal rule between board rows.
const ROW_RULE: &str = "───────┼───────┼───────";

/// Draws the game into a ratatui terminal.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    /// Wraps an already initialised terminal.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    /// Returns the terminal, e.g. to restore it on exit.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    #[instrument(skip_all)]
    fn render(&mut self, state: &GameState) -> Result<(), EnvError> {
        self.terminal
            .draw(|frame| draw(frame, state))
            .map(|_| ())
            .map_err(|e| EnvError::new(EnvErrorKind::Render(e.to_string())))
    }
}

/// Renders title, board and status line.
fn draw(frame: &mut Frame, state: &GameState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Board
            Constraint::Length(4), // Status
        ])
        .split(area);

    let title = Paragraph::new("Strictly Gym - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], state);

    let status_text = vec![
        Line::from(status_line(state)),
        Line::from("Press 1-9 to move, 'q' to quit"),
    ];
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("Current player: {}", state.current_player()),
        status => format!("Game over: {}", status),
    }
}

fn draw_board(frame: &mut Frame, area: Rect, state: &GameState) {
    let board_area = center_rect(area, 23, 5);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    let cells = state.board().cells();
    for row in 0..BOARD_SIZE {
        let start = row * BOARD_SIZE;
        draw_row(frame, rows[row * 2], &cells[start..start + BOARD_SIZE], start);
        if row < BOARD_SIZE - 1 {
            let sep = Paragraph::new(ROW_RULE).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, cells: &[Cell], first_index: usize) {
    let sep = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    for (offset, cell) in cells.iter().enumerate() {
        let span = match cell {
            // Empty cells show their key so the player knows what to press.
            Cell::Empty => Span::styled(
                format!("   {}   ", first_index + offset + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Cell::PlayerA => Span::styled(
                format!("   {}   ", cell.glyph()),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Cell::PlayerB => Span::styled(
                format!("   {}   ", cell.glyph()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        spans.push(span);
        if offset < cells.len() - 1 {
            spans.push(Span::styled("│", sep));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
