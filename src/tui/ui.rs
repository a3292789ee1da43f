//! Stateless UI rendering for the fragment grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use wordgrid_core::{Position, Severity};

use super::app::App;

const TILE_COLOR: Color = Color::Rgb(147, 112, 219);
const SELECTED_COLOR: Color = Color::Rgb(173, 216, 230);
const ORANGE: Color = Color::Rgb(255, 165, 0);
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen and returns where each cell was drawn.
pub fn draw(frame: &mut Frame, app: &App) -> Vec<(Position, Rect)> {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Grid
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Score
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Form words by selecting adjacent tiles")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let cells = draw_grid(frame, chunks[1], app);

    let session = app.session();
    // The word being built takes precedence over the last notice.
    let notice = match session.last_notice() {
        Some(notice) if session.selection().is_empty() => Line::from(Span::styled(
            notice.text.clone(),
            Style::default().fg(severity_color(notice.severity)),
        )),
        _ => Line::from(Span::styled(
            session.pending_word(),
            Style::default().fg(Color::Gray),
        )),
    };
    frame.render_widget(Paragraph::new(notice).alignment(Alignment::Center), chunks[2]);

    let sound = if session.audio_playing() { "on" } else { "off" };
    let score = Paragraph::new(format!("Score: {}   Sound: {}", session.score(), sound))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(score, chunks[3]);

    let help = Paragraph::new(
        "click/space select · c check word · r reset · s toggle sound · n new game · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    cells
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => Color::Green,
        Severity::Failure => Color::Red,
        Severity::Warning => ORANGE,
    }
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Position, Rect)> {
    let grid = app.session().grid();
    let side = grid.side() as u16;
    if side == 0 {
        let empty = Paragraph::new("No playable words")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return Vec::new();
    }

    let widest = grid
        .cells()
        .map(|(_, tile)| tile.as_str().chars().count() as u16)
        .max()
        .unwrap_or(0);
    let cell_width = (widest + 4).max(6);
    let board = center_rect(area, cell_width * side, CELL_HEIGHT * side);

    let mut cells = Vec::with_capacity(grid.side() * grid.side());
    for (pos, tile) in grid.cells() {
        let cell = Rect::new(
            board.x + pos.col as u16 * cell_width,
            board.y + pos.row as u16 * CELL_HEIGHT,
            cell_width,
            CELL_HEIGHT,
        )
        .intersection(area);
        if cell.is_empty() {
            continue;
        }

        let background = if app.session().is_selected(pos) {
            SELECTED_COLOR
        } else {
            TILE_COLOR
        };
        let border = if pos == app.cursor() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Black)
        };

        let paragraph = Paragraph::new(tile.as_str())
            .style(Style::default().bg(background).fg(Color::Black))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
        frame.render_widget(paragraph, cell);
        cells.push((pos, cell));
    }
    cells
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
