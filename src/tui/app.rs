//! Application state and input dispatch.

use super::input::move_cursor;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use rand::rngs::StdRng;
use ratatui::layout::{Position as ScreenPosition, Rect};
use tracing::{debug, instrument, warn};
use wordgrid_core::{GameSession, Position};

/// Main application state.
///
/// Owns the session and the random source used for new games. Cell
/// rectangles from the last frame are kept for mouse hit-testing.
pub struct App {
    session: GameSession,
    rng: StdRng,
    cursor: Position,
    cell_areas: Vec<(Position, Rect)>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: GameSession, rng: StdRng) -> Self {
        Self {
            session,
            rng,
            cursor: Position::new(0, 0),
            cell_areas: Vec::new(),
            should_quit: false,
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns true once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where each cell was drawn.
    pub fn set_cell_areas(&mut self, areas: Vec<(Position, Rect)>) {
        self.cell_areas = areas;
    }

    /// Periodic housekeeping between events.
    pub fn tick(&mut self) {
        self.session.refresh_audio();
    }

    /// Dispatches a terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row)
            }
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key, self.session.grid().side());
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.select(self.cursor),
            KeyCode::Char('c') => {
                self.session.submit();
            }
            KeyCode::Char('r') => {
                self.session.reset_selection();
            }
            KeyCode::Char('s') => {
                self.session.toggle_audio();
            }
            KeyCode::Char('n') => {
                self.session.new_game(&mut self.rng);
                self.cursor = Position::new(0, 0);
            }
            _ => {}
        }
    }

    /// Handles a left click at terminal coordinates.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let point = ScreenPosition::new(column, row);
        let hit = self
            .cell_areas
            .iter()
            .find(|(_, area)| area.contains(point))
            .map(|(pos, _)| *pos);
        if let Some(pos) = hit {
            self.cursor = pos;
            self.select(pos);
        }
    }

    fn select(&mut self, pos: Position) {
        match self.session.select_tile(pos) {
            Ok(outcome) => debug!(%pos, ?outcome, "Tile click"),
            Err(e) => warn!(error = %e, "Tile click rejected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use rand::SeedableRng;

    fn app() -> App {
        let mut rng = StdRng::seed_from_u64(3);
        let session = GameSession::new(["boat", "coat"], &mut rng).unwrap();
        App::new(session, rng)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn walk_to(app: &mut App, target: Position) {
        while app.cursor().row < target.row {
            press(app, KeyCode::Down);
        }
        while app.cursor().row > target.row {
            press(app, KeyCode::Up);
        }
        while app.cursor().col < target.col {
            press(app, KeyCode::Right);
        }
        while app.cursor().col > target.col {
            press(app, KeyCode::Left);
        }
    }

    #[test]
    fn keyboard_round_scores() {
        let mut app = app();
        let bo = app.session().grid().positions_of("bo").next().unwrap();
        let at = app.session().grid().positions_of("at").next().unwrap();

        walk_to(&mut app, bo);
        press(&mut app, KeyCode::Char(' '));
        walk_to(&mut app, at);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().pending_word(), "boat");

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session().score(), 1);
        assert!(app.session().selection().is_empty());
    }

    #[test]
    fn reset_key_clears_selection() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().selection().len(), 1);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.session().selection().is_empty());
    }

    #[test]
    fn mouse_click_hits_cell() {
        let mut app = app();
        app.set_cell_areas(vec![
            (Position::new(0, 0), Rect::new(0, 0, 6, 3)),
            (Position::new(0, 1), Rect::new(6, 0, 6, 3)),
        ]);

        app.handle_event(&Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 8,
            row: 1,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(app.session().selection(), &[Position::new(0, 1)]);
        assert_eq!(app.cursor(), Position::new(0, 1));

        // Outside every cell.
        app.handle_click(40, 20);
        assert_eq!(app.session().selection().len(), 1);
    }

    #[test]
    fn new_game_resets_score() {
        let mut app = app();
        let bo = app.session().grid().positions_of("bo").next().unwrap();
        let at = app.session().grid().positions_of("at").next().unwrap();
        app.set_cell_areas(Vec::new());
        walk_to(&mut app, bo);
        press(&mut app, KeyCode::Enter);
        walk_to(&mut app, at);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session().score(), 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session().score(), 0);
        assert_eq!(app.cursor(), Position::new(0, 0));
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn empty_submit_only_warns() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session().score(), 0);
        assert!(app.session().last_notice().is_some());
    }
}
