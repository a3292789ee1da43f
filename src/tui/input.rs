//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use wordgrid_core::Position;

/// Moves the cursor one cell with the arrow keys, clamped to the grid.
pub fn move_cursor(cursor: Position, key: KeyCode, side: usize) -> Position {
    let last = side.saturating_sub(1);
    match key {
        KeyCode::Up => Position::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Position::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Position::new(cursor.row, (cursor.col + 1).min(last)),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_edges() {
        let corner = Position::new(0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Up, 3), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left, 3), corner);

        let far = Position::new(2, 2);
        assert_eq!(move_cursor(far, KeyCode::Down, 3), far);
        assert_eq!(move_cursor(far, KeyCode::Right, 3), far);
    }

    #[test]
    fn moves_one_cell() {
        let center = Position::new(1, 1);
        assert_eq!(move_cursor(center, KeyCode::Up, 3), Position::new(0, 1));
        assert_eq!(move_cursor(center, KeyCode::Right, 3), Position::new(1, 2));
        assert_eq!(move_cursor(center, KeyCode::Char('x'), 3), center);
    }

    #[test]
    fn empty_grid_stays_at_origin() {
        let origin = Position::new(0, 0);
        assert_eq!(move_cursor(origin, KeyCode::Down, 0), origin);
    }
}
