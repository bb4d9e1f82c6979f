//! Game view: composes one session frame onto the screen.
//!
//! Layout, in logical (2-column-wide) cells: the bordered field occupies
//! the top-left corner, one border cell thick on every side, and a stats
//! panel sits to its right with the level, the line count, and a preview
//! of the queued piece.

use anyhow::Result;

use crate::core::GameSession;
use crate::term::screen::Screen;
use crate::types::{BORDER_COLOR, FIELD_HEIGHT, FIELD_WIDTH};

/// Logical column where the stats panel starts.
const PANEL_COL: u16 = (FIELD_WIDTH + 5) as u16;

/// Row/column of the "GAME OVER" banner inside the field.
const BANNER_ROW: u16 = (FIELD_HEIGHT / 2) as u16;
const BANNER_COL: u16 = 2;

pub fn draw_session(screen: &mut Screen, session: &GameSession) -> Result<()> {
    draw_field(screen, session)?;
    draw_panel(screen, session)?;
    if session.is_over() {
        screen.draw_text(BANNER_ROW, BANNER_COL, 0, "GAME OVER")?;
    }
    Ok(())
}

fn draw_field(screen: &mut Screen, session: &GameSession) -> Result<()> {
    // Overlay the falling piece on a scratch copy of the settled grid so
    // the border/interior walk below has a single source of cell colors.
    let mut scratch = session.field().clone();
    scratch.commit(session.current());

    let bottom = (FIELD_HEIGHT + 1) as u16;
    let right = (FIELD_WIDTH + 1) as u16;

    for row in 0..=bottom {
        for col in 0..=right {
            if row == 0 || row == bottom || col == 0 || col == right {
                screen.draw_cell(row, col, BORDER_COLOR)?;
                continue;
            }
            let color = scratch.get(row as i16 - 1, col as i16 - 1).unwrap_or(0);
            if color != 0 {
                screen.draw_cell(row, col, color)?;
            }
        }
    }
    Ok(())
}

fn draw_panel(screen: &mut Screen, session: &GameSession) -> Result<()> {
    screen.draw_text(1, PANEL_COL, 0, &format!("Level: {}", session.level()))?;
    screen.draw_text(2, PANEL_COL, 0, &format!("Lines: {}", session.total_lines()))?;

    screen.draw_text(4, PANEL_COL, BORDER_COLOR, "Next:")?;
    let next = session.next();
    let grid = next.kind().orientations()[0];
    for (r, grid_row) in grid.iter().enumerate() {
        for (c, &filled) in grid_row.iter().enumerate() {
            if filled != 0 {
                screen.draw_cell(5 + r as u16, PANEL_COL + c as u16, next.color())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_right_of_the_bordered_field() {
        assert!(PANEL_COL as usize > FIELD_WIDTH + 2);
    }
}
