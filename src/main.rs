//! Binary entry point: terminal setup, the frame loop, and teardown.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};

use termtris::core::GameSession;
use termtris::term::view::draw_session;
use termtris::term::{Palette, Screen};
use termtris::types::{InputEvent, FIELD_HEIGHT, FIELD_WIDTH, FRAME_MS};

fn main() -> Result<()> {
    let palette = Palette::standard()?;
    let mut screen = Screen::new(palette)?;

    screen.enter()?;
    let result = run(&mut screen);
    // Restore the terminal even when the loop failed.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    // Bordered field plus the stats panel to its right.
    let min_rows = (FIELD_HEIGHT + 2) as u16;
    let min_cols = (FIELD_WIDTH + 12) as u16;
    let (rows, cols) = screen.logical_dimensions();
    if rows < min_rows || cols < min_cols {
        bail!(
            "terminal too small: need {}x{} cells, have {}x{}",
            min_rows,
            min_cols,
            rows,
            cols
        );
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |elapsed| elapsed.subsec_nanos());
    let mut session = GameSession::new(seed);

    let mut last_tick = Instant::now();
    loop {
        screen.begin_frame();
        draw_session(screen, &session)?;
        screen.present()?;

        // Polling doubles as the frame pacer.
        let input = screen.poll_input(Duration::from_millis(u64::from(FRAME_MS)))?;
        if input == Some(InputEvent::Quit) {
            return Ok(());
        }

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_tick).as_millis() as u32;
        last_tick = now;

        session.tick(elapsed_ms, input);
    }
}
