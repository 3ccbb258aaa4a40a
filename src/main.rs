//! Terminal blockfall runner.
//!
//! One loop does everything: draw the current snapshot, poll for input
//! until the next frame budget expires, apply mapped commands, then hand
//! the wall-clock timestamp to the tick driver for gravity.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{Session, TickDriver};
use blockfall::input::{command_for_key, should_quit};
use blockfall::term::{GameView, TerminalRenderer};
use blockfall::types::{GameCommand, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new(seed_from_clock());
    let mut driver = TickDriver::new();
    let view = GameView;

    let epoch = Instant::now();
    let frame_budget = Duration::from_millis(TICK_MS);
    let mut next_frame = epoch;

    loop {
        term.draw(&view.render(&session.snapshot()))?;

        next_frame += frame_budget;
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(command) = command_for_key(key) {
                session.apply(command);
                match command {
                    GameCommand::Start => driver.start(),
                    GameCommand::Reset => driver.stop(),
                    _ => {}
                }
            }
        }

        driver.frame(&mut session, epoch.elapsed().as_millis() as u64);
    }
}
