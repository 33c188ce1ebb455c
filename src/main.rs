//! Terminal Tetris runner.
//!
//! Event loop: render, poll input with a timeout until the next UI tick,
//! then advance held-key repeats and the gravity accumulator. The gravity
//! timer is a single accumulator recreated (zeroed) whenever the engine's
//! drop interval changes shape, so no stale tick can fire after a pause,
//! restart, or game over.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use retris::core::{seed_from_time, GameSession};
use retris::input::{map_key_event, should_quit, KeyRepeat};
use retris::store::BestScoreStore;
use retris::term::{GameView, TerminalScreen, Viewport};
use retris::types::TICK_MS;

fn main() -> Result<()> {
    let store = BestScoreStore::new(BestScoreStore::default_path());

    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = run(&mut screen, &store);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut TerminalScreen, store: &BestScoreStore) -> Result<()> {
    let mut session = GameSession::new(seed_from_time());
    session.set_best_score(store.load());
    session.start();

    let view = GameView::default();
    let mut repeat = KeyRepeat::new();

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut drop_elapsed_ms: u32 = 0;
    let mut saved_best = session.best_score();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let frame = view.render(&session.snapshot(), Viewport::new(w, h));
        screen.draw(&frame)?;

        let timeout = tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        let action = if repeat.handles(key.code) {
                            repeat.handle_press(key.code)
                        } else {
                            map_key_event(key)
                        };

                        if let Some(action) = action {
                            let interval_before = session.drop_interval_ms();
                            session.apply_action(action);
                            if session.drop_interval_ms() != interval_before {
                                // Pause/resume/new-game: recreate the timer.
                                drop_elapsed_ms = 0;
                            }
                        }
                    }
                    KeyEventKind::Release => repeat.handle_release(key.code),
                    KeyEventKind::Repeat => {
                        // Held keys are repeated by KeyRepeat, not the terminal.
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();

            for action in repeat.update(TICK_MS) {
                session.apply_action(action);
            }

            match session.drop_interval_ms() {
                Some(interval) => {
                    drop_elapsed_ms += TICK_MS;
                    if drop_elapsed_ms >= interval {
                        drop_elapsed_ms = 0;
                        session.drop_step();
                    }
                }
                None => drop_elapsed_ms = 0,
            }

            if session.best_score() > saved_best {
                saved_best = session.best_score();
                // A failed write should not interrupt gameplay.
                let _ = store.save(saved_best);
            }
        }
    }
}
