//! Terminal match-3 runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `tui_match3::term`. All game rules live in `tui_match3::core`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_match3::config::{GameConfig, USAGE};
use tui_match3::core::{GameSnapshot, GameState, SelectOutcome};
use tui_match3::event_log::{EventLog, SessionEvent};
use tui_match3::input::{handle_key_event, should_quit};
use tui_match3::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_match3::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match GameConfig::load(&args).context("[Config] invalid configuration")? {
        Some(config) => config,
        None => {
            print!("{}", USAGE);
            return Ok(());
        }
    };

    let mut game = GameState::initialize(config.size, config.symbols, config.seed)
        .context("create board")?;
    let mut log = match &config.log_path {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };
    log.record(&SessionEvent::GameStarted {
        game_id: game.game_id(),
        seed: config.seed,
        size: config.size,
        symbols: config.symbols,
    });

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(err) = log.failure() {
        eprintln!("[EventLog] logging stopped: {}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, log: &mut EventLog) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply(game, log, action);
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        if let Some(at) = view.cell_at(&snap, viewport, mouse.column, mouse.row) {
                            if game.set_cursor(at).is_ok() {
                                if let Ok(outcome) = game.select(at) {
                                    record_select(game, log, &outcome);
                                }
                            }
                        }
                    }
                    MouseEventKind::Down(MouseButton::Right) => {
                        game.cancel_selection();
                    }
                    _ => {}
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}

fn apply(game: &mut GameState, log: &mut EventLog, action: GameAction) {
    let outcome = game.apply_action(action);
    match action {
        GameAction::NewGame => log.record(&SessionEvent::NewGame {
            game_id: game.game_id(),
            score: game.score(),
        }),
        GameAction::Restart => log.record(&SessionEvent::Restart {
            game_id: game.game_id(),
        }),
        _ => {}
    }
    if let Some(outcome) = outcome {
        record_select(game, log, &outcome);
    }
}

fn record_select(game: &GameState, log: &mut EventLog, outcome: &SelectOutcome) {
    if let SelectOutcome::Resolved(swap) = outcome {
        log.record(&SessionEvent::swap(game.game_id(), swap, game.score()));
    }
}
