//! Session event log: one JSON object per line.
//!
//! The log is optional and best-effort. The first write error disables it and
//! is kept for the binary to report after the terminal is restored.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::SwapOutcome;
use crate::types::Coord;

/// `[row, col]`
pub type CellRef = [u8; 2];

fn cell_ref(at: Coord) -> CellRef {
    [at.row, at.col]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    GameStarted {
        game_id: u32,
        seed: u32,
        size: u8,
        symbols: u8,
    },
    Swap {
        game_id: u32,
        a: CellRef,
        b: CellRef,
        matched: Vec<CellRef>,
        score_delta: u32,
        score: u32,
    },
    NewGame {
        game_id: u32,
        score: u32,
    },
    Restart {
        game_id: u32,
    },
}

impl SessionEvent {
    pub fn swap(game_id: u32, outcome: &SwapOutcome, score: u32) -> Self {
        SessionEvent::Swap {
            game_id,
            a: cell_ref(outcome.a),
            b: cell_ref(outcome.b),
            matched: outcome.matched.iter().copied().map(cell_ref).collect(),
            score_delta: outcome.score_delta,
            score,
        }
    }
}

pub struct EventLog<W: Write = BufWriter<File>> {
    sink: Option<W>,
    failure: Option<String>,
}

impl EventLog<BufWriter<File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Some(sink),
            failure: None,
        }
    }

    /// A log that drops every event.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            failure: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Write one event. Never fails; errors switch the log off.
    pub fn record(&mut self, event: &SessionEvent) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let written = serde_json::to_writer(&mut *sink, event)
            .map_err(|e| e.to_string())
            .and_then(|()| sink.write_all(b"\n").map_err(|e| e.to_string()))
            .and_then(|()| sink.flush().map_err(|e| e.to_string()));
        if let Err(e) = written {
            self.sink = None;
            self.failure = Some(e);
        }
    }

    /// Error that disabled the log, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn into_inner(self) -> Option<W> {
        self.sink
    }
}
