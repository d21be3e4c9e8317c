//! # Stockroom Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom (terminal)                             │
//! │                                                                         │
//! │  main.rs ────► calls run(), reports startup failures                   │
//! │                                                                         │
//! │  lib.rs ─────► config, logging, store, terminal setup                  │
//! │                                                                         │
//! │  commands/ ──► Add · Delete · Update · Search · Show All               │
//! │                                                                         │
//! │  state/ ─────► AppConfig, FormState                                    │
//! │                                                                         │
//! │  ui/ ────────► event loop, key mapping, rendering, alerts              │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                    SQLite file (products table)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match stockroom_desktop::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("stockroom: {}", e);
            ExitCode::FAILURE
        }
    }
}
