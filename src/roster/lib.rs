//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee record library**. The interactive
//! menu binary is a thin client; everything it does goes through the
//! library layers below it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Renders the menu, prompts on stdin, formats output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation                             │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store.rs)                                         │
//! │  - RecordStore: ordered in-memory record collection         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or
//! `std::process::exit`. Outcomes a user needs to hear about (duplicate
//! name, record not found) travel as leveled messages inside
//! [`commands::CmdResult`]; only I/O failures are errors.
//!
//! The menu loop itself lives in `cli/` but is generic over its input and
//! output streams, so even the interactive surface runs in-process under
//! test with plain buffers.
//!
//! ## Testing Strategy
//!
//! 1. **Store and commands**: unit tests next to the code they cover.
//! 2. **Prompting and the menu loop**: unit tests driving the generic
//!    streams with `Cursor`.
//! 3. **The binary**: integration tests under `tests/` scripting stdin
//!    end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`store`]: The in-memory record store
//! - [`model`]: The `Employee` record and boundary validation
//! - [`error`]: Error types
//! - [`cli`]: Menu loop, prompting, and terminal rendering

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
