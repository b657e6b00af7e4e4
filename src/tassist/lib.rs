//! # TAssist Architecture
//!
//! TAssist is a **UI-agnostic contact-management library** for student
//! records, driven by a command-line-style grammar. The binary is a thin
//! terminal client; any other front-end could sit on the same pipeline.
//!
//! ## The Pipeline
//!
//! ```text
//! raw input line
//!       │
//!       ▼
//! parser::parse_command          command word dispatch
//!       │
//!       ▼
//! parser::tokenizer              prefix-keyed structural split (n/, p/, ...)
//!       │
//!       ▼
//! commands::<cmd>::parse         presence + format validation, field types
//!       │
//!       ▼
//! Command (immutable data)
//!       │
//!       ▼
//! Command::execute(&mut model)   the only place person data changes
//!       │
//!       ▼
//! CommandResult                  feedback + help/exit flags
//! ```
//!
//! ## Error Tiers
//!
//! Two disjoint failure kinds, both recoverable:
//! - [`error::ParseError`]: malformed input, raised before the model is
//!   touched. Carries the offending command's usage string, or a field
//!   type's own constraint message.
//! - [`error::CommandError`]: well-formed input that is invalid against
//!   current state (duplicate person, index past the end of the displayed
//!   list). The model is unchanged on failure.
//!
//! ## Key Principle: No I/O in the Core
//!
//! From [`parser`] through [`commands`] and [`model`], code takes plain
//! arguments and returns plain results. Only `main.rs` reads stdin, prints,
//! or exits; only it decides when [`storage`] writes the data file.
//!
//! ## Module Overview
//!
//! - [`parser`]: input line → [`commands::Command`], tokenizer included
//! - [`commands`]: one module per command; parse + execute side by side
//! - [`person`]: the `Person` entity and its validated field types
//! - [`model`]: the `Model` trait and the in-memory `ModelManager`
//! - [`index`]: 1-based indexes into the displayed list
//! - [`storage`]: JSON load/save of the person list
//! - [`error`]: the two error tiers

pub mod commands;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod person;
pub mod storage;
