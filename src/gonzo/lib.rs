//! # Gonzo Architecture
//!
//! Gonzo keeps timestamped plain-text notes, one file per note, in
//! `~/.gonzo`. The library holds all of the behaviour; the `gonzo` binary is
//! one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves note text, runs the pager     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses user-typed ids         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + listing.rs                 │
//! │  - Business logic, ordering, filtering, windowing           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait, FileStore, InMemoryStore                │
//! │  - Identity <-> path addressing                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identities
//!
//! A note's identity is its creation minute plus weekday,
//! `2024-03-05_08:15_Tuesday`, and it is also the file name stem. Sorting
//! identities as strings sorts them chronologically, which is all the
//! ordering and range filtering relies on. See [`model`].
//!
//! ## No Ambient State in the Core
//!
//! Editor, pager and storage root are resolved once by the CLI into a
//! [`config::GonzoConfig`] and passed down. Nothing from `api.rs` inward reads
//! environment variables, prints, or exits.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: one module per verb
//! - [`listing`]: reverse / anchor filter / head-tail window
//! - [`store`]: storage trait, filesystem and in-memory stores, addressing
//! - [`model`]: `NoteId` and `Note`
//! - [`source`]: where the text of a new note comes from
//! - [`editor`]: external editor round-trip
//! - [`config`]: environment snapshot and `config.json`
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod listing;
pub mod model;
pub mod source;
pub mod store;
