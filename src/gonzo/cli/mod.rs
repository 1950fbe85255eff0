//! # CLI Behavior
//!
//! One client of the gonzo library. This is the only place that knows about
//! terminal I/O, exit codes, environment variables, and output formatting.
//!
//! ## Commands
//!
//! - `gonzo new buy milk`: note from the words given
//! - `echo hi | gonzo new -`: note from stdin
//! - `gonzo new -e [words]`: note written in `$EDITOR`, pre-filled with the words
//! - `gonzo read [FROM] [-r] [-c]`: every note, framed, through `$PAGER`
//! - `gonzo edit [ID]`: rewrite a note in `$EDITOR` (latest by default)
//! - `gonzo list [FROM] [-r] [--head N] [--tail N]`: ids only, one per line
//! - `gonzo delete ID...`: remove notes; keeps going past missing ones
//!
//! Running `gonzo` with no command lists every id.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `setup`: argument parsing via clap
//! - `render`: note framing, id lists, colored messages
//! - `pager`: the `read` output sink

mod commands;
mod pager;
mod render;
mod setup;

pub use commands::run;
