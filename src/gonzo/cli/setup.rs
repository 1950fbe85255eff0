use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gonzo", bin_name = "gonzo", version)]
#[command(about = "Timestamped plain-text notes from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create a new note from the given words, stdin (`-`), or the editor
    #[command(alias = "n")]
    New {
        /// Use your default editor to write the note
        #[arg(short, long)]
        editor: bool,

        /// Note text; a single `-` reads the note from stdin
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Note ids (e.g. 2024-03-05_08:15_Tuesday)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Read notes, oldest first, through $PAGER
    Read {
        /// Start from this id (or any prefix of one, e.g. 2024-03)
        from: Option<String>,

        /// Read in reverse chronological order
        #[arg(short, long)]
        reverse: bool,

        /// Write straight to stdout, skipping the pager
        #[arg(short, long)]
        cat: bool,
    },

    /// Edit a note in your editor (defaults to the latest)
    #[command(alias = "e")]
    Edit {
        /// Note id
        id: Option<String>,
    },

    /// List note ids
    #[command(alias = "ls")]
    List {
        /// Start from this id (or any prefix of one)
        from: Option<String>,

        /// List in reverse chronological order
        #[arg(short, long)]
        reverse: bool,

        /// Keep only the first N ids
        #[arg(long, value_name = "N")]
        head: Option<usize>,

        /// Keep only the last N ids (applied after --head)
        #[arg(long, value_name = "N")]
        tail: Option<usize>,
    },
}
