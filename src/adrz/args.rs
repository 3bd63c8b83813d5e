use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adrz")]
#[command(about = "Manage a directory of architectural decision records", long_about = None)]
// Only `create` and `regen` are real commands; everything else must fall
// through to the unknown-command arm, so clap's own help subcommand is off.
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new numbered record; the words are joined into its name
    Create {
        /// Words forming the record name (concatenated, no separator)
        name: Vec<String>,
    },

    /// Rebuild the record directory's core files and README index
    Regen,

    // Unrecognized tokens land here so the dispatcher can print the bundled
    // help document instead of clap's error.
    #[command(external_subcommand)]
    External(Vec<String>),
}
