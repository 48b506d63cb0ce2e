use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "shedit",
    version,
    about = "Edit text in your editor and print the result"
)]
pub struct Cli {
    /// Editor command, taking precedence over $SHEDIT_EDITOR, $VISUAL and $EDITOR
    #[arg(long, value_name = "COMMAND")]
    pub editor: Option<String>,

    /// Edit this file instead of a temporary one. It is removed afterwards.
    #[arg(long, value_name = "PATH", conflicts_with_all = ["dir", "pattern", "content"])]
    pub file: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Temporary file name; the last '*' becomes random characters
    #[arg(long, default_value = "shedit.*.txt")]
    pub pattern: String,

    /// Initial text of the temporary file
    #[arg(long, default_value = "")]
    pub content: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the editor that would be launched
    Resolve {
        /// Fail unless the editor program is found in PATH
        #[arg(long)]
        check: bool,
    },
}
