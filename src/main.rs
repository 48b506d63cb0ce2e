mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use shedit::{EditableFile, Editor, Environment, FixedPath, ProcessEnv, TempFile};
use std::io::{self, Write};
use which::which;

const EDITOR_ENV: &str = "SHEDIT_EDITOR";

fn editor_override(flag: Option<&str>) -> Editor {
    flag.map(Editor::from)
        .or_else(|| ProcessEnv.var(EDITOR_ENV).map(Editor::from))
        .unwrap_or(Editor::NONE)
}

fn ensure_program(editor: &Editor) -> Result<()> {
    let program = editor
        .as_str()
        .split_whitespace()
        .next()
        .context("editor command is blank")?;
    which(program).with_context(|| format!("editor program not found in PATH: {program}"))?;
    Ok(())
}

fn editable_file(cli: &Cli) -> Box<dyn EditableFile> {
    if let Some(path) = &cli.file {
        return Box::new(FixedPath::new(path));
    }

    let mut temp = TempFile::new()
        .pattern(&cli.pattern)
        .content(cli.content.as_bytes());
    if let Some(dir) = &cli.dir {
        temp = temp.dir(dir);
    }
    Box::new(temp)
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let editor = shedit::resolve_with(|| editor_override(cli.editor.as_deref()));
    if editor.is_none() {
        anyhow::bail!("failed to resolve text editor");
    }

    match &cli.command {
        Some(Command::Resolve { check }) => {
            if *check {
                ensure_program(&editor)?;
            }
            println!("{editor}");
            return Ok(());
        }
        None => {}
    }

    let file = editable_file(&cli);
    let content = editor
        .edit(file.as_ref())
        .with_context(|| format!("failed to edit text with {editor}"))?;

    io::stdout()
        .write_all(&content)
        .context("failed to write edited text to stdout")?;

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("shedit error: {error}");
        for cause in error.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
        bail_exit();
    }
}

fn bail_exit() {
    std::process::exit(1);
}
