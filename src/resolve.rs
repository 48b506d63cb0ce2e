use std::borrow::Cow;
use std::fmt;

use crate::env::{Environment, ProcessEnv};

/// Editor used when neither `VISUAL` nor `EDITOR` is set and the terminal
/// is not dumb.
pub const DEFAULT_EDITOR: &str = "vi";

/// A shell command that starts a text editor.
///
/// The command is handed to `/bin/sh` with the file appended as `"$1"`, so
/// values such as `code --wait` or `emacs -nw` work as they do for git.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Editor(Cow<'static, str>);

impl Editor {
    /// No editor could be resolved.
    pub const NONE: Editor = Editor(Cow::Borrowed(""));

    pub fn new(command: impl Into<String>) -> Self {
        Self(Cow::Owned(command.into()))
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Editor {
    fn from(command: &str) -> Self {
        Self::new(command)
    }
}

impl From<String> for Editor {
    fn from(command: String) -> Self {
        Self::new(command)
    }
}

impl fmt::Display for Editor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Picks an editor from `TERM`, `VISUAL` and `EDITOR`.
#[derive(Debug, Clone)]
pub struct Resolver<E> {
    env: E,
    default: Editor,
}

impl<E: Environment> Resolver<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            default: Editor(Cow::Borrowed(DEFAULT_EDITOR)),
        }
    }

    /// Replaces the fallback used on capable terminals.
    pub fn with_default(mut self, default: impl Into<Editor>) -> Self {
        self.default = default.into();
        self
    }

    /// `VISUAL` wins over `EDITOR`, which wins over the default. On a dumb
    /// terminal only `EDITOR` is consulted, and [`Editor::NONE`] is returned
    /// when it is unset.
    pub fn resolve(&self) -> Editor {
        let dumb = self.env.var("TERM").as_deref() == Some("dumb");

        let mut editor = if dumb {
            Editor::NONE
        } else {
            self.lookup("VISUAL")
        };
        if editor.is_none() {
            editor = self.lookup("EDITOR");
        }
        if editor.is_none() && !dumb {
            editor = self.default.clone();
        }
        editor
    }

    /// Calls `f` first and falls back to [`Resolver::resolve`] when it
    /// returns [`Editor::NONE`].
    pub fn resolve_with<F>(&self, f: F) -> Editor
    where
        F: FnOnce() -> Editor,
    {
        let editor = f();
        if editor.is_none() {
            return self.resolve();
        }
        editor
    }

    fn lookup(&self, key: &str) -> Editor {
        self.env.var(key).map(Editor::new).unwrap_or(Editor::NONE)
    }
}

/// Resolves an editor from the process environment.
pub fn resolve() -> Editor {
    Resolver::new(ProcessEnv).resolve()
}

/// Resolves an editor from `f`, then from the process environment.
pub fn resolve_with<F>(f: F) -> Editor
where
    F: FnOnce() -> Editor,
{
    Resolver::new(ProcessEnv).resolve_with(f)
}
