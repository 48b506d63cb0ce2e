//! Run the user's text editor on a file and collect what they wrote.
//!
//! ```no_run
//! use shedit::TempFile;
//!
//! let editor = shedit::resolve();
//! if editor.is_none() {
//!     panic!("failed to resolve text editor");
//! }
//! let content = editor.edit(&TempFile::new().pattern("message.*.txt"))?;
//! print!("{}", String::from_utf8_lossy(&content));
//! # Ok::<(), shedit::EditError>(())
//! ```

pub mod env;
pub mod error;
pub mod file;
pub mod resolve;
pub mod session;

pub use env::{Environment, ProcessEnv};
pub use error::EditError;
pub use file::{EditableFile, FixedPath, TempFile};
pub use resolve::{resolve, resolve_with, Editor, Resolver, DEFAULT_EDITOR};
