//! Terminal for the CRT desktop
//!
//! A DOS-style prompt over a static, read-only filesystem rooted at `C:\`.
//!
//! - [`fs`]: the in-memory directory tree
//! - [`shell`]: command parsing, execution and the output history
//!
//! ## Example
//!
//! ```rust
//! use crt_terminal::{LineClass, Terminal};
//!
//! let mut term = Terminal::default();
//! let added = term.submit("cat missing.txt");
//! assert_eq!(added[0].text, "C:\\>cat missing.txt");
//! assert_eq!(added[1].class, LineClass::Error);
//! ```

pub mod error;
pub mod fs;
pub mod shell;

pub use error::FsError;
pub use fs::{Entry, Node, StaticFs, ROOT};
pub use shell::{Command, LineClass, OutputLine, Terminal, WELCOME};
