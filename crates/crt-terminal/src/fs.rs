//! Static read-only filesystem
//!
//! Directories keep their entries in insertion order so listings come
//! out the way the tree was built.

use crate::error::FsError;

/// Drive root every path is resolved against
pub const ROOT: &str = "C:\\";

/// A filesystem node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    File { content: String },
    Directory { entries: Vec<Entry> },
}

impl Node {
    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }
}

/// A named node inside a directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub node: Node,
}

impl Entry {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

/// In-memory tree rooted at [`ROOT`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticFs {
    root: Vec<Entry>,
}

impl StaticFs {
    /// Filesystem whose root directory holds `entries`
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { root: entries }
    }

    /// The stock tree: five text files at the root
    pub fn portfolio() -> Self {
        Self::new(vec![
            Entry::new(
                "about.txt",
                Node::file(
                    "Hi! I'm a software developer.\nI love building things and solving problems.\nWelcome to my retro terminal website!",
                ),
            ),
            Entry::new(
                "projects.txt",
                Node::file(
                    "My Projects:\n- Personal Website (this!)\n- Various web applications\n- Open source contributions\n- And more coming soon...",
                ),
            ),
            Entry::new(
                "contact.txt",
                Node::file("Get in touch:\nEmail: see the About Me window\nGitHub: see the About Me window"),
            ),
            Entry::new(
                "skills.txt",
                Node::file(
                    "Technical Skills:\n- Rust\n- WebAssembly\n- Web Development\n- System Design\n- Problem Solving",
                ),
            ),
            Entry::new(
                "readme.txt",
                Node::file(
                    "Welcome to my terminal!\n\nAvailable commands:\n- ls: list files and directories\n- cat <filename>: display file contents\n- help: show available commands\n- clear: clear the terminal\n\nTry \"ls\" to see what's here!",
                ),
            ),
        ])
    }

    /// Entries of the directory at `path` (`C:\` or `C:\sub\dir`)
    pub fn read_dir(&self, path: &str) -> Result<&[Entry], FsError> {
        let rest = path
            .strip_prefix(ROOT)
            .or_else(|| path.strip_prefix("C:"))
            .ok_or_else(|| FsError::NotADirectory(path.to_string()))?;

        let mut entries: &[Entry] = &self.root;
        for component in rest.split('\\').filter(|c| !c.is_empty()) {
            let entry = entries
                .iter()
                .find(|e| e.name.eq_ignore_ascii_case(component))
                .ok_or_else(|| FsError::NotADirectory(path.to_string()))?;
            match &entry.node {
                Node::Directory { entries: inner } => entries = inner.as_slice(),
                Node::File { .. } => return Err(FsError::NotADirectory(path.to_string())),
            }
        }
        Ok(entries)
    }

    /// Contents of file `name` in directory `dir`
    pub fn read_file(&self, dir: &str, name: &str) -> Result<&str, FsError> {
        let entry = self
            .read_dir(dir)?
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| FsError::not_found(name))?;
        match &entry.node {
            Node::File { content } => Ok(content.as_str()),
            Node::Directory { .. } => Err(FsError::NotAFile(name.to_string())),
        }
    }
}

impl Default for StaticFs {
    fn default() -> Self {
        Self::portfolio()
    }
}
