//! Whole prompt sessions through the public API

use crt_terminal::{Command, LineClass, OutputLine, StaticFs, Terminal};
use proptest::prelude::*;

#[test]
fn test_session_transcript() {
    let mut term = Terminal::new(StaticFs::portfolio());

    term.submit("help");
    term.submit("ls");
    term.submit("cat readme.txt");
    term.submit("format c:");

    let classes: Vec<LineClass> = term.output().iter().map(|l| l.class).collect();
    assert_eq!(
        classes,
        vec![
            LineClass::Normal,  // banner
            LineClass::Normal,  // C:\>help
            LineClass::Success, // help text
            LineClass::Normal,  // C:\>ls
            LineClass::Normal,  // listing
            LineClass::Normal,  // C:\>cat readme.txt
            LineClass::Normal,  // file
            LineClass::Normal,  // C:\>format c:
            LineClass::Error,   // unknown command
        ]
    );
}

#[test]
fn test_every_listed_file_can_be_read() {
    let mut term = Terminal::default();
    for name in ["about.txt", "projects.txt", "contact.txt", "skills.txt", "readme.txt"] {
        let added = term.submit(&format!("cat {}", name));
        assert_eq!(added.len(), 2, "{}", name);
        assert_eq!(added[1].class, LineClass::Normal, "{}", name);
    }
}

proptest! {
    /// Anything that is not a known command name yields exactly one
    /// error line after the echo
    #[test]
    fn unknown_commands_produce_error_line(name in "[a-z]{1,8}") {
        prop_assume!(!matches!(name.as_str(), "ls" | "cat" | "help" | "clear" | "pwd"));
        let mut term = Terminal::default();
        let added = term.submit(&name).to_vec();
        prop_assert_eq!(added.len(), 2);
        prop_assert_eq!(Command::parse(&name), Command::Unknown(name.clone()));
        prop_assert_eq!(
            &added[1],
            &OutputLine::error(format!(
                "'{}' is not recognized as an internal or external command.",
                name
            ))
        );
    }
}
