use super::*;
use crate::fs::{Entry, Node};

#[test]
fn test_welcome_banner() {
    let term = Terminal::default();
    assert_eq!(term.output().len(), 1);
    assert!(term.output()[0].text.starts_with("Fakerosoft Fakedows 98"));
    assert_eq!(term.prompt(), "C:\\>");
}

#[test]
fn test_ls_lists_five_items() {
    let mut term = Terminal::default();
    let added = term.submit("ls");

    assert_eq!(added.len(), 2);
    assert_eq!(added[0].text, "C:\\>ls");
    let listing = &added[1];
    assert_eq!(listing.class, LineClass::Normal);
    assert!(listing.text.starts_with("Directory of C:\\\n\n"));
    assert!(listing.text.contains("       about.txt\n"));
    assert!(listing.text.ends_with("\n5 item(s)"));
}

#[test]
fn test_ls_marks_directories() {
    let fs = StaticFs::new(vec![Entry::new(
        "games",
        Node::Directory { entries: vec![] },
    )]);
    let mut term = Terminal::new(fs);
    let added = term.submit("ls");
    assert!(added[1].text.contains("<DIR>  games\n"));
    assert!(added[1].text.ends_with("1 item(s)"));
}

#[test]
fn test_cat_file() {
    let mut term = Terminal::default();
    let added = term.submit("cat skills.txt");
    assert!(added[1].text.starts_with("Technical Skills:"));
    assert_eq!(added[1].class, LineClass::Normal);
}

#[test]
fn test_cat_errors() {
    let mut term = Terminal::default();

    let added = term.submit("cat");
    assert_eq!(added[1], OutputLine::error("Usage: cat <filename>"));

    let added = term.submit("cat nope.txt");
    assert_eq!(added[1], OutputLine::error("File 'nope.txt' not found"));
}

#[test]
fn test_cat_directory_is_not_a_file() {
    let fs = StaticFs::new(vec![Entry::new(
        "games",
        Node::Directory { entries: vec![] },
    )]);
    let mut term = Terminal::new(fs);
    let added = term.submit("cat games");
    assert_eq!(added[1], OutputLine::error("'games' is not a file"));
}

#[test]
fn test_unknown_command() {
    let mut term = Terminal::default();
    let added = term.submit("  dir /w ");
    assert_eq!(added[0].text, "C:\\>dir /w");
    assert_eq!(
        added[1],
        OutputLine::error("'dir' is not recognized as an internal or external command.")
    );
    assert_eq!(added[1].class.class(), Some("error"));
}

#[test]
fn test_help_is_success() {
    let mut term = Terminal::default();
    let added = term.submit("help");
    assert_eq!(added[1].class, LineClass::Success);
    assert!(added[1].text.contains("- readme.txt"));
}

#[test]
fn test_pwd() {
    let mut term = Terminal::default();
    assert_eq!(term.submit("pwd")[1].text, "C:\\");
}

#[test]
fn test_empty_line_echoes_prompt() {
    let mut term = Terminal::default();
    let added = term.submit("   ");
    assert_eq!(added, [OutputLine::normal("C:\\>")]);
}

#[test]
fn test_clear_empties_output() {
    let mut term = Terminal::default();
    term.submit("ls");
    assert!(term.submit("clear").is_empty());
    assert!(term.output().is_empty());

    term.submit("pwd");
    assert_eq!(term.output().len(), 2);
}

#[test]
fn test_command_parse() {
    assert_eq!(Command::parse("ls -la"), Command::Ls);
    assert_eq!(
        Command::parse("cat  a.txt b.txt"),
        Command::Cat(Some("a.txt".to_string()))
    );
    assert_eq!(Command::parse("LS"), Command::Unknown("LS".to_string()));
}

#[test]
fn test_output_line_json() {
    let json = serde_json::to_string(&OutputLine::success("ok")).unwrap();
    assert_eq!(json, r#"{"text":"ok","class":"success"}"#);
}
