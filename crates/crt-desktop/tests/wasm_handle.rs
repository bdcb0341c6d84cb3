//! Browser handle tests, run with `wasm-pack test --node -- --features wasm`

#![cfg(all(feature = "wasm", target_arch = "wasm32"))]

use crt_desktop::DesktopHandle;
use wasm_bindgen_test::*;

fn booted() -> DesktopHandle {
    let mut handle = DesktopHandle::new(1280.0, 800.0, None).unwrap();
    handle.boot().unwrap();
    handle
}

#[wasm_bindgen_test]
fn test_boot_returns_window_ids() {
    let mut handle = DesktopHandle::new(1280.0, 800.0, None).unwrap();
    assert_eq!(handle.boot().unwrap(), "[1,2]");
}

#[wasm_bindgen_test]
fn test_terminal_window_has_prompt() {
    let mut handle = booted();
    let added = handle.terminal_submit(2, "pwd").unwrap();
    assert!(added.contains(r#""text":"C:\\""#));

    // The about window has no prompt
    assert!(handle.terminal_submit(1, "pwd").is_err());
}

#[wasm_bindgen_test]
fn test_close_drops_terminal() {
    let mut handle = booted();
    let id = handle.create_window("terminal", None).unwrap();
    assert!(handle.terminal_output(id).is_ok());

    handle.close_window(id).unwrap();
    assert!(handle.terminal_output(id).is_err());
}

#[wasm_bindgen_test]
fn test_pointer_sequence_and_snapshot() {
    let mut handle = booted();
    assert_eq!(
        handle.pointer_down(600.0, 160.0, false, false, false).unwrap(),
        r#"{"type":"handled"}"#
    );
    handle.pointer_move(500.0, 100.0).unwrap();
    handle.pointer_up().unwrap();
    handle.tick();

    let snapshot = handle.snapshot_json().unwrap();
    assert!(snapshot.contains(r#""mode":"idle""#));
    assert!(handle.grid_json().unwrap().contains(r#""cols":64"#));
}

#[wasm_bindgen_test]
fn test_config_json_overrides() {
    let handle = DesktopHandle::new(400.0, 400.0, Some(r#"{"grid":{"cell_size":40}}"#.into())).unwrap();
    assert!(handle.grid_json().unwrap().contains(r#""rows":10"#));
    assert!(DesktopHandle::new(400.0, 400.0, Some("not json".into())).is_err());
}
