//! WASM bindings for the desktop controller
//!
//! The page forwards pointer events and renders from JSON snapshots.
//! Each open terminal window gets its own prompt, keyed by window ID.

use std::collections::BTreeMap;

use crt_terminal::Terminal;
use wasm_bindgen::prelude::*;

use crate::controller::DesktopController;
use crate::error::DesktopError;
use crate::input::{InputResult, Modifiers, PointerTarget};
use crate::math::{Size, Vec2};
use crate::types::WindowId;
use crate::window::{WindowKind, WindowOverrides};
use crate::DesktopConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn js_error(err: DesktopError) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
    JsValue::from_str(&err.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| js_error(DesktopError::SerializationError(e.to_string())))
}

/// Desktop handle exported to JavaScript
#[wasm_bindgen]
pub struct DesktopHandle {
    desktop: DesktopController,
    terminals: BTreeMap<WindowId, Terminal>,
}

#[wasm_bindgen]
impl DesktopHandle {
    /// Create a desktop for the current window size. `config_json` may
    /// override any `DesktopConfig` field.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, config_json: Option<String>) -> Result<DesktopHandle, JsValue> {
        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(js_error)?,
            None => DesktopConfig::default(),
        };
        Ok(Self {
            desktop: DesktopController::new(config, Size::new(width, height)),
            terminals: BTreeMap::new(),
        })
    }

    /// Create the initial windows and icons; returns their window IDs as JSON
    #[wasm_bindgen]
    pub fn boot(&mut self) -> Result<String, JsValue> {
        let ids = self.desktop.boot();
        for id in &ids {
            self.attach_terminal(*id);
        }
        log(&format!("[desktop] booted with {} windows", ids.len()));
        to_json(&ids)
    }

    /// Pointer press at client coordinates, hit-tested against the desktop
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32, ctrl: bool, meta: bool, shift: bool) -> Result<String, JsValue> {
        let modifiers = Modifiers { ctrl, meta, shift };
        let result = self
            .desktop
            .handle_pointer_down_at(Vec2::new(x, y), modifiers, js_sys::Date::now());
        self.track(result);
        to_json(&result)
    }

    /// Pointer press on a target the page already resolved from the DOM
    #[wasm_bindgen]
    pub fn pointer_down_on(
        &mut self,
        target_json: &str,
        x: f32,
        y: f32,
        ctrl: bool,
        meta: bool,
        shift: bool,
    ) -> Result<String, JsValue> {
        let target: PointerTarget = serde_json::from_str(target_json)
            .map_err(|e| js_error(DesktopError::SerializationError(e.to_string())))?;
        let modifiers = Modifiers { ctrl, meta, shift };
        let result = self.desktop.handle_pointer_down(
            target,
            Vec2::new(x, y),
            modifiers,
            js_sys::Date::now(),
        );
        self.track(result);
        to_json(&result)
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        to_json(&self.desktop.handle_pointer_move(Vec2::new(x, y)))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> Result<String, JsValue> {
        let result = self.desktop.handle_pointer_up(js_sys::Date::now());
        self.track(result);
        to_json(&result)
    }

    /// Browser window resized
    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.desktop.set_viewport(Size::new(width, height));
    }

    /// Open a window of `kind` (`"terminal"` or `"about"`) with optional
    /// JSON overrides
    #[wasm_bindgen]
    pub fn create_window(&mut self, kind: &str, overrides_json: Option<String>) -> Result<WindowId, JsValue> {
        let overrides: WindowOverrides = match overrides_json {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| js_error(DesktopError::SerializationError(e.to_string())))?,
            None => WindowOverrides::default(),
        };
        let id = self
            .desktop
            .create_window_by_id(kind, overrides)
            .map_err(js_error)?;
        self.attach_terminal(id);
        Ok(id)
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: WindowId) -> Result<(), JsValue> {
        self.desktop.close_window(id).map_err(js_error)?;
        self.terminals.remove(&id);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: WindowId) -> Result<(), JsValue> {
        self.desktop.focus_window(id).map_err(js_error)
    }

    /// Returns true when the window ends up maximized
    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self, id: WindowId) -> Result<bool, JsValue> {
        self.desktop
            .toggle_maximize(id)
            .map(|state| state.is_maximized())
            .map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn toggle_file_menu(&mut self) -> bool {
        self.desktop.toggle_file_menu()
    }

    /// Advance background effects; call from `requestAnimationFrame`
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        let mut sampler = js_sys::Math::random;
        self.desktop.tick(js_sys::Date::now(), &mut sampler);
    }

    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.desktop.snapshot_json().map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn grid_json(&self) -> Result<String, JsValue> {
        self.desktop.grid_json().map_err(js_error)
    }

    /// Submit a prompt line to a terminal window; returns the added lines
    #[wasm_bindgen]
    pub fn terminal_submit(&mut self, id: WindowId, line: &str) -> Result<String, JsValue> {
        let terminal = self
            .terminals
            .get_mut(&id)
            .ok_or_else(|| js_error(DesktopError::WindowNotFound(id)))?;
        to_json(&terminal.submit(line))
    }

    /// Full output history of a terminal window
    #[wasm_bindgen]
    pub fn terminal_output(&self, id: WindowId) -> Result<String, JsValue> {
        let terminal = self
            .terminals
            .get(&id)
            .ok_or_else(|| js_error(DesktopError::WindowNotFound(id)))?;
        to_json(&terminal.output())
    }
}

impl DesktopHandle {
    fn attach_terminal(&mut self, id: WindowId) {
        let is_terminal = self
            .desktop
            .windows()
            .get(id)
            .is_some_and(|w| w.kind == WindowKind::Terminal);
        if is_terminal {
            self.terminals.insert(id, Terminal::default());
        }
    }

    /// Keep the terminal map in step with windows opened or closed by the router
    fn track(&mut self, result: InputResult) {
        match result {
            InputResult::OpenedWindow { window_id } => self.attach_terminal(window_id),
            InputResult::ClosedWindow { window_id } => {
                self.terminals.remove(&window_id);
            }
            InputResult::Handled | InputResult::Unhandled => {}
        }
    }
}
