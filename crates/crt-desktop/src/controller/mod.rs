//! Desktop controller coordinating all components
//!
//! [`DesktopController`] is the single context object of the desktop. It
//! owns the window registry, the icons, the CRT background, the pointer
//! mode and the viewport, and routes every pointer event through them.

mod pointer;
mod snapshot;

pub use snapshot::{DesktopSnapshot, WindowView};

use std::collections::BTreeMap;

use crate::background::CrtGrid;
use crate::config::DesktopConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::icons::{ClickTracker, IconSet};
use crate::input::PointerMode;
use crate::math::{Rect, Size, Vec2};
use crate::types::{IconId, WindowId};
use crate::window::{
    WindowConfig, WindowKind, WindowManager, WindowOverrides, WindowState, WindowTransform,
};

/// Desktop controller
///
/// Manages:
/// - Window registry (create, close, focus, z-order)
/// - Desktop icons and their selection
/// - Pointer mode state machine (window drag/resize, rubber band, icon drag)
/// - CRT background grid
pub struct DesktopController {
    config: DesktopConfig,
    viewport: Size,
    windows: WindowManager,
    icons: IconSet,
    background: CrtGrid,
    mode: PointerMode,
    icon_clicks: ClickTracker<IconId>,
    title_clicks: ClickTracker<WindowId>,
    /// Windows opened per kind, boot windows included
    opened: BTreeMap<WindowKind, u32>,
}

impl DesktopController {
    /// Create an empty desktop for a viewport
    pub fn new(config: DesktopConfig, viewport: Size) -> Self {
        let opened = WindowKind::all().iter().map(|k| (*k, 1)).collect();
        Self {
            windows: WindowManager::new(config.base_z_index),
            icons: IconSet::new(),
            background: CrtGrid::new(config.grid, viewport),
            mode: PointerMode::Idle,
            icon_clicks: ClickTracker::new(config.double_click_ms),
            title_clicks: ClickTracker::new(config.double_click_ms),
            opened,
            viewport,
            config,
        }
    }

    /// Create a desktop with default configuration
    pub fn with_viewport(viewport: Size) -> Self {
        Self::new(DesktopConfig::default(), viewport)
    }

    /// Populate the initial desktop: one icon per window kind, then a
    /// terminal and an about window centred in the viewport. The terminal
    /// ends up focused. Returns the boot window IDs.
    pub fn boot(&mut self) -> Vec<WindowId> {
        let mut position = self.config.icon_origin;
        for kind in WindowKind::all() {
            self.icons.add(*kind, position, self.config.icon_size);
            position = position + Vec2::new(0.0, self.config.icon_spacing);
        }
        self.icons.fit_to_viewport(self.viewport);

        let centre = Vec2::new(self.viewport.width * 0.5, self.viewport.height * 0.5);
        let mut booted = Vec::new();
        for kind in [WindowKind::About, WindowKind::Terminal] {
            let template = self.config.template(kind);
            let config = WindowConfig::from_template(
                kind,
                template,
                centre,
                self.config.min_window_size,
                WindowOverrides {
                    transform: Some(WindowTransform::Centered),
                    ..Default::default()
                },
            );
            booted.push(self.register(config));
        }
        tracing::info!(windows = booted.len(), icons = self.icons.len(), "desktop booted");
        booted
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn background(&self) -> &CrtGrid {
        &self.background
    }

    pub fn mode(&self) -> &PointerMode {
        &self.mode
    }

    /// Rubber-band rectangle while a selection drag is in progress
    pub fn selection_rect(&self) -> Option<Rect> {
        match self.mode {
            PointerMode::RubberBanding { rect, .. } => rect,
            _ => None,
        }
    }

    // =========================================================================
    // Window lifecycle
    // =========================================================================

    /// Open a window of `kind` at the next cascade slot for that kind,
    /// apply `overrides`, fit it into the viewport and focus it
    pub fn create_window(&mut self, kind: WindowKind, overrides: WindowOverrides) -> WindowId {
        let counter = self.opened.entry(kind).or_insert(1);
        *counter += 1;
        let index = *counter;

        let template = self.config.template(kind);
        let config = WindowConfig::from_template(
            kind,
            template,
            template.cascade_position(index),
            self.config.min_window_size,
            overrides,
        );
        self.register(config)
    }

    /// `create_window` addressed by kind ID (`"terminal"`, `"about"`)
    pub fn create_window_by_id(
        &mut self,
        kind: &str,
        overrides: WindowOverrides,
    ) -> DesktopResult<WindowId> {
        let kind: WindowKind = kind.parse()?;
        Ok(self.create_window(kind, overrides))
    }

    fn register(&mut self, config: WindowConfig) -> WindowId {
        let id = self.windows.create(config);
        if let Some(window) = self.windows.get_mut(id) {
            window.fit_to_viewport(self.viewport);
        }
        // The window was just created, so focus cannot miss
        let _ = self.windows.focus(id);
        id
    }

    /// Close a window. A gesture on it ends with it.
    pub fn close_window(&mut self, id: WindowId) -> DesktopResult<()> {
        self.windows.close(id)?;
        if self.mode.window() == Some(id) {
            self.set_mode(PointerMode::Idle);
        }
        self.title_clicks.forget(id);
        Ok(())
    }

    pub fn focus_window(&mut self, id: WindowId) -> DesktopResult<()> {
        self.windows.focus(id).map(|_| ())
    }

    /// Maximize or restore a window; returns its new state
    pub fn toggle_maximize(&mut self, id: WindowId) -> DesktopResult<WindowState> {
        let viewport = self.viewport;
        let window = self
            .windows
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        window.stop_drag();
        window.stop_resize();
        let state = window.toggle_maximize(viewport);
        if self.mode.window() == Some(id) {
            self.set_mode(PointerMode::Idle);
        }
        tracing::debug!(window = id, maximized = state.is_maximized(), "maximize toggled");
        Ok(state)
    }

    /// Restore a maximized window
    pub fn restore_window(&mut self, id: WindowId) -> DesktopResult<()> {
        self.windows
            .get_mut(id)
            .ok_or(DesktopError::WindowNotFound(id))?
            .restore()
    }

    // =========================================================================
    // Viewport & background
    // =========================================================================

    /// Resize the viewport, re-fitting windows, icons and the grid
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        for window in self.windows.iter_mut() {
            window.fit_to_viewport(viewport);
        }
        self.icons.fit_to_viewport(viewport);
        self.background.layout(viewport);
        tracing::debug!(width = viewport.width, height = viewport.height, "viewport changed");
    }

    /// Advance the background effects; `sampler` yields values in `[0, 1)`
    pub fn tick<F>(&mut self, now_ms: f64, sampler: &mut F)
    where
        F: FnMut() -> f64,
    {
        self.background.tick(now_ms, sampler);
    }

    /// Open or close the background file menu
    pub fn toggle_file_menu(&mut self) -> bool {
        self.background.toggle_file_menu()
    }

    fn set_mode(&mut self, mode: PointerMode) {
        if self.mode.name() != mode.name() {
            tracing::debug!(from = self.mode.name(), to = mode.name(), "pointer mode");
        }
        self.mode = mode;
    }
}
