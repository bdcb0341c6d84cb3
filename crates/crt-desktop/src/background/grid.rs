//! CRT background grid: layout, blink and scanline state

use serde::Serialize;

use super::{Cell, CellKind, GridConfig, Menu};
use crate::math::{snap_to_grid, Size, Vec2};

/// Character grid drawn behind the windows
///
/// Time is supplied by the caller, and randomness comes through a
/// sampler returning values in `[0, 1)`, so the effects are
/// deterministic under test.
#[derive(Clone, Debug)]
pub struct CrtGrid {
    config: GridConfig,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    scanline_row: usize,
    file_menu_open: bool,
    last_blink_ms: Option<f64>,
    last_scanline_ms: Option<f64>,
}

/// Serializable view of one cell
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CellView {
    pub glyph: char,
    pub class: Option<&'static str>,
}

/// Serializable view of the whole grid
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
    pub scanline_row: usize,
    pub file_menu_open: bool,
    pub cells: Vec<CellView>,
}

impl CrtGrid {
    /// Lay out a grid for `viewport`
    pub fn new(config: GridConfig, viewport: Size) -> Self {
        let mut grid = Self {
            config,
            rows: 0,
            cols: 0,
            cells: Vec::new(),
            scanline_row: 0,
            file_menu_open: false,
            last_blink_ms: None,
            last_scanline_ms: None,
        };
        grid.layout(viewport);
        grid
    }

    /// Rebuild the cells for a new viewport. Running blinks are dropped.
    pub fn layout(&mut self, viewport: Size) {
        let cell = self.config.cell_size;
        if cell.is_finite() && cell > 0.0 {
            self.rows = (viewport.height / cell).floor().max(0.0) as usize;
            self.cols = (viewport.width / cell).floor().max(0.0) as usize;
        } else {
            self.rows = 0;
            self.cols = 0;
        }

        let total = self.rows * self.cols;
        let mut cells = Vec::with_capacity(total);

        // Menubar glyphs fill the start of row 0, clipped to the row width
        'menubar: for menu in Menu::all() {
            for glyph in menu.label().chars() {
                if cells.len() >= self.cols.min(total) {
                    break 'menubar;
                }
                cells.push(Cell::new(glyph, CellKind::Menubar(*menu)));
            }
        }
        let menubar_cells = cells.len();

        for index in menubar_cells..total {
            if index + 1 == total {
                cells.push(Cell::new('G', CellKind::Bottom));
            } else {
                cells.push(Cell::new('•', CellKind::Dot));
            }
        }

        self.cells = cells;
        if self.rows == 0 {
            self.scanline_row = 0;
        } else {
            self.scanline_row %= self.rows;
        }
        tracing::debug!(rows = self.rows, cols = self.cols, "crt grid laid out");
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col)
    }

    /// Cell under a client-space point
    pub fn cell_at(&self, point: Vec2) -> Option<&Cell> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.config.cell_size).floor() as usize;
        let row = (point.y / self.config.cell_size).floor() as usize;
        self.cell(row, col)
    }

    /// Menu whose label covers `point`
    pub fn menu_at(&self, point: Vec2) -> Option<Menu> {
        match self.cell_at(point)?.kind {
            CellKind::Menubar(menu) => Some(menu),
            _ => None,
        }
    }

    /// Snap a point to the nearest grid intersection
    pub fn snap(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            snap_to_grid(point.x, self.config.cell_size),
            snap_to_grid(point.y, self.config.cell_size),
        )
    }

    // =========================================================================
    // File menu
    // =========================================================================

    pub fn is_file_menu_open(&self) -> bool {
        self.file_menu_open
    }

    /// Open the file submenu if closed, close it if open
    pub fn toggle_file_menu(&mut self) -> bool {
        self.file_menu_open = !self.file_menu_open;
        self.file_menu_open
    }

    // =========================================================================
    // Effects
    // =========================================================================

    /// Row currently highlighted by the scanline
    pub fn scanline_row(&self) -> usize {
        self.scanline_row
    }

    /// Move the scanline down one row, wrapping at the bottom
    pub fn advance_scanline(&mut self) {
        if self.rows > 0 {
            self.scanline_row = (self.scanline_row + 1) % self.rows;
        }
    }

    /// End expired blinks, then start a blink on each cell whose sample
    /// falls under the blink probability. Returns the number started.
    pub fn blink_step<F>(&mut self, now_ms: f64, sampler: &mut F) -> usize
    where
        F: FnMut() -> f64,
    {
        let probability = self.config.blink_probability;
        let until = now_ms + self.config.blink_duration_ms;
        let mut started = 0;
        for cell in &mut self.cells {
            if cell.blink_until.is_some_and(|end| end <= now_ms) {
                cell.blink_until = None;
            }
            if sampler() < probability && !cell.is_blinking() {
                cell.blink_until = Some(until);
                started += 1;
            }
        }
        if started > 0 {
            tracing::trace!(started, "crt blink");
        }
        started
    }

    /// Drive both effects from the host's frame clock.
    ///
    /// Blinks run at most once per blink interval; the scanline catches
    /// up on every interval that elapsed since the last call.
    pub fn tick<F>(&mut self, now_ms: f64, sampler: &mut F)
    where
        F: FnMut() -> f64,
    {
        let blink_due = self
            .last_blink_ms
            .map_or(true, |last| now_ms - last >= self.config.blink_interval_ms);
        if blink_due {
            self.blink_step(now_ms, sampler);
            self.last_blink_ms = Some(now_ms);
        } else {
            self.expire_blinks(now_ms);
        }

        let interval = self.config.scanline_interval_ms;
        match self.last_scanline_ms {
            None => self.last_scanline_ms = Some(now_ms),
            Some(last) if interval > 0.0 => {
                let steps = ((now_ms - last) / interval).floor().max(0.0) as usize;
                for _ in 0..steps.min(self.rows.max(1)) {
                    self.advance_scanline();
                }
                self.last_scanline_ms = Some(last + steps as f64 * interval);
            }
            Some(_) => {}
        }
    }

    fn expire_blinks(&mut self, now_ms: f64) {
        for cell in &mut self.cells {
            if cell.blink_until.is_some_and(|end| end <= now_ms) {
                cell.blink_until = None;
            }
        }
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            rows: self.rows,
            cols: self.cols,
            cell_size: self.config.cell_size,
            scanline_row: self.scanline_row,
            file_menu_open: self.file_menu_open,
            cells: self
                .cells
                .iter()
                .map(|c| CellView {
                    glyph: c.shown(),
                    class: c.kind.class(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: f32, height: f32) -> CrtGrid {
        CrtGrid::new(GridConfig::default(), Size::new(width, height))
    }

    #[test]
    fn test_layout_dimensions() {
        let g = grid(1290.0, 805.0);
        assert_eq!(g.rows(), 40);
        assert_eq!(g.cols(), 64);
        assert_eq!(g.cells().len(), 40 * 64);
    }

    #[test]
    fn test_menubar_and_bottom_cell() {
        let g = grid(400.0, 200.0);
        let row0: String = (0..15).map(|c| g.cell(0, c).unwrap().glyph).collect();
        assert_eq!(row0, "^File^Edit^View");
        assert_eq!(g.cell(0, 0).unwrap().kind.class(), Some("menubar file"));
        assert_eq!(g.cell(0, 14).unwrap().kind, CellKind::Menubar(Menu::View));
        assert_eq!(g.cell(0, 15).unwrap().glyph, '•');

        let last = g.cells().last().unwrap();
        assert_eq!(last.glyph, 'G');
        assert_eq!(last.kind.class(), Some("bottom"));
    }

    #[test]
    fn test_narrow_grid_clips_menubar() {
        let g = grid(200.0, 100.0);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.cells().len(), 50);
        assert_eq!(g.cell(1, 0).unwrap().glyph, '•');
        assert_eq!(g.cells().last().unwrap().glyph, 'G');
    }

    #[test]
    fn test_empty_viewport() {
        let g = grid(10.0, 10.0);
        assert!(g.cells().is_empty());
        assert_eq!(g.cell_at(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_zero_cell_size_lays_out_nothing() {
        let config = GridConfig {
            cell_size: 0.0,
            ..GridConfig::default()
        };
        let g = CrtGrid::new(config, Size::new(1280.0, 800.0));
        assert_eq!((g.rows(), g.cols()), (0, 0));
        assert!(g.cells().is_empty());
        assert_eq!(g.menu_at(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_menu_at_point() {
        let g = grid(800.0, 600.0);
        assert_eq!(g.menu_at(Vec2::new(30.0, 10.0)), Some(Menu::File));
        assert_eq!(g.menu_at(Vec2::new(110.0, 10.0)), Some(Menu::Edit));
        assert_eq!(g.menu_at(Vec2::new(30.0, 30.0)), None);
    }

    #[test]
    fn test_blink_lasts_duration() {
        let mut g = grid(100.0, 40.0);
        let mut always = || 0.0;
        let started = g.blink_step(0.0, &mut always);
        assert_eq!(started, g.cells().len());
        assert!(g.cells().iter().all(|c| c.shown() == '*'));

        let mut never = || 1.0;
        g.blink_step(50.0, &mut never);
        assert!(g.cells().iter().all(Cell::is_blinking));
        g.blink_step(100.0, &mut never);
        assert!(g.cells().iter().all(|c| !c.is_blinking()));
        assert_eq!(g.cell(0, 0).unwrap().shown(), '^');
    }

    #[test]
    fn test_blink_probability_threshold() {
        let mut g = grid(100.0, 40.0);
        let mut samples = [0.001, 0.5, 0.0029, 0.003].into_iter().cycle();
        let mut sampler = move || samples.next().unwrap_or(1.0);
        let started = g.blink_step(0.0, &mut sampler);
        // Cells 0, 2, 4, 6, 8 sample under 0.003
        assert_eq!(started, 5);
    }

    #[test]
    fn test_scanline_wraps() {
        let mut g = grid(100.0, 60.0);
        assert_eq!(g.rows(), 3);
        g.advance_scanline();
        g.advance_scanline();
        assert_eq!(g.scanline_row(), 2);
        g.advance_scanline();
        assert_eq!(g.scanline_row(), 0);
    }

    #[test]
    fn test_tick_schedules_effects() {
        let mut g = grid(100.0, 100.0);
        let mut never = || 1.0;
        g.tick(0.0, &mut never);
        assert_eq!(g.scanline_row(), 0);

        g.tick(250.0, &mut never);
        assert_eq!(g.scanline_row(), 2);

        g.tick(300.0, &mut never);
        assert_eq!(g.scanline_row(), 3);
    }

    #[test]
    fn test_layout_keeps_scanline_in_range() {
        let mut g = grid(100.0, 200.0);
        for _ in 0..8 {
            g.advance_scanline();
        }
        g.layout(Size::new(100.0, 100.0));
        assert!(g.scanline_row() < g.rows());
    }

    #[test]
    fn test_toggle_file_menu() {
        let mut g = grid(400.0, 200.0);
        assert!(g.toggle_file_menu());
        assert!(!g.toggle_file_menu());
    }

    #[test]
    fn test_snap() {
        let g = grid(400.0, 200.0);
        assert_eq!(g.snap(Vec2::new(67.0, 31.0)), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn test_snapshot_json() {
        let g = grid(400.0, 40.0);
        let json = serde_json::to_string(&g.snapshot()).unwrap();
        assert!(json.contains(r#""class":"menubar file""#));
        assert!(json.contains(r#""glyph":"G""#));
    }
}
