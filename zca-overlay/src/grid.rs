use serde::Serialize;

/// Columns in the subplot grid.
pub const GRID_COLUMNS: usize = 3;

/// Subplot grid: the reference map in cell 0, region `i` in cell `i + 1`,
/// cells filled row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

impl GridLayout {
    pub fn for_regions(region_count: usize) -> GridLayout {
        let cells = region_count + 1;
        GridLayout {
            rows: cells.div_ceil(GRID_COLUMNS),
            cols: GRID_COLUMNS,
        }
    }

    /// (row, col) of a cell index.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// (row, col) of a region panel.
    pub fn panel_cell(&self, panel: usize) -> (usize, usize) {
        self.cell(panel + 1)
    }
}
