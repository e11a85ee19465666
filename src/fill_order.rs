//! Fill-order generation: given a grid, a starting corner and a scan
//! direction, number every cell the way the archiving robots walk a rack.
//!
//! The scan is a raster, not a serpentine: every line is walked in the same
//! direction, and the step to the next line is perpendicular with a sign
//! fixed by the corner.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// The two scan directions that can start from this corner. Any other
    /// pairing walks off the grid on the first line and is rejected.
    pub fn valid_directions(self) -> [Direction; 2] {
        match self {
            Self::TopLeft => [Direction::Right, Direction::Down],
            Self::TopRight => [Direction::Down, Direction::Left],
            Self::BottomRight => [Direction::Left, Direction::Up],
            Self::BottomLeft => [Direction::Right, Direction::Up],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// 0-based (row, col) of this corner in a rows×columns grid.
    fn start_cell(self, rows: u32, columns: u32) -> (u32, u32) {
        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (0, columns - 1),
            Self::BottomRight => (rows - 1, columns - 1),
            Self::BottomLeft => (rows - 1, 0),
        }
    }

    /// Sign of the perpendicular row step taken between horizontal lines.
    fn row_wrap_step(self) -> i64 {
        match self {
            Self::TopLeft | Self::TopRight => 1,
            Self::BottomRight | Self::BottomLeft => -1,
        }
    }

    /// Sign of the perpendicular column step taken between vertical lines.
    fn column_wrap_step(self) -> i64 {
        match self {
            Self::TopLeft | Self::BottomLeft => 1,
            Self::TopRight | Self::BottomRight => -1,
        }
    }
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// Primary step vector as (row delta, column delta).
    pub fn step(self) -> (i64, i64) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
            Self::Up => "up",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rack grid together with the scan convention used to number it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: u32,
    pub columns: u32,
    pub corner: Corner,
    pub direction: Direction,
}

impl GridConfig {
    pub fn new(rows: u32, columns: u32, corner: Corner, direction: Direction) -> Self {
        Self {
            rows,
            columns,
            corner,
            direction,
        }
    }

    pub fn capacity(&self) -> u32 {
        self.rows * self.columns
    }

    /// Checks dimensions and the corner/direction pairing against the
    /// adjacency table. Everything downstream assumes a validated config.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows == 0 {
            return Err(LayoutError::invalid("rows must be positive"));
        }
        if self.columns == 0 {
            return Err(LayoutError::invalid("columns must be positive"));
        }
        if self.rows.checked_mul(self.columns).is_none() {
            return Err(LayoutError::invalid(format!(
                "grid {}x{} exceeds the addressable position range",
                self.rows, self.columns
            )));
        }
        if !self.corner.valid_directions().contains(&self.direction) {
            return Err(LayoutError::invalid(format!(
                "direction {} cannot start from corner {}",
                self.direction, self.corner
            )));
        }
        Ok(())
    }
}

/// Numbers every cell of the grid by raster scan and returns, for each
/// fill-order number `k` (1-based), the 1-based slot position that receives
/// it: index `k - 1` of the result holds `row * columns + col + 1` of the
/// cell numbered `k`. The result is a permutation of `1..=rows*columns`.
pub fn compute_fill_order(config: &GridConfig) -> Result<Vec<u32>, LayoutError> {
    config.validate()?;

    let rows = i64::from(config.rows);
    let columns = i64::from(config.columns);
    let total = rows * columns;
    let (start_row, start_col) = config.corner.start_cell(config.rows, config.columns);
    let (start_row, start_col) = (i64::from(start_row), i64::from(start_col));
    let (row_step, col_step) = config.direction.step();
    let line_len = if config.direction.is_horizontal() {
        columns
    } else {
        rows
    };

    let mut order = Vec::with_capacity(total as usize);
    let mut row = start_row;
    let mut col = start_col;
    let mut run = 0i64;

    for numbered in 1..=total {
        order.push((row * columns + col + 1) as u32);
        run += 1;
        if numbered == total {
            break;
        }
        if run == line_len {
            // End of line: one perpendicular step, primary axis resets.
            run = 0;
            if config.direction.is_horizontal() {
                row += config.corner.row_wrap_step();
                col = start_col;
            } else {
                col += config.corner.column_wrap_step();
                row = start_row;
            }
        } else {
            row += row_step;
            col += col_step;
        }
    }

    Ok(order)
}

/// The same walk as [`compute_fill_order`], shaped as a rows×columns matrix:
/// cell (r, c) holds the fill-order number assigned to that cell. This is
/// the form the reorder-preview UI consumes.
pub fn fill_order_grid(config: &GridConfig) -> Result<Vec<Vec<u32>>, LayoutError> {
    let order = compute_fill_order(config)?;
    let columns = config.columns as usize;
    let mut grid = vec![vec![0u32; columns]; config.rows as usize];
    for (index, &position) in order.iter().enumerate() {
        let cell = (position - 1) as usize;
        grid[cell / columns][cell % columns] = index as u32 + 1;
    }
    Ok(grid)
}
