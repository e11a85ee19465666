//! Coordinate resolution: mapping a raw 1-based slot position to the
//! (row, column) a rack convention displays it at. Each scheme is a closed
//! form over the zero-based index, no iteration.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// A fixed display convention for one rack type. Every variant carries the
/// full grid dimensions so positions can be bounds-checked against
/// `rows * columns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "kebab-case")]
pub enum LayoutScheme {
    /// Left-to-right, top-to-bottom: 1..=columns on the first row.
    RowMajor { rows: u32, columns: u32 },
    /// Consecutive positions fill down a column before moving right.
    ColumnMajorReversed { rows: u32, columns: u32 },
    /// Groups of `columns` consecutive positions, drawn with the
    /// highest-numbered group at the top.
    ReversedChunk { rows: u32, columns: u32 },
}

impl LayoutScheme {
    pub fn rows(&self) -> u32 {
        match *self {
            Self::RowMajor { rows, .. }
            | Self::ColumnMajorReversed { rows, .. }
            | Self::ReversedChunk { rows, .. } => rows,
        }
    }

    pub fn columns(&self) -> u32 {
        match *self {
            Self::RowMajor { columns, .. }
            | Self::ColumnMajorReversed { columns, .. }
            | Self::ReversedChunk { columns, .. } => columns,
        }
    }

    /// Number of slots the scheme addresses, saturating for dimensions the
    /// position range cannot address. [`resolve_coordinate`] rejects such
    /// schemes outright.
    pub fn capacity(&self) -> u32 {
        self.rows().saturating_mul(self.columns())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::RowMajor { .. } => "row-major",
            Self::ColumnMajorReversed { .. } => "column-major-reversed",
            Self::ReversedChunk { .. } => "reversed-chunk",
        }
    }
}

impl std::fmt::Display for LayoutScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}x{}", self.kind(), self.rows(), self.columns())
    }
}

/// 1-based display cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u32,
    pub column: u32,
}

/// Resolves a 1-based slot position to its display coordinate under the
/// given scheme. Positions outside `1..=capacity` fail with `OutOfRange`.
pub fn resolve_coordinate(
    position: u32,
    scheme: &LayoutScheme,
) -> Result<Coordinate, LayoutError> {
    let Some(capacity) = scheme.rows().checked_mul(scheme.columns()) else {
        return Err(LayoutError::invalid(format!(
            "grid {}x{} exceeds the addressable position range",
            scheme.rows(),
            scheme.columns()
        )));
    };
    if position == 0 || position > capacity {
        return Err(LayoutError::OutOfRange {
            value: position,
            max: capacity,
        });
    }
    let i = position - 1;
    let coordinate = match *scheme {
        LayoutScheme::RowMajor { columns, .. } => Coordinate {
            row: i / columns + 1,
            column: i % columns + 1,
        },
        LayoutScheme::ColumnMajorReversed { rows, .. } => Coordinate {
            row: i % rows + 1,
            column: i / rows + 1,
        },
        LayoutScheme::ReversedChunk { rows, columns } => {
            // Chunk k of `columns` slots is drawn on row rows-k, so the
            // highest-numbered chunk lands on row 1.
            let chunk = i / columns;
            Coordinate {
                row: rows - chunk,
                column: i % columns + 1,
            }
        }
    };
    Ok(coordinate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_wraps_at_column_count() {
        let scheme = LayoutScheme::RowMajor {
            rows: 10,
            columns: 15,
        };
        assert_eq!(
            resolve_coordinate(16, &scheme).unwrap(),
            Coordinate { row: 2, column: 1 }
        );
        assert_eq!(
            resolve_coordinate(15, &scheme).unwrap(),
            Coordinate { row: 1, column: 15 }
        );
    }

    #[test]
    fn column_major_fills_down_first() {
        let scheme = LayoutScheme::ColumnMajorReversed {
            rows: 5,
            columns: 10,
        };
        assert_eq!(
            resolve_coordinate(6, &scheme).unwrap(),
            Coordinate { row: 1, column: 2 }
        );
        assert_eq!(
            resolve_coordinate(5, &scheme).unwrap(),
            Coordinate { row: 5, column: 1 }
        );
    }

    #[test]
    fn reversed_chunk_draws_last_group_on_top() {
        let scheme = LayoutScheme::ReversedChunk {
            rows: 10,
            columns: 10,
        };
        assert_eq!(
            resolve_coordinate(91, &scheme).unwrap(),
            Coordinate { row: 1, column: 1 }
        );
        assert_eq!(
            resolve_coordinate(1, &scheme).unwrap(),
            Coordinate { row: 10, column: 1 }
        );
        assert_eq!(
            resolve_coordinate(100, &scheme).unwrap(),
            Coordinate { row: 1, column: 10 }
        );
    }

    #[test]
    fn reversed_chunk_five_wide_archive_rack() {
        // The standard 10x5 archive rack draws positions 46..=50 on the
        // top row.
        let scheme = LayoutScheme::ReversedChunk {
            rows: 10,
            columns: 5,
        };
        assert_eq!(
            resolve_coordinate(46, &scheme).unwrap(),
            Coordinate { row: 1, column: 1 }
        );
        assert_eq!(
            resolve_coordinate(3, &scheme).unwrap(),
            Coordinate { row: 10, column: 3 }
        );
    }

    #[test]
    fn positions_outside_capacity_are_rejected() {
        let schemes = [
            LayoutScheme::RowMajor {
                rows: 10,
                columns: 15,
            },
            LayoutScheme::ColumnMajorReversed {
                rows: 5,
                columns: 10,
            },
            LayoutScheme::ReversedChunk {
                rows: 10,
                columns: 10,
            },
        ];
        for scheme in schemes {
            let over = scheme.capacity() + 1;
            assert_eq!(
                resolve_coordinate(0, &scheme),
                Err(LayoutError::OutOfRange {
                    value: 0,
                    max: scheme.capacity()
                })
            );
            assert!(matches!(
                resolve_coordinate(over, &scheme),
                Err(LayoutError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn oversized_schemes_are_rejected_not_wrapped() {
        // 70000 * 70000 overflows u32; the resolver must refuse the scheme
        // instead of computing bounds with a wrapped capacity.
        let schemes = [
            LayoutScheme::RowMajor {
                rows: 70_000,
                columns: 70_000,
            },
            LayoutScheme::ColumnMajorReversed {
                rows: u32::MAX,
                columns: 2,
            },
            LayoutScheme::ReversedChunk {
                rows: 2,
                columns: u32::MAX,
            },
        ];
        for scheme in schemes {
            assert!(matches!(
                resolve_coordinate(1, &scheme),
                Err(LayoutError::InvalidConfiguration { .. })
            ));
            assert_eq!(scheme.capacity(), u32::MAX, "capacity should saturate");
        }
    }

    #[test]
    fn all_coordinates_stay_in_domain() {
        let schemes = [
            LayoutScheme::RowMajor {
                rows: 7,
                columns: 3,
            },
            LayoutScheme::ColumnMajorReversed {
                rows: 7,
                columns: 3,
            },
            LayoutScheme::ReversedChunk {
                rows: 7,
                columns: 3,
            },
        ];
        for scheme in schemes {
            for position in 1..=scheme.capacity() {
                let c = resolve_coordinate(position, &scheme).unwrap();
                assert!(
                    (1..=scheme.rows()).contains(&c.row),
                    "{scheme}: row {} out of domain for position {position}",
                    c.row
                );
                assert!(
                    (1..=scheme.columns()).contains(&c.column),
                    "{scheme}: column {} out of domain for position {position}",
                    c.column
                );
            }
        }
    }
}
