//! The zone layout table: one entry per rack type, built once at process
//! start, read-only afterwards. This is the single source of truth for
//! (rows, columns, scheme) per zone; nothing else in the crate hard-codes
//! rack dimensions.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::coordinate::{Coordinate, LayoutScheme, resolve_coordinate};
use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub u16);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u16> for ZoneId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

/// Immutable layout parameters for one zone. `racks` is the number of
/// physical racks sharing the zone's linear position space; each rack holds
/// `rows * columns` slots.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneLayoutEntry {
    pub zone_id: ZoneId,
    pub name: &'static str,
    pub rows: u32,
    pub columns: u32,
    pub racks: u32,
    pub scheme: LayoutScheme,
}

impl ZoneLayoutEntry {
    /// Slots per physical rack. Saturates for dimensions the position range
    /// cannot address; [`Self::resolve`] rejects such entries.
    pub fn capacity(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }

    /// 1-based inclusive position range served by physical rack `rack`
    /// (1-based): rack 1 of a 50-slot grid spans 1..=50, rack 2 spans
    /// 51..=100, and so on.
    pub fn rack_span(&self, rack: u32) -> Result<RangeInclusive<u32>, LayoutError> {
        if rack == 0 || rack > self.racks {
            return Err(LayoutError::OutOfRange {
                value: rack,
                max: self.racks,
            });
        }
        let capacity = self.capacity();
        let start = (rack - 1) * capacity + 1;
        Ok(start..=rack * capacity)
    }

    /// Display coordinate of a slot position under this zone's scheme.
    pub fn resolve(&self, position: u32) -> Result<Coordinate, LayoutError> {
        resolve_coordinate(position, &self.scheme)
    }
}

/// The full zone table. `builtin()` is what ships; `from_config` applies
/// deployment overrides (currently the Sysmex dimensions).
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    entries: BTreeMap<ZoneId, ZoneLayoutEntry>,
}

enum SchemeKind {
    RowMajor,
    ColumnMajorReversed,
    ReversedChunk,
}

impl SchemeKind {
    fn build(&self, rows: u32, columns: u32) -> LayoutScheme {
        match self {
            Self::RowMajor => LayoutScheme::RowMajor { rows, columns },
            Self::ColumnMajorReversed => LayoutScheme::ColumnMajorReversed { rows, columns },
            Self::ReversedChunk => LayoutScheme::ReversedChunk { rows, columns },
        }
    }
}

impl ZoneRegistry {
    /// The shipped table with default Sysmex dimensions.
    pub fn builtin() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        use SchemeKind::*;

        let sysmex_rows = config.sysmex.rows;
        let sysmex_columns = config.sysmex.columns;
        let table: [(u16, &'static str, u32, u32, u32, SchemeKind); 10] = [
            (15, "Dimension Exchange Archive", 5, 10, 1, ColumnMajorReversed),
            (16, "Coagulation Archive Exchange", 10, 10, 1, ReversedChunk),
            (17, "Sysmex Archive", sysmex_rows, sysmex_columns, 1, RowMajor),
            (20, "Transport Archive", 10, 5, 3, ReversedChunk),
            (111, "Ortho Archive", 10, 5, 3, ReversedChunk),
            (112, "CS/CA Archive", 10, 5, 3, ReversedChunk),
            (113, "Dimension Archive 1", 10, 5, 3, ReversedChunk),
            (114, "Dimension Archive 2", 10, 5, 3, ReversedChunk),
            (115, "Dimension Archive 3", 10, 5, 3, ReversedChunk),
            (116, "Dimension Archive 4", 10, 5, 3, ReversedChunk),
        ];

        let mut entries = BTreeMap::new();
        for (id, name, rows, columns, racks, kind) in table {
            let zone_id = ZoneId(id);
            entries.insert(
                zone_id,
                ZoneLayoutEntry {
                    zone_id,
                    name,
                    rows,
                    columns,
                    racks,
                    scheme: kind.build(rows, columns),
                },
            );
        }
        Self { entries }
    }

    pub fn get(&self, zone_id: ZoneId) -> Result<&ZoneLayoutEntry, LayoutError> {
        self.entries
            .get(&zone_id)
            .ok_or(LayoutError::UnknownZone(zone_id))
    }

    pub fn entries(&self) -> impl Iterator<Item = &ZoneLayoutEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static BUILTIN: Lazy<ZoneRegistry> = Lazy::new(ZoneRegistry::builtin);

/// Looks up the shipped table. Deployments with config overrides should
/// build a [`ZoneRegistry::from_config`] instead.
pub fn layout_for(zone_id: ZoneId) -> Result<&'static ZoneLayoutEntry, LayoutError> {
    BUILTIN.get(zone_id)
}
