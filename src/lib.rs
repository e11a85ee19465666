#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod fill_order;
pub mod registry;

pub use config::{Config, FillConfig, SysmexConfig, load_config};
pub use coordinate::{Coordinate, LayoutScheme, resolve_coordinate};
pub use error::LayoutError;
pub use fill_order::{Corner, Direction, GridConfig, compute_fill_order, fill_order_grid};
pub use registry::{ZoneId, ZoneLayoutEntry, ZoneRegistry, layout_for};

#[cfg(feature = "cli")]
pub use cli::run;
