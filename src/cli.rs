use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::load_config;
use crate::coordinate::{Coordinate, LayoutScheme, resolve_coordinate};
use crate::fill_order::{Corner, Direction, GridConfig, compute_fill_order, fill_order_grid};
use crate::registry::{ZoneId, ZoneRegistry};

#[derive(Parser, Debug)]
#[command(name = "rackl", version, about = "Rack fill-order and coordinate tools")]
pub struct Args {
    /// Config JSON file (Sysmex dimensions, default fill convention)
    #[arg(short = 'c', long = "configFile", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the order in which grid cells receive sequential slot numbers
    FillOrder {
        #[arg(short = 'r', long)]
        rows: u32,

        #[arg(short = 'C', long)]
        columns: u32,

        /// Starting corner; defaults to the configured fill convention
        #[arg(long, value_enum)]
        corner: Option<CornerArg>,

        /// Scan direction; defaults to the configured fill convention
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,

        /// Print the rows x columns matrix of fill numbers instead of the
        /// position list
        #[arg(long)]
        grid: bool,
    },

    /// Resolve a slot position to its display coordinate
    Locate {
        #[arg(short = 'p', long)]
        position: u32,

        /// Zone id to take the layout from
        #[arg(short = 'z', long, conflicts_with_all = ["scheme", "rows", "columns"])]
        zone: Option<u16>,

        /// Explicit scheme (requires --rows and --columns)
        #[arg(short = 's', long, value_enum, requires = "rows", requires = "columns")]
        scheme: Option<SchemeArg>,

        #[arg(short = 'r', long)]
        rows: Option<u32>,

        #[arg(short = 'C', long)]
        columns: Option<u32>,
    },

    /// List the zone layout table
    Zones,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CornerArg {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl From<CornerArg> for Corner {
    fn from(arg: CornerArg) -> Self {
        match arg {
            CornerArg::TopLeft => Corner::TopLeft,
            CornerArg::TopRight => Corner::TopRight,
            CornerArg::BottomRight => Corner::BottomRight,
            CornerArg::BottomLeft => Corner::BottomLeft,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DirectionArg {
    Right,
    Down,
    Left,
    Up,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Right => Direction::Right,
            DirectionArg::Down => Direction::Down,
            DirectionArg::Left => Direction::Left,
            DirectionArg::Up => Direction::Up,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SchemeArg {
    RowMajor,
    ColumnMajorReversed,
    ReversedChunk,
}

impl SchemeArg {
    fn build(self, rows: u32, columns: u32) -> LayoutScheme {
        match self {
            Self::RowMajor => LayoutScheme::RowMajor { rows, columns },
            Self::ColumnMajorReversed => LayoutScheme::ColumnMajorReversed { rows, columns },
            Self::ReversedChunk => LayoutScheme::ReversedChunk { rows, columns },
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::FillOrder {
            rows,
            columns,
            corner,
            direction,
            grid,
        } => {
            let grid_config = GridConfig::new(
                rows,
                columns,
                corner.map(Corner::from).unwrap_or(config.fill.corner),
                direction
                    .map(Direction::from)
                    .unwrap_or(config.fill.direction),
            );
            if grid {
                let matrix = fill_order_grid(&grid_config)?;
                match args.format {
                    OutputFormat::Text => {
                        for row in &matrix {
                            let line: Vec<String> =
                                row.iter().map(|n| format!("{n:>4}")).collect();
                            println!("{}", line.join(" "));
                        }
                    }
                    OutputFormat::Json => println!("{}", serde_json::to_string(&matrix)?),
                }
            } else {
                let order = compute_fill_order(&grid_config)?;
                match args.format {
                    OutputFormat::Text => {
                        let line: Vec<String> = order.iter().map(u32::to_string).collect();
                        println!("{}", line.join(" "));
                    }
                    OutputFormat::Json => println!("{}", serde_json::to_string(&order)?),
                }
            }
        }

        Command::Locate {
            position,
            zone,
            scheme,
            rows,
            columns,
        } => {
            let coordinate = match (zone, scheme) {
                (Some(id), None) => {
                    let registry = ZoneRegistry::from_config(&config);
                    registry.get(ZoneId(id))?.resolve(position)?
                }
                (None, Some(scheme)) => {
                    // clap guarantees rows/columns are present with --scheme.
                    let scheme = scheme.build(rows.unwrap_or(0), columns.unwrap_or(0));
                    resolve_coordinate(position, &scheme)?
                }
                _ => {
                    return Err(anyhow::anyhow!(
                        "locate needs either --zone or --scheme with --rows/--columns"
                    ));
                }
            };
            print_coordinate(coordinate, args.format)?;
        }

        Command::Zones => {
            let registry = ZoneRegistry::from_config(&config);
            match args.format {
                OutputFormat::Text => {
                    for entry in registry.entries() {
                        println!(
                            "{:>4}  {:<30} {:>2} racks  {}",
                            entry.zone_id, entry.name, entry.racks, entry.scheme
                        );
                    }
                }
                OutputFormat::Json => {
                    let entries: Vec<_> = registry.entries().collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
            }
        }
    }

    Ok(())
}

fn print_coordinate(coordinate: Coordinate, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("row {}, column {}", coordinate.row, coordinate.column),
        OutputFormat::Json => println!("{}", serde_json::to_string(&coordinate)?),
    }
    Ok(())
}
