//! # Buildcost CLI
//!
//! Terminal front end for the estimation engine. Collects a project
//! specification from flags (or a JSON file), loads an optional catalog file,
//! and prints the estimate as a text report or JSON.
//!
//! ```bash
//! cost_cli basic --plot-size 120 --floors 2 --garage
//! cost_cli --catalog prices.json advanced --length 40 --width 30 --doors 6 --room 12x10xbedroom
//! RUST_LOG=cost_core=debug cost_cli estimate project.json --json
//! ```

mod logging;
mod report;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use cost_core::breakdown::{category_series, split_series};
use cost_core::spec::{FlooringType, LocationType, PaintType, PlasterType, QualityLevel, Room, RoomType};
use cost_core::{estimate, AdvancedSpec, AssumptionsCatalog, BasicSpec, ProjectSpecification};

#[derive(Parser)]
#[command(name = "cost_cli")]
#[command(about = "Buildcost - construction cost estimation from the terminal")]
struct Cli {
    /// Catalog JSON file (any subset of keys; missing keys use defaults)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate from plot size
    Basic(BasicArgs),

    /// Estimate from building dimensions and components
    Advanced(AdvancedArgs),

    /// Estimate from a project specification JSON file
    Estimate {
        /// File holding {"mode": "basic" | "advanced", ...}
        file: PathBuf,
    },

    /// Print the effective catalog values
    Catalog,
}

#[derive(Args)]
struct BasicArgs {
    /// Plot size in square yards
    #[arg(long, default_value_t = 0.0)]
    plot_size: f64,

    #[arg(long, default_value_t = 1)]
    floors: i64,

    #[arg(long, value_parser = parse_quality, default_value = "standard")]
    quality: QualityLevel,

    #[arg(long, default_value_t = 0)]
    bathrooms: i64,

    #[arg(long, default_value_t = 0)]
    bedrooms: i64,

    #[arg(long, value_parser = parse_location, default_value = "urban")]
    location: LocationType,

    /// Planned timeline in months
    #[arg(long, default_value_t = 12)]
    timeline: i64,

    #[arg(long)]
    basement: bool,

    #[arg(long)]
    garage: bool,
}

#[derive(Args)]
struct AdvancedArgs {
    /// Building length in feet
    #[arg(long, default_value_t = 0.0)]
    length: f64,

    /// Building width in feet
    #[arg(long, default_value_t = 0.0)]
    width: f64,

    #[arg(long, default_value_t = 1)]
    floors: i64,

    #[arg(long, default_value_t = 0)]
    doors: u32,

    #[arg(long, default_value_t = 0)]
    windows: u32,

    #[arg(long, default_value_t = 0)]
    kitchens: u32,

    #[arg(long, default_value_t = 0)]
    lounges: u32,

    /// Water tanks
    #[arg(long, default_value_t = 0)]
    tanks: u32,

    #[arg(long)]
    parking: bool,

    /// Full-escape house layout
    #[arg(long)]
    full_escape: bool,

    /// standard, premium, marble or wooden
    #[arg(long, value_parser = parse_flooring, default_value = "standard")]
    flooring: FlooringType,

    /// standard, premium or luxury
    #[arg(long, value_parser = parse_paint, default_value = "standard")]
    paint: PaintType,

    /// standard or premium
    #[arg(long, value_parser = parse_plaster, default_value = "standard")]
    plaster: PlasterType,

    /// Crew size
    #[arg(long, default_value_t = 1)]
    labor_count: i64,

    /// Room as LENGTHxWIDTHxTYPE, e.g. 12x10xbedroom (repeatable)
    #[arg(long = "room", value_parser = parse_room)]
    rooms: Vec<Room>,
}

impl From<BasicArgs> for BasicSpec {
    fn from(args: BasicArgs) -> Self {
        let mut spec = BasicSpec::new(args.plot_size);
        spec.set_floors(args.floors);
        spec.set_bathrooms(args.bathrooms);
        spec.set_bedrooms(args.bedrooms);
        spec.set_timeline(args.timeline);
        spec.quality = args.quality;
        spec.location_type = args.location;
        spec.basement = args.basement;
        spec.garage = args.garage;
        spec
    }
}

impl From<AdvancedArgs> for AdvancedSpec {
    fn from(args: AdvancedArgs) -> Self {
        let mut spec = AdvancedSpec::new(args.length, args.width);
        spec.set_floors(args.floors);
        spec.set_labor_count(args.labor_count);
        spec.doors = args.doors;
        spec.windows = args.windows;
        spec.kitchens = args.kitchens;
        spec.lounges = args.lounges;
        spec.tanks = args.tanks;
        spec.parking = args.parking;
        spec.is_full_escape = args.full_escape;
        spec.flooring_type = args.flooring;
        spec.paint_type = args.paint;
        spec.plaster_type = args.plaster;
        spec.rooms = args.rooms;
        spec
    }
}

fn parse_quality(value: &str) -> Result<QualityLevel, String> {
    QualityLevel::from_name(&value.to_lowercase())
        .ok_or_else(|| format!("unknown quality '{}' (standard, premium, luxury)", value))
}

fn parse_location(value: &str) -> Result<LocationType, String> {
    LocationType::from_name(&value.to_lowercase())
        .ok_or_else(|| format!("unknown location '{}' (urban, suburban, rural)", value))
}

fn parse_flooring(value: &str) -> Result<FlooringType, String> {
    match value.to_lowercase().as_str() {
        "standard" => Ok(FlooringType::Standard),
        "premium" => Ok(FlooringType::Premium),
        "marble" => Ok(FlooringType::Marble),
        "wooden" => Ok(FlooringType::Wooden),
        _ => Err(format!("unknown flooring '{}' (standard, premium, marble, wooden)", value)),
    }
}

fn parse_paint(value: &str) -> Result<PaintType, String> {
    match value.to_lowercase().as_str() {
        "standard" => Ok(PaintType::Standard),
        "premium" => Ok(PaintType::Premium),
        "luxury" => Ok(PaintType::Luxury),
        _ => Err(format!("unknown paint '{}' (standard, premium, luxury)", value)),
    }
}

fn parse_plaster(value: &str) -> Result<PlasterType, String> {
    match value.to_lowercase().as_str() {
        "standard" => Ok(PlasterType::Standard),
        "premium" => Ok(PlasterType::Premium),
        _ => Err(format!("unknown plaster '{}' (standard, premium)", value)),
    }
}

fn parse_room(value: &str) -> Result<Room, String> {
    let parts: Vec<&str> = value.split('x').collect();
    let [length, width, kind] = parts.as_slice() else {
        return Err(format!("expected LENGTHxWIDTHxTYPE, got '{}'", value));
    };
    let length: f64 = length.trim().parse().map_err(|_| format!("bad room length '{}'", length))?;
    let width: f64 = width.trim().parse().map_err(|_| format!("bad room width '{}'", width))?;
    let room_type = match kind.trim().to_lowercase().as_str() {
        "bedroom" => RoomType::Bedroom,
        "bathroom" => RoomType::Bathroom,
        "study" => RoomType::Study,
        _ => RoomType::Other,
    };
    Ok(Room::new(length, width, room_type))
}

fn load_catalog(path: Option<&Path>) -> Result<AssumptionsCatalog> {
    let Some(path) = path else {
        return Ok(AssumptionsCatalog::new());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog = AssumptionsCatalog::from_json(&text).with_context(|| format!("parsing catalog {}", path.display()))?;
    info!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn load_spec(path: &Path) -> Result<ProjectSpecification> {
    let text = fs::read_to_string(path).with_context(|| format!("reading spec {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing spec {}", path.display()))
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    let spec = match cli.command {
        Commands::Basic(args) => ProjectSpecification::Basic(args.into()),
        Commands::Advanced(args) => ProjectSpecification::Advanced(args.into()),
        Commands::Estimate { file } => load_spec(&file)?,
        Commands::Catalog => {
            if cli.json {
                println!("{}", catalog.resolved().to_json()?);
            } else {
                report::print_catalog(&catalog);
            }
            return Ok(());
        }
    };

    let result = match estimate(&spec, &catalog) {
        Ok(result) => result,
        Err(err) => {
            if cli.json {
                eprintln!("{}", serde_json::to_string_pretty(&err)?);
            }
            bail!("estimate failed: {}", err);
        }
    };

    if cli.json {
        let output = serde_json::json!({
            "estimate": result,
            "categories": category_series(&result),
            "split": split_series(&result),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report::print_estimate(&spec, &result);
    }

    Ok(())
}
