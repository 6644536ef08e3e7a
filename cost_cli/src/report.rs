//! Text report rendering.

use cost_core::breakdown::{category_series, split_series};
use cost_core::spec::{LocationType, ProjectSpecification, QualityLevel};
use cost_core::{AssumptionsCatalog, DetailedEstimate};

const RULE: &str = "═══════════════════════════════════════";

pub fn print_estimate(spec: &ProjectSpecification, result: &DetailedEstimate) {
    println!("{}", RULE);
    println!("  CONSTRUCTION COST ESTIMATE ({})", result.mode.name().to_uppercase());
    println!("{}", RULE);
    println!();

    println!("Input:");
    match spec {
        ProjectSpecification::Basic(basic) => {
            println!("  Plot:      {:.2} sq yd", basic.plot_size_sqyd);
            println!("  Floors:    {}", basic.floors);
            println!("  Extras:    basement={} garage={}", basic.basement, basic.garage);
        }
        ProjectSpecification::Advanced(adv) => {
            println!("  Footprint: {:.2} x {:.2} ft", adv.length_ft, adv.width_ft);
            println!("  Floors:    {}", adv.floors);
            println!(
                "  Openings:  {} doors, {} windows; {} kitchens, {} tanks, parking={}",
                adv.doors, adv.windows, adv.kitchens, adv.tanks, adv.parking
            );
            if !adv.rooms.is_empty() {
                println!("  Rooms:     {} ({:.2} sq ft listed)", adv.rooms.len(), adv.rooms_area().0);
            }
        }
    }
    println!();

    println!("Summary:");
    println!("  Total area:   {:>16.2} sq ft", result.total_area_sqft);
    println!("  Base cost:    {:>16.2}", result.base_cost);
    println!("  Total cost:   {:>16.2}", result.total_cost);
    println!("  Timeline:     {:>16} months", result.timeline_months);
    println!();

    let categories = category_series(result);
    if !categories.is_empty() {
        println!("Breakdown:");
        for point in &categories {
            println!("  {:<13} {:>16.2}", point.label, point.amount);
        }
        println!();
    }

    println!("Cost split:");
    for point in split_series(result) {
        println!("  {:<13} {:>16.2}", point.label, point.amount);
    }
    println!();

    let m = &result.materials;
    println!("Materials:");
    println!("  Bricks:       {:>12.0} pieces", m.bricks);
    println!("  Cement:       {:>12.0} bags", m.cement);
    println!("  Steel:        {:>12.2} tons", m.steel);
    println!("  Sand:         {:>12.0} cft", m.sand);
    println!("{}", RULE);
}

pub fn print_catalog(catalog: &AssumptionsCatalog) {
    println!("{}", RULE);
    println!("  EFFECTIVE CATALOG");
    println!("{}", RULE);
    for (name, value) in catalog.effective_values() {
        println!("  {:<26} {:>14}", name, value);
    }
    println!();
    println!("  Location factors:");
    for location in LocationType::ALL {
        println!("    {:<10} {:>6}", location.name(), catalog.location_factor(location));
    }
    println!("  Quality factors:");
    for quality in QualityLevel::ALL {
        println!("    {:<10} {:>6}", quality.name(), catalog.quality_factor(quality));
    }
    println!("{}", RULE);
}
