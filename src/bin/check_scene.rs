//! CLI tool for checking a scene file without the server
//!
//! Usage:
//!   cargo run --release --bin check_scene -- <scene.json> [options]
//!
//! Options:
//!   --weight <kg>     Override the explosive weight
//!   --k <factor>      Override the scaling coefficient
//!   --violations      Only report unsafe pairs
//!   --json            Print the report as JSON

use std::env;
use std::path::Path;

use standoff::cli::CheckOptions;
use standoff::consts::LOG_LEVEL_FILTER_RELEASE;
use standoff::scene::read_scene;
use standoff::server::util::init_logger;
use standoff::standoff::{evaluate_site, find_site_violations, formula_label, required_distance};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let program = args.first().map(String::as_str).unwrap_or("check_scene");

    let opts = match CheckOptions::parse(args.get(1..).unwrap_or(&[]))? {
        Some(opts) => opts,
        None => {
            eprintln!("Usage: {} <scene.json> [options]", program);
            eprintln!();
            eprintln!("Options:");
            eprintln!("  --weight <kg>     Override the explosive weight");
            eprintln!("  --k <factor>      Override the scaling coefficient K");
            eprintln!("  --violations      Only report unsafe pairs");
            eprintln!("  --json            Print the report as JSON");
            return Ok(());
        }
    };

    init_logger(LOG_LEVEL_FILTER_RELEASE, Path::new("logs/check_scene.txt"))?;

    let mut scene = read_scene(&opts.scene_path)?;
    opts.apply(&mut scene);
    scene.validate()?;

    let reports = if opts.violations_only {
        find_site_violations(&scene.buildings, scene.explosive_weight, &scene.rules)?
    } else {
        evaluate_site(&scene.buildings, scene.explosive_weight, &scene.rules)?
    };

    if opts.as_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let required = required_distance(scene.explosive_weight, &scene.rules);
    println!("{}", formula_label(&scene.rules));
    println!(
        "Explosive weight: {} kg, required distance: {:.2} units",
        scene.explosive_weight, required
    );
    println!();

    for report in &reports {
        let eval = &report.evaluation;
        let r = eval.result;
        println!("{} <-> {}: {}", report.building_a, report.building_b, r.verdict());
        println!("  Actual Distance:   {:.2} units", r.actual_distance);
        println!("  Required Distance: {:.2} units", r.required_distance);
        println!("  Safety Factor:     {:.3}", r.safety_factor);
        println!(
            "  Closest points:    ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            eval.closest_points.point1.x,
            eval.closest_points.point1.y,
            eval.closest_points.point2.x,
            eval.closest_points.point2.y
        );
    }

    let unsafe_count = reports.iter().filter(|r| !r.evaluation.result.is_safe).count();
    println!();
    println!("{} pairs reported, {} unsafe", reports.len(), unsafe_count);

    Ok(())
}
