use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::Read as _;
use std::path::PathBuf;
use std::time::Instant;

use riverlabel::app::{AppState, ParseEvent};
use riverlabel::config::{FileConfig, ViewportConfig};
use riverlabel::domain::RiverPolygon;
use riverlabel::geometry::{Bounds, ViewTransform};
use riverlabel::label::{LabelPlacement, place_label};
use riverlabel::render::{SvgOptions, render_svg, write_svg};
use riverlabel::wkt::parse_polygon;

/// Render a labeled WKT river polygon to SVG
///
/// Examples:
///   # Render a polygon file with default settings
///   riverlabel danube.wkt
///
///   # Inline WKT with a custom label and font size
///   riverlabel --wkt "POLYGON((0 0, 10 0, 10 10, 0 10, 0 0))" -l "Blue River" --font-size 48
///
///   # Show the label safety box and write a placement report
///   riverlabel danube.wkt --safety-box --report danube.json
///
///   # Use a config file
///   riverlabel danube.wkt --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "riverlabel")]
#[command(version, about, long_about = None)]
struct Args {
    /// WKT polygon file, read as plain text (stdin is read when neither
    /// this nor --wkt is given)
    input: Option<PathBuf>,

    /// Inline WKT polygon text
    #[arg(long, conflicts_with = "input")]
    wkt: Option<String>,

    /// Path to config file (optional, auto-searches riverlabel.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Label text, normalized to uppercase (defaults to the input file stem)
    #[arg(short = 'l', long)]
    label: Option<String>,

    /// Label font size in screen units
    #[arg(long, default_value = "36", value_parser = clap::value_parser!(u32).range(12..=80))]
    font_size: u32,

    /// Draw the dashed label safety box overlay
    #[arg(long)]
    safety_box: bool,

    /// Viewport width in screen units
    #[arg(long, default_value = "800.0")]
    width: f64,

    /// Viewport height in screen units
    #[arg(long, default_value = "600.0")]
    height: f64,

    /// Margin reserved inside the viewport, screen units
    #[arg(long, default_value = "40.0")]
    margin: f64,

    /// Output SVG file path (defaults to {input stem}.svg or river.svg)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Write a JSON placement report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// JSON payload for --report
#[derive(Serialize)]
struct PlacementReport<'a> {
    name: &'a str,
    bounds: &'a Bounds,
    placement: &'a LabelPlacement,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let font_size = if args.font_size != 36 {
        args.font_size
    } else {
        file_config.as_ref().map(|c| c.font_size).unwrap_or(36)
    };
    let safety_box =
        args.safety_box || file_config.as_ref().map(|c| c.safety_box).unwrap_or(false);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let label_arg = args
        .label
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.label.clone()));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));

    let file_viewport = file_config
        .as_ref()
        .and_then(|c| c.viewport.clone())
        .unwrap_or_default();
    let viewport = ViewportConfig {
        width: if (args.width - 800.0).abs() > 0.01 {
            args.width
        } else {
            file_viewport.width
        },
        height: if (args.height - 600.0).abs() > 0.01 {
            args.height
        } else {
            file_viewport.height
        },
        margin: if (args.margin - 40.0).abs() > 0.01 {
            args.margin
        } else {
            file_viewport.margin
        },
    };

    println!("riverlabel - WKT River Labeler");
    println!("==============================");
    println!();

    let (input_text, provenance) = if let Some(ref path) = args.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read WKT file: {}", path.display()))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("river")
            .to_string();
        (text, name)
    } else if let Some(ref wkt) = args.wkt {
        (wkt.clone(), "pasted".to_string())
    } else {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read WKT from stdin")?;
        (text, "stdin".to_string())
    };

    let label = label_arg.unwrap_or_else(|| {
        if args.input.is_some() {
            provenance.clone()
        } else {
            "river".to_string()
        }
    });

    let output_path = output.unwrap_or_else(|| {
        if args.input.is_some() {
            PathBuf::from(format!(
                "{}.svg",
                provenance.to_lowercase().replace(' ', "_")
            ))
        } else {
            PathBuf::from("river.svg")
        }
    });

    if verbose {
        println!("Configuration:");
        println!("  Source: {}", provenance);
        println!("  Label: {}", label.to_uppercase());
        println!("  Font size: {}", font_size);
        println!(
            "  Viewport: {}x{} (margin {})",
            viewport.width, viewport.height, viewport.margin
        );
        println!(
            "  Safety box: {}",
            if safety_box { "enabled" } else { "disabled" }
        );
        println!("  Output: {}", output_path.display());
        println!();
    }

    let mut state = AppState::new();
    state.set_label_text(&label);
    state.font_size = font_size as f64;
    state.show_safety_box = safety_box;

    let spinner = create_spinner("Parsing polygon and placing label...");
    let start = Instant::now();

    let (token, _) = state.begin_parse(&input_text);
    let outcome = run_pipeline(
        &input_text,
        &provenance,
        &state.label_text,
        state.font_size,
        &viewport,
    );

    match state.finish_parse(token, outcome) {
        ParseEvent::ParseSucceeded { .. } => {
            let river = state.river().context("state lost the parsed polygon")?;
            spinner.finish_with_message(format!(
                "Placed label on {} points ({:.0} x {:.0} world units) [{:.1}s]",
                river.points.len(),
                river.bounds.width(),
                river.bounds.height(),
                start.elapsed().as_secs_f32()
            ));
        }
        ParseEvent::ParseFailed { message, .. } => {
            spinner.finish_with_message("Parse failed");
            bail!("{}", message);
        }
        other => bail!("Unexpected parse transition: {:?}", other),
    }

    let river = state.river().context("state lost the parsed polygon")?;
    let placement = state
        .placement()
        .context("state lost the label placement")?;

    let spinner = create_spinner("Rendering SVG...");
    let start = Instant::now();

    let view = ViewTransform::fit(
        &river.bounds,
        viewport.width,
        viewport.height,
        viewport.margin,
    );
    let options = SvgOptions {
        viewport_width: viewport.width,
        viewport_height: viewport.height,
        safety_box: state.show_safety_box,
    };
    let svg = render_svg(river, placement, &state.label_text, &view, &options);

    write_svg(&output_path, &svg).context("Failed to write SVG file")?;

    spinner.finish_with_message(format!(
        "Wrote {} ({:.1} KB) [{:.1}s]",
        output_path.display(),
        svg.len() as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    if let Some(ref report_path) = args.report {
        let report = PlacementReport {
            name: &river.name,
            bounds: &river.bounds,
            placement,
        };
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize placement report")?;
        std::fs::write(report_path, json)
            .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
        println!("Report: {}", report_path.display());
    }

    println!();
    print_analytics(placement);

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

/// Run the pure parse -> validate -> place pipeline
///
/// Errors come back as display strings: every failure here is a
/// user-visible message, never a crash. The caller records the message
/// and clears the previous render.
fn run_pipeline(
    input: &str,
    name: &str,
    label_text: &str,
    font_size: f64,
    viewport: &ViewportConfig,
) -> Result<(RiverPolygon, LabelPlacement), String> {
    let points = parse_polygon(input).map_err(|e| e.to_string())?;
    let river = RiverPolygon::new(name, points).map_err(|e| e.to_string())?;

    let view = ViewTransform::fit(&river.bounds, viewport.width, viewport.height, viewport.margin);
    let placement = place_label(&river, label_text, font_size, &view);

    Ok((river, placement))
}

fn print_analytics(placement: &LabelPlacement) {
    println!("Label Placement Analytics");
    println!("=========================");
    println!();
    println!("  Rotation:       {:.1} deg", placement.rotation_deg);
    println!("  Font size:      {} (fitted)", placement.font_size);
    println!("  Classification: {}", placement.kind.as_str());
    println!(
        "  Text box:       {:.0} x {:.0} screen units",
        placement.text_width, placement.text_height
    );
    println!(
        "  Contained:      {}",
        if placement.contained {
            "yes"
        } else {
            "no - label escapes the boundary"
        }
    );
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
