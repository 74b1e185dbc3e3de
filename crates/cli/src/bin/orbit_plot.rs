use std::fs;
use std::path::PathBuf;

use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;

/// Render an orbit track CSV as a PNG plot of the ellipse.
#[derive(Parser, Debug)]
#[command(author, version, about = "Render an orbit track CSV to PNG")]
struct Cli {
    #[arg(long, default_value = "artifacts/track.csv")]
    input: String,
    #[arg(long, default_value = "artifacts/track.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let points = read_track(&cli.input)?;
    if points.is_empty() {
        return Err(anyhow::anyhow!("No samples in the provided CSV"));
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    // Square data range centred on the focus so the ellipse is not distorted.
    let extent = points
        .iter()
        .flat_map(|&(x, y)| [x.abs(), y.abs()])
        .fold(0.0_f64, f64::max)
        * 1.1;

    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Orbit track", caption_font)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart
        .configure_mesh()
        .x_desc("x (km, perihelion direction)")
        .y_desc("y (km)")
        .label_style(label_font.clone())
        .x_labels(6)
        .y_labels(6)
        .x_label_formatter(&|v| format!("{:.2e}", v))
        .y_label_formatter(&|v| format!("{:.2e}", v))
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        ShapeStyle::from(&RGBColor(30, 90, 200)).stroke_width(2),
    ))?;

    // Focus (Sun) at the origin, perihelion at the first sample.
    let sun_color = RGBColor(230, 160, 20);
    let marker_color = RGBColor(200, 40, 40);
    chart.draw_series(std::iter::once(Circle::new(
        (0.0, 0.0),
        6,
        ShapeStyle::from(&sun_color).filled(),
    )))?;
    let perihelion = points[0];
    chart.draw_series(std::iter::once(Circle::new(
        perihelion,
        4,
        ShapeStyle::from(&marker_color).filled(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "perihelion".to_string(),
        (perihelion.0 + extent * 0.02, perihelion.1 + extent * 0.02),
        label_font.clone().color(&marker_color),
    )))?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_track(path: &str) -> anyhow::Result<Vec<(f64, f64)>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let x_idx = headers
        .iter()
        .position(|h| h == "x_km")
        .ok_or_else(|| anyhow::anyhow!("CSV is missing the x_km column"))?;
    let y_idx = headers
        .iter()
        .position(|h| h == "y_km")
        .ok_or_else(|| anyhow::anyhow!("CSV is missing the y_km column"))?;

    let mut points = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let x: f64 = record
            .get(x_idx)
            .ok_or_else(|| anyhow::anyhow!("short CSV row"))?
            .parse()?;
        let y: f64 = record
            .get(y_idx)
            .ok_or_else(|| anyhow::anyhow!("short CSV row"))?
            .parse()?;
        points.push((x, y));
    }
    Ok(points)
}
