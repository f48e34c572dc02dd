// File: crates/demo/src/main.rs
// Summary: Loads the country dataset and renders the bubble chart for one year or a range of years to PNGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use wealth_health::{AppEvent, AppState, ChartConfig, Dataset};

/// Render the wealth & health bubble chart to PNG files.
#[derive(Parser, Debug)]
#[command(name = "wealth-health-render", version, long_about = None)]
struct Args {
    /// Country dataset (JSON array of records)
    #[arg(short, long, default_value = "data/sample-countries.json")]
    data: PathBuf,

    /// Single year to render (defaults to the last configured year)
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    year: Option<i32>,

    /// First year of a range
    #[arg(long, requires = "to")]
    from: Option<i32>,

    /// Last year of a range (inclusive)
    #[arg(long, requires = "from")]
    to: Option<i32>,

    /// Year increment inside a range
    #[arg(long, default_value_t = 1)]
    step: u32,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,

    /// Surface width in pixels (overrides config)
    #[arg(long)]
    width: Option<i32>,

    /// Surface height in pixels (overrides config)
    #[arg(long)]
    height: Option<i32>,

    /// Theme name: light or dark (overrides config)
    #[arg(long)]
    theme: Option<String>,

    /// Chart config JSON
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with extra .ttf/.otf fonts (e.g. Open Sans, Aleo)
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Also write each projected frame as JSON next to its PNG
    #[arg(long, default_value_t = false)]
    dump_json: bool,

    /// Enable verbose logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = load_config(&args)?;
    let years = selected_years(&args, &config)?;

    let mut text = bubble_core::TextShaper::new();
    if let Some(dir) = &args.font_dir {
        let n = text
            .register_font_dir(dir)
            .with_context(|| format!("loading fonts from {}", dir.display()))?;
        info!("Registered {n} font files from {}", dir.display());
    }

    let mut app = AppState::with_text(config, text);
    if args.font_dir.is_some() {
        app.handle(AppEvent::FontsLoaded);
    }

    match Dataset::load(&args.data) {
        Ok(data) => {
            info!("Using input file: {} ({} countries)", args.data.display(), data.len());
            app.handle(AppEvent::DataLoaded(data));
        }
        Err(e) => {
            app.handle(AppEvent::DataFailed(e.to_string()));
            anyhow::bail!("failed to load '{}': {e}", args.data.display());
        }
    }

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output dir {}", args.out.display()))?;

    let stem = dataset_stem(&args.data);
    for year in years {
        app.handle(AppEvent::YearInput(year));
        let frame = app.frame();
        if frame.is_empty() {
            warn!("{year}: no country has complete data; writing an empty chart");
        }

        let Some(png) = app.render_png()? else {
            anyhow::bail!("chart was not created after loading data");
        };
        let out_png = out_name_with(&args.out, &stem, year, "png");
        std::fs::write(&out_png, png).with_context(|| format!("writing {}", out_png.display()))?;
        info!("Wrote {} ({} bubbles)", out_png.display(), frame.len());

        if args.dump_json {
            let out_json = out_png.with_extension("json");
            let json = serde_json::to_string_pretty(frame)?;
            std::fs::write(&out_json, json).with_context(|| format!("writing {}", out_json.display()))?;
        }
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<ChartConfig> {
    let mut config = match &args.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("reading config {}", path.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(w) = args.width { config.width = w; }
    if let Some(h) = args.height { config.height = h; }
    if let Some(t) = &args.theme { config.theme = t.clone(); }
    config.validate()?;
    Ok(config)
}

/// Years requested on the command line, in render order.
fn selected_years(args: &Args, config: &ChartConfig) -> Result<Vec<i32>> {
    let years = match (args.year, args.from, args.to) {
        (Some(y), _, _) => vec![y],
        (None, Some(from), Some(to)) => {
            if to < from {
                anyhow::bail!("--to {to} is before --from {from}");
            }
            let step = args.step.max(1) as usize;
            (from..=to).step_by(step).collect()
        }
        _ => vec![config.end_year],
    };
    for &y in &years {
        if !config.years().contains(y) {
            warn!("{y} is outside {}..={}; its chart will be empty", config.start_year, config.end_year);
        }
    }
    Ok(years)
}

fn dataset_stem(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("chart")
        .to_string()
}

/// Produce output file name like <out>/<stem>_<year>.<ext>
fn out_name_with(out_dir: &Path, stem: &str, year: i32, ext: &str) -> PathBuf {
    out_dir.join(format!("{stem}_{year}.{ext}"))
}
