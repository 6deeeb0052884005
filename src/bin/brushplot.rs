use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn};

use brushplot::config::PageConfig;
use brushplot::input::{load_records, parse_brush};
use brushplot::plotting::prelude::*;
use brushplot::plotting::scale::Scale;

#[derive(Parser)]
#[command(name = "brushplot")]
#[command(
    about = "Interactive SVG scatter plots",
    long_about = "Renders scatter plots that share legend toggles and brush selection across every chart on a page."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render every chart of a page to SVG, optionally replaying interactions
    Render {
        /// JSON file holding an array of record objects.
        #[arg(long, required = true)]
        data: String,
        /// Page configuration JSON file (charts, selection list fields).
        #[arg(long, required = true)]
        config: String,
        /// Prefix for output files (e.g., "out/cars"). Writes <prefix>.<mount>.svg and <prefix>.selection.json.
        #[arg(long, required = true)]
        out_prefix: String,
        /// Categories to hide, as if their legend swatch was clicked (comma-separated).
        #[arg(long, value_delimiter = ',')]
        hide: Option<Vec<String>>,
        /// Brush gesture in pixel coordinates: x0,y0,x1,y1.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        brush: Option<Vec<f64>>,
        /// Chart (by position in the config) that receives the brush gesture.
        #[arg(long, default_value_t = 0)]
        brush_chart: usize,
        /// Force overwrite of existing output files.
        #[arg(short, long)]
        force: bool,
    },
    /// Log the scales each chart would be drawn with
    Inspect {
        /// JSON file holding an array of record objects.
        #[arg(long, required = true)]
        data: String,
        /// Page configuration JSON file.
        #[arg(long, required = true)]
        config: String,
    },
}

// Helper to check output paths and create directories
fn check_output_paths(prefix: &str, suffixes: &[String], force: bool) -> Result<()> {
    let path = Path::new(prefix);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        info!("Creating output directory: {:?}", parent);
        std::fs::create_dir_all(parent)?;
    }

    if !force {
        for suffix in suffixes {
            let p = format!("{}{}", prefix, suffix);
            if Path::new(&p).exists() {
                bail!("Output file {} already exists. Use --force to overwrite.", p);
            }
        }
    }

    Ok(())
}

fn load_config(config: &str) -> Result<PageConfig> {
    let page_config = PageConfig::load(config)
        .with_context(|| format!("Error loading page config {}", config))?;
    page_config.validate()?;
    Ok(page_config)
}

fn load_page(data: &str, page_config: &PageConfig) -> Result<Page> {
    let records: Rc<[Record]> = load_records(data)?.into();

    let mut page = Page::default();
    for options in &page_config.charts {
        let mount = options.mount.clone();
        page.add_chart(
            options.clone(),
            Rc::clone(&records),
            Some(page_config.selection.formatter()),
        )
        .with_context(|| format!("Building chart '{}'", mount))?;
    }
    Ok(page)
}

fn render(
    data: &str,
    config: &str,
    out_prefix: &str,
    hide: &[String],
    brush: Option<&[f64]>,
    brush_chart: usize,
    force: bool,
) -> Result<()> {
    let page_config = load_config(config)?;
    let mut suffixes: Vec<String> = page_config
        .charts
        .iter()
        .map(|c| format!(".{}.svg", c.mount))
        .collect();
    suffixes.push(".selection.json".to_string());
    check_output_paths(out_prefix, &suffixes, force)?;

    let mut page = load_page(data, &page_config)?;

    for category in hide {
        if !page.registry().is_category_visible(category) {
            warn!("Category '{}' listed twice in --hide", category);
            continue;
        }
        let row = page.charts().iter().find_map(|chart| {
            let entries = chart.legend().entries();
            entries
                .iter()
                .position(|e| e == category)
                .map(|i| (chart, i))
        });
        match row {
            Some((chart, i)) => {
                chart.toggle_legend_entry(i);
            }
            None => warn!("Category '{}' is not in any legend", category),
        }
    }

    if let Some(values) = brush {
        let [(x0, y0), (x1, y1)] = parse_brush(values)?;
        let chart = page.chart_mut(brush_chart)?;
        if chart.pointer_down(x0, y0).is_none() {
            warn!("Brush start ({}, {}) is outside the plot area", x0, y0);
        }
        chart.pointer_move(x1, y1);
        match chart.pointer_up(x1, y1) {
            Some(SelectionOutcome::Selected(indices)) => {
                info!("Brush selected {} records", indices.len())
            }
            Some(SelectionOutcome::Empty) => info!("{}", NO_SELECTION_MESSAGE),
            Some(SelectionOutcome::Cleared) => info!("Brush cleared the selection"),
            None => {}
        }
    }

    page.save(out_prefix)?;
    page.save_selection(format!("{}.selection.json", out_prefix))?;
    for line in page.registry().selection_list() {
        info!("  {}", line);
    }
    Ok(())
}

fn inspect(data: &str, config: &str) -> Result<()> {
    let page = load_page(data, &load_config(config)?)?;
    for chart in page.charts() {
        let scales = chart.scales();
        let options = chart.options();
        info!("Chart '{}' ({})", options.mount, chart.id());
        info!("  x '{}': domain {:?}", options.columns.x, scales.x.domain());
        info!("  y '{}': domain {:?}", options.columns.y, scales.y.domain());
        info!("  r '{}': domain {:?}", options.columns.r, scales.r.domain());
        let categories: Vec<&str> = scales.color.domain().iter().collect();
        info!("  color '{}': {:?}", options.columns.color, categories);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        };
        match file {
            Ok(file) => {
                log_builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Could not open log file '{}': {}", path, e);
                std::process::exit(1);
            }
        }
    }
    log_builder.init();

    let result = match &cli.command {
        Commands::Render {
            data,
            config,
            out_prefix,
            hide,
            brush,
            brush_chart,
            force,
        } => render(
            data,
            config,
            out_prefix,
            hide.as_deref().unwrap_or_default(),
            brush.as_deref(),
            *brush_chart,
            *force,
        ),
        Commands::Inspect { data, config } => inspect(data, config),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
