use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use warehouse_dash::dashboard::{
    MonitorDashboard, SalesSelection, ShiftSalesDashboard, TimeWindow,
};
use warehouse_dash::engine::source::JsonDirSource;
use warehouse_dash::logging;
use warehouse_dash::shared::config::CONFIG;
use warehouse_dash::shared::datetime::TimeParser;

#[derive(Parser)]
#[command(name = "warehouse_dash")]
#[command(about = "Render warehouse dashboards from JSON extracts", long_about = None)]
struct Args {
    /// Directory holding one `<relation>.json` file per query
    /// Defaults to `dashboard.data_dir` from the configuration
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sales over time, by shift, against city population and top cities
    ShiftSales {
        /// First day of the range (YYYY-MM-DD), defaults to the earliest date in the data
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,

        /// Last day of the range (YYYY-MM-DD), defaults to the latest date in the data
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,

        /// Cities to keep, repeatable; every city when omitted
        #[arg(long = "city")]
        cities: Vec<String>,
    },

    /// Account usage: credits, storage, query performance and logins
    Monitor {
        /// last-24-hours, last-7-days, last-30-days or last-90-days
        #[arg(long, default_value = "last-7-days")]
        window: TimeWindow,

        /// Reference instant for the window, defaults to the local clock
        #[arg(long)]
        now: Option<String>,
    },
}

fn print_json<T: Serialize>(view: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}

fn reference_now(now: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    match now {
        Some(text) => TimeParser::parse_str(text)
            .with_context(|| format!("cannot parse --now value '{}'", text)),
        None => Ok(Local::now().naive_local()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init()?;

    let data_dir = args
        .data_dir
        .unwrap_or_else(|| PathBuf::from(&CONFIG.dashboard.data_dir));
    let source = JsonDirSource::new(data_dir);
    info!(data_dir = %source.dir().display(), "Starting warehouse_dash");

    match args.command {
        Command::ShiftSales { from, to, cities } => {
            let mut selection = SalesSelection::all();
            if let (Some(from), Some(to)) = (from, to) {
                selection = selection.with_dates(from, to);
            }
            if !cities.is_empty() {
                selection = selection.with_cities(cities);
            }
            let view = ShiftSalesDashboard::new(&CONFIG).render(&source, &selection)?;
            print_json(&view)
        }
        Command::Monitor { window, now } => {
            let now = reference_now(now.as_deref())?;
            let view = MonitorDashboard::new(&CONFIG).render(&source, window, now)?;
            print_json(&view)
        }
    }
}
