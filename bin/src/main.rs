//! CLI for the risk-stats returns and risk statistics engine.
//!
//! Loads daily closes from a CSV file (one string `date` column plus one
//! numeric close column per instrument), runs the engine, and prints the
//! results as text tables or JSON.

use clap::{Parser, Subcommand};
use polars::prelude::*;
use risk_stats::{
    MarketDataSource, PriceSeries, RiskConfig, RiskStatistics, RollingSeries, StatisticsSink,
    align, price_series_from_frame, rolling_beta, rolling_series_to_frame, rolling_volatility,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "risk-stats")]
#[command(about = "Returns and risk statistics for an asset against a benchmark", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the point-statistics summary (mean, std dev, beta, VaR, CAPM)
    Summary {
        /// CSV file with a `date` column and one close column per instrument
        file: PathBuf,
        /// Column holding the asset closes
        #[arg(long, default_value = "asset")]
        asset: String,
        /// Column holding the benchmark closes
        #[arg(long, default_value = "market")]
        market: String,
        /// Annual risk-free rate for CAPM
        #[arg(long, default_value_t = 0.02)]
        risk_free: f64,
        /// One-sided z-score for parametric VaR
        #[arg(long, default_value_t = 1.645)]
        z_score: f64,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute rolling beta over a trailing window
    RollingBeta {
        /// CSV file with a `date` column and one close column per instrument
        file: PathBuf,
        /// Column holding the asset closes
        #[arg(long, default_value = "asset")]
        asset: String,
        /// Column holding the benchmark closes
        #[arg(long, default_value = "market")]
        market: String,
        /// Trailing window size in trading days
        #[arg(long, default_value_t = 60)]
        window: usize,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compute rolling annualized volatility over a trailing window
    RollingVolatility {
        /// CSV file with a `date` column and one close column per instrument
        file: PathBuf,
        /// Column holding the closes to analyze
        #[arg(long, default_value = "asset")]
        asset: String,
        /// Trailing window size in trading days
        #[arg(long, default_value_t = 50)]
        window: usize,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Market-data source backed by a CSV-loaded DataFrame.
///
/// Each instrument is a close column; `fetch` resolves a symbol to the
/// column of that name.
#[derive(Debug)]
struct CsvDataSource {
    frame: DataFrame,
}

impl CsvDataSource {
    fn open(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.clone()))?
            .finish()?;
        Ok(Self { frame })
    }
}

impl MarketDataSource for CsvDataSource {
    fn fetch(&self, symbol: &str) -> risk_stats::Result<PriceSeries> {
        price_series_from_frame(&self.frame, "date", symbol)
    }
}

/// Sink that prints statistics as text tables.
#[derive(Debug)]
struct TextSink;

impl StatisticsSink for TextSink {
    fn scalar(&mut self, name: &str, value: f64) -> risk_stats::Result<()> {
        println!("{name}: {value:.6}");
        Ok(())
    }

    fn series(&mut self, name: &str, series: &RollingSeries) -> risk_stats::Result<()> {
        let frame = rolling_series_to_frame(series, name)?;
        println!("{frame}");
        Ok(())
    }
}

/// Sink that collects statistics into one JSON document.
#[derive(Debug, Default)]
struct JsonSink {
    root: serde_json::Map<String, serde_json::Value>,
}

impl StatisticsSink for JsonSink {
    fn scalar(&mut self, name: &str, value: f64) -> risk_stats::Result<()> {
        self.root.insert(name.to_string(), value.into());
        Ok(())
    }

    fn series(&mut self, name: &str, series: &RollingSeries) -> risk_stats::Result<()> {
        let rows: Vec<serde_json::Value> = series
            .iter()
            .map(|(date, value)| {
                serde_json::json!({ "date": date.to_string(), "value": value })
            })
            .collect();
        self.root.insert(name.to_string(), rows.into());
        Ok(())
    }
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Summary {
            file,
            asset,
            market,
            risk_free,
            z_score,
            json,
        } => {
            let source = CsvDataSource::open(&file)?;
            let pair = align(&source.fetch(&asset)?, &source.fetch(&market)?)?;
            let config = RiskConfig {
                risk_free_rate: risk_free,
                z_score,
                ..RiskConfig::default()
            };
            let stats = RiskStatistics::compute(&pair, &config)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_summary(&asset, &stats);
            }
        }
        Commands::RollingBeta {
            file,
            asset,
            market,
            window,
            json,
        } => {
            let source = CsvDataSource::open(&file)?;
            let pair = align(&source.fetch(&asset)?, &source.fetch(&market)?)?;
            let rolled = rolling_beta(&pair, window)?;
            emit_series("rolling_beta", &rolled, json)?;
        }
        Commands::RollingVolatility {
            file,
            asset,
            window,
            json,
        } => {
            let source = CsvDataSource::open(&file)?;
            let returns = source.fetch(&asset)?.returns();
            let rolled = rolling_volatility(&returns, window, risk_stats::TRADING_DAYS_PER_YEAR)?;
            emit_series("rolling_volatility", &rolled, json)?;
        }
    }
    Ok(())
}

fn print_summary(asset: &str, stats: &RiskStatistics) {
    println!("Risk summary for '{asset}'\n");
    println!("Mean daily return:          {:.4}%", stats.mean_daily_return * 100.0);
    println!("Annualized std deviation:   {:.2}%", stats.annualized_std_dev * 100.0);
    println!("Cumulative return:          {:.2}%", stats.cumulative_return * 100.0);
    println!("Arithmetic annual return:   {:.2}%", stats.arithmetic_annual_return * 100.0);
    println!("Geometric annual return:    {:.2}%", stats.geometric_annual_return * 100.0);
    println!("Beta:                       {:.4}", stats.beta);
    println!("Sharpe ratio (annualized):  {:.2}", stats.sharpe_ratio);
    println!("Annual Value-at-Risk:       {:.2}%", stats.annual_value_at_risk * 100.0);
    println!("CAPM expected return:");
    println!("  daily:                    {:.4}%", stats.capm.daily * 100.0);
    println!("  quarterly:                {:.2}%", stats.capm.quarterly * 100.0);
    println!("  annual:                   {:.2}%", stats.capm.annual * 100.0);
}

fn emit_series(
    name: &str,
    series: &RollingSeries,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let mut sink = JsonSink::default();
        sink.series(name, series)?;
        println!("{}", serde_json::to_string_pretty(&sink.root)?);
    } else {
        let mut sink = TextSink;
        sink.series(name, series)?;
    }
    Ok(())
}
