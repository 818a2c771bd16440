//! # Introduction
//!
//! The state schema of a sorting visualizer, and the catalog of the fourteen algorithms it can
//! animate.
//!
//! The crate only describes state. A driver that actually sorts and animates owns a
//! [`VisualizationSession`], updates it while it runs, and asks [`Validate`] whether it still
//! holds together.
//!
//! # Example
//!
//! ```
//! use orst_schema::{SortingAlgorithm, Validate, VisualizationSession};
//!
//! let mut session = VisualizationSession::default();
//! session.primary.stats.start(0.0);
//! session.primary.stats.record_comparison();
//! assert!(session.validate().is_ok());
//!
//! let quick: SortingAlgorithm = "quick".parse().unwrap();
//! assert_eq!(quick.info().space_complexity, "O(log n)");
//! ```

pub mod catalog;
pub mod error;

mod bar;
mod outcome;
mod session;
mod stats;
mod validate;

pub use bar::ArrayBar;
pub use catalog::{AlgorithmInfo, CatalogEntry, SortingAlgorithm};
pub use error::{Error, Result};
pub use outcome::{ComparisonOutcome, RunSlot};
pub use session::{
    SessionConfig, SubSession, Theme, ViewMode, VisualizationSession, MAX_BAR_VALUE,
    MIN_BAR_VALUE,
};
pub use stats::RunStatistics;
pub use validate::Validate;

use anyhow::Context;
use clap::Args;
use colored::Colorize;
use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Print the algorithm catalog. Install the `orst` crate and run `orst catalog --help` to see
/// what options are available
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only show this algorithm
    #[arg(short, long, value_enum)]
    algorithm: Option<SortingAlgorithm>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl CatalogArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let algorithms: Vec<SortingAlgorithm> = match self.algorithm {
            Some(algo) => vec![algo],
            None => SortingAlgorithm::ALL.to_vec(),
        };

        if self.json {
            let entries: Vec<CatalogEntry> =
                algorithms.into_iter().map(CatalogEntry::from).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            catalog::print_catalog(algorithms);
        }

        Ok(())
    }
}

/// Create a fresh session and print it as JSON.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Show one algorithm or race two against each other
    #[arg(short, long, value_enum, default_value_t = ViewMode::Single)]
    mode: ViewMode,

    #[arg(short, long, value_enum, default_value_t = SortingAlgorithm::Bubble)]
    primary: SortingAlgorithm,

    #[arg(short, long, value_enum, default_value_t = SortingAlgorithm::Quick)]
    secondary: SortingAlgorithm,

    /// Number of bars
    #[arg(long, default_value_t = 50)]
    size: usize,

    /// Animation speed
    #[arg(long, default_value_t = 50.0)]
    speed: f64,

    #[arg(short, long, value_enum, default_value_t = Theme::Dark)]
    theme: Theme,

    /// Write the session here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SessionArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let session = VisualizationSession::new(SessionConfig {
            view_mode: self.mode,
            primary: self.primary,
            secondary: self.secondary,
            speed: self.speed,
            array_size: self.size,
            theme: self.theme,
        });
        session.validate()?;

        match self.output {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Unable to create {}", path.display()))?;
                let mut buf_writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut buf_writer, &session)?;
                writeln!(buf_writer)?;
                buf_writer.flush()?;

                print_info("Session written to", Some(path.display()));
            }
            None => println!("{}", serde_json::to_string_pretty(&session)?),
        }

        Ok(())
    }
}

/// Check a session JSON file against the schema.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Session file to check
    #[arg(short, long)]
    file: PathBuf,
}

impl ValidateArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let bytes = std::fs::read(&self.file)
            .with_context(|| format!("Unable to read {}", self.file.display()))?;
        let session: VisualizationSession = serde_json::from_slice(&bytes)
            .with_context(|| format!("{} is not a session", self.file.display()))?;

        session
            .validate()
            .with_context(|| format!("{} breaks the schema", self.file.display()))?;

        println!(
            "\"{}\" {}",
            self.file.display().to_string().magenta().bold().underline(),
            "is valid".green().bold()
        );
        print_info("View mode", Some(format!("{:?}", session.view_mode)));
        print_info("Primary", Some(session.primary.algorithm.name()));
        if session.view_mode == ViewMode::Compare {
            print_info("Secondary", Some(session.secondary.algorithm.name()));
        }
        print_info("Bars", Some(session.array_size));
        print_info(
            "Winner",
            session
                .comparison_result
                .as_ref()
                .map(|outcome| session.sub_session(outcome.winner).algorithm.name()),
        );

        Ok(())
    }
}

fn print_info<T: Display>(header: &str, value: Option<T>) {
    if let Some(value) = value {
        println!(
            "{} {header}: {}",
            "==>".green().bold(),
            value.to_string().bold().cyan()
        );
    } else {
        println!(
            "{} {header}: {}",
            "==>".green().bold(),
            "__not present__".italic().dimmed()
        );
    }
}
