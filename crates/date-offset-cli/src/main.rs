//! dateoffset: add or subtract days, weeks, or months from today.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use date_offset::{
    calculate_with_options, parse_date, quick_pick_table, today_in_timezone, Amount,
    CalculatorOptions, Direction, MonthOverflow, ResultText, Selection, Unit,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Date calculator: what date is N days, weeks, or months before or after today?
#[derive(Parser)]
#[command(name = "dateoffset")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # 3 weeks from today
    dateoffset calc 3

    # 10 days before today
    dateoffset calc 10 --unit days --direction before

    # Only the date, ready for a clipboard tool
    dateoffset calc 1 -u month --date-only | pbcopy

    # Every amount from 1 to 20, counted in days from a fixed date
    dateoffset table -u days --today 2025-06-02")]
struct Cli {
    /// Log computation details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the date for one amount
    Calc {
        /// Number of units. Empty, zero, or non-numeric prints nothing.
        #[arg(allow_negative_numbers = true)]
        amount: Option<String>,

        #[command(flatten)]
        date: DateArgs,

        /// Print only the date line (what "copy" would copy)
        #[arg(long, conflicts_with = "json")]
        date_only: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the date for every quick-pick amount (1 to 20)
    Table {
        #[command(flatten)]
        date: DateArgs,

        /// Print the rows as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct DateArgs {
    /// Unit: days, weeks, or months
    #[arg(short, long, default_value = "weeks")]
    unit: Unit,

    /// Direction: before or after
    #[arg(short, long, default_value = "after")]
    direction: Direction,

    /// Use this date (YYYY-MM-DD) as today instead of the clock
    #[arg(long)]
    today: Option<String>,

    /// IANA timezone that decides what "today" is (default: system local)
    #[arg(long, env = "DATEOFFSET_TZ")]
    tz: Option<String>,

    /// What adding a month does to a day the target month lacks: rollover or clamp
    #[arg(long, env = "DATEOFFSET_MONTH_OVERFLOW", default_value = "rollover")]
    month_overflow: MonthOverflow,
}

impl DateArgs {
    fn today(&self) -> Result<NaiveDate> {
        if let Some(s) = &self.today {
            return parse_date(s).context("--today must be a YYYY-MM-DD date");
        }
        if let Some(tz) = &self.tz {
            return today_in_timezone(Utc::now(), tz)
                .with_context(|| format!("cannot determine today's date in {tz}"));
        }
        Ok(Local::now().date_naive())
    }

    fn options(&self) -> CalculatorOptions {
        CalculatorOptions {
            month_overflow: self.month_overflow,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Calc {
            amount,
            date,
            date_only,
            json,
        } => run_calc(amount.as_deref(), &date, date_only, json),
        Commands::Table { date, json } => run_table(&date, json),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run_calc(amount: Option<&str>, args: &DateArgs, date_only: bool, json: bool) -> Result<()> {
    let today = args.today()?;
    let selection = Selection::new(
        amount.and_then(Amount::parse),
        args.unit,
        args.direction,
    );

    let Some(result) = calculate_with_options(&selection, today, &args.options())? else {
        debug!(input = ?amount, "no usable amount, printing nothing");
        return Ok(());
    };

    write_calc(&mut io::stdout().lock(), &result, date_only, json)
}

fn run_table(args: &DateArgs, json: bool) -> Result<()> {
    let today = args.today()?;
    let rows = quick_pick_table(today, args.unit, args.direction, &args.options())?;
    write_table(&mut io::stdout().lock(), &rows, json)
}

fn write_calc(
    out: &mut impl Write,
    result: &ResultText,
    date_only: bool,
    json: bool,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
    } else if date_only {
        writeln!(out, "{}", result.clipboard_text())?;
    } else {
        writeln!(out, "{result}")?;
    }
    out.flush()?;
    Ok(())
}

fn write_table(out: &mut impl Write, rows: &[ResultText], json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?;
    } else {
        for row in rows {
            writeln!(out, "{} {}", row.sentence, row.date_string)?;
        }
    }
    out.flush()?;
    Ok(())
}
