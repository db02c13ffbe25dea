//! Calendar command implementation.
//!
//! Lists the business days a projection starting on a given date would
//! run over, with the calendar-day gap that drives IOF withholding.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use juros_core::types::Date;

use crate::cli::OutputFormat;
use crate::commands::{resolve_calendar, resolve_start_date, validate_horizon};
use crate::output::{self, print_header};

/// Arguments for the calendar command.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub start: Option<String>,

    /// Business days to list (1 to 30)
    #[arg(short, long, default_value = "22")]
    pub days: u32,

    /// Market calendar (BVMF or WEEKEND)
    #[arg(short, long, default_value = "BVMF")]
    pub market: String,

    /// JSON file with the holidays to use instead of the market calendar
    #[arg(long)]
    pub holidays_file: Option<PathBuf>,
}

/// One generated business day.
#[derive(Debug, Serialize)]
struct CalendarDay {
    business_day: u32,
    date: Date,
    weekday: String,
    elapsed_calendar_days: i64,
}

/// Table row with localized headers.
#[derive(Debug, Tabled)]
struct DisplayRow {
    #[tabled(rename = "Dia Útil")]
    business_day: u32,
    #[tabled(rename = "Data")]
    date: String,
    #[tabled(rename = "Dia da Semana")]
    weekday: String,
    #[tabled(rename = "Dias Corridos")]
    elapsed: i64,
}

/// Execute the calendar command.
pub fn execute(args: CalendarArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let start = resolve_start_date(args.start.as_deref())?;
    let days = validate_horizon(args.days)?;
    let calendar = resolve_calendar(&args.market, args.holidays_file.as_deref())?;

    let dates = calendar.as_dyn().business_days_after(start, days)?;
    let rows: Vec<CalendarDay> = dates
        .iter()
        .enumerate()
        .map(|(i, &d)| CalendarDay {
            business_day: i as u32 + 1,
            date: d,
            weekday: d.weekday().to_string(),
            elapsed_calendar_days: start.days_between(&d),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header(&format!("Dias úteis após {}", start));
            }
            let display: Vec<DisplayRow> = rows
                .iter()
                .map(|r| DisplayRow {
                    business_day: r.business_day,
                    date: r.date.as_naive_date().format("%d/%m/%Y").to_string(),
                    weekday: r.weekday.clone(),
                    elapsed: r.elapsed_calendar_days,
                })
                .collect();
            output::print_table(&display)?;
        }
        OutputFormat::Json => output::print_json(&rows)?,
        OutputFormat::Csv => output::print_csv(&rows)?,
        OutputFormat::Minimal => {
            // Just the final date
            if let Some(last) = rows.last() {
                println!("{}", last.date);
            }
        }
    }

    Ok(())
}
