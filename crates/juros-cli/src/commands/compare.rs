//! Compare command implementation.
//!
//! Projects CDB and compromissada net returns side by side over the
//! coming business days.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use juros_projection::{project, ProjectionParameters, ProjectionRow};

use crate::cli::OutputFormat;
use crate::commands::{
    resolve_calendar, resolve_start_date, validate_fraction, validate_horizon, validate_principal,
    validate_rate,
};
use crate::output::{self, print_header};

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Application date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub start: Option<String>,

    /// Invested amount in reais
    #[arg(short, long, default_value = "10000")]
    pub principal: f64,

    /// Annual Selic rate (as percentage, e.g. 15.0 for 15%)
    #[arg(long, default_value = "15.0")]
    pub selic: f64,

    /// CDB rate as a percentage of CDI (100 means 100% of CDI)
    #[arg(long, default_value = "100")]
    pub cdb: f64,

    /// Compromissada rate as a percentage of CDI
    #[arg(long, default_value = "50")]
    pub compromissada: f64,

    /// Business days to project (1 to 30)
    #[arg(short, long, default_value = "22")]
    pub days: u32,

    /// Market calendar (BVMF or WEEKEND)
    #[arg(short, long, default_value = "BVMF")]
    pub market: String,

    /// JSON file with the holidays to use instead of the market calendar
    #[arg(long)]
    pub holidays_file: Option<PathBuf>,
}

/// One table row with localized headers and display rounding.
#[derive(Debug, Serialize, Tabled)]
struct DisplayRow {
    #[tabled(rename = "Dia Útil")]
    business_day: u32,
    #[tabled(rename = "Data")]
    date: String,
    #[tabled(rename = "IOF (%)")]
    iof: u32,
    #[tabled(rename = "CDB (R$)")]
    cdb_net: String,
    #[tabled(rename = "Compromissada (R$)")]
    compromissada_net: String,
    #[tabled(rename = "Equivalente ao CDB (%)")]
    equivalence: String,
}

impl From<&ProjectionRow> for DisplayRow {
    fn from(row: &ProjectionRow) -> Self {
        Self {
            business_day: row.business_day,
            date: row.date.as_naive_date().format("%d/%m/%Y").to_string(),
            iof: row.iof_percent,
            cdb_net: format!("{:.2}", row.cdb_net),
            compromissada_net: format!("{:.2}", row.compromissada_net),
            equivalence: format!("{:.2}", row.cdb_equivalence_percent),
        }
    }
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let start_date = resolve_start_date(args.start.as_deref())?;
    let principal = validate_principal(args.principal)?;
    validate_rate(args.selic)?;
    validate_fraction(args.cdb)?;
    validate_fraction(args.compromissada)?;
    let days = validate_horizon(args.days)?;

    let params = ProjectionParameters {
        start_date,
        principal: decimal_arg(principal, "principal")?,
        selic_annual: percent_arg(args.selic, "selic")?,
        cdb_fraction: percent_arg(args.cdb, "cdb")?,
        compromissada_fraction: percent_arg(args.compromissada, "compromissada")?,
        horizon_business_days: days,
    };

    let calendar = resolve_calendar(&args.market, args.holidays_file.as_deref())?;
    let projection = project(&params, calendar.as_dyn())?;

    match format {
        OutputFormat::Table => {
            if !quiet {
                print_header("Comparativo CDB x Compromissada");
                println!(
                    "Aplicação em {} de R$ {:.2}, Selic {:.2}% a.a. (CDI diário {:.6}%)",
                    start_date.as_naive_date().format("%d/%m/%Y"),
                    params.principal,
                    args.selic,
                    projection.daily_rate() * Decimal::from(100),
                );
                println!(
                    "CDB a {:.0}% do CDI, compromissada a {:.0}% do CDI\n",
                    args.cdb, args.compromissada
                );
            }
            let rows: Vec<DisplayRow> = projection.rows().iter().map(DisplayRow::from).collect();
            output::print_table(&rows)?;
        }
        OutputFormat::Json => output::print_json(projection.rows())?,
        OutputFormat::Csv => output::print_csv(projection.rows())?,
        OutputFormat::Minimal => {
            // Just the final equivalence percentage
            if let Some(last) = projection.rows().last() {
                println!("{:.2}", last.cdb_equivalence_percent);
            }
        }
    }

    Ok(())
}

fn decimal_arg(value: f64, name: &str) -> Result<Decimal> {
    Decimal::from_f64_retain(value).ok_or_else(|| anyhow::anyhow!("Invalid {}: {}", name, value))
}

fn percent_arg(value: f64, name: &str) -> Result<Decimal> {
    Ok(decimal_arg(value, name)? / Decimal::from(100))
}
