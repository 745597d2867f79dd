//! Contribution Planner CLI
//!
//! Command-line interface for contribution normalization and retirement projections

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use contribution_planner::{
    account::load_snapshots,
    batch::{BatchOutputRecord, BatchRunner},
    projection::projection_schedule,
    service::{evaluate, ContributionView},
    AccountSnapshot, ContributionKind, ContributionSelection, ProjectionAssumptions,
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contribution-planner", version, about = "401(k) contribution planner")]
struct Cli {
    #[command(flatten)]
    assumptions: AssumptionArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct AssumptionArgs {
    /// JSON file with retirement_age / annual_return_rate; RETIREMENT_AGE and
    /// ANNUAL_RETURN_RATE still override it
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Retirement age (overrides file and RETIREMENT_AGE)
    #[arg(long, global = true)]
    retirement_age: Option<u8>,

    /// Annual return as a fraction, e.g. 0.05 (overrides file and ANNUAL_RETURN_RATE)
    #[arg(long, global = true)]
    return_rate: Option<f64>,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a contribution and project the balance at retirement
    Project(AccountArgs),
    /// Print the year-by-year balance schedule
    Schedule(AccountArgs),
    /// Project every account in a CSV file
    Batch {
        /// Input CSV (AccountId,Age,Salary,PayPeriods,CurrentBalance,Kind,Value)
        input: PathBuf,
        /// Output CSV; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct AccountArgs {
    #[arg(long)]
    age: Option<u8>,
    #[arg(long)]
    salary: Option<f64>,
    #[arg(long, default_value_t = 26)]
    pay_periods: u32,
    #[arg(long)]
    balance: Option<f64>,
    /// percent or dollar
    #[arg(long, default_value = "percent")]
    kind: ContributionKind,
    /// Percent of salary, or dollars per paycheck
    #[arg(long)]
    value: f64,
}

impl AccountArgs {
    fn selection(&self) -> Result<ContributionSelection> {
        let selection = ContributionSelection { kind: self.kind, value: self.value };
        selection.validate().context("invalid contribution")?;
        Ok(selection)
    }

    fn snapshot(&self) -> Result<AccountSnapshot> {
        let snapshot = AccountSnapshot {
            age: self.age,
            salary: self.salary,
            pay_periods_per_year: self.pay_periods,
            current_balance: self.balance,
        };
        snapshot.validate().context("invalid account")?;
        Ok(snapshot)
    }
}

fn resolve_assumptions(args: &AssumptionArgs) -> Result<ProjectionAssumptions> {
    let mut assumptions = ProjectionAssumptions::from_sources(args.assumptions.as_deref())
        .context("loading assumptions")?;
    if let Some(age) = args.retirement_age {
        assumptions.retirement_age = Some(age);
    }
    if let Some(rate) = args.return_rate {
        assumptions.annual_return_rate = rate;
    }
    assumptions.validate().context("invalid assumptions")?;
    Ok(assumptions)
}

fn print_view(view: &ContributionView) {
    let n = &view.normalized;
    println!("Contribution: {} {}", view.selection.value, view.selection.kind);
    println!("  Equivalent: {:.2}% of salary", n.equivalent_percent);
    println!("  Per paycheck: ${:.0}", n.per_paycheck_amount);
    println!("  Per year: ${:.0}", n.yearly_amount);
    println!();

    match (&view.projection, &view.missing_input) {
        (Some(p), _) => {
            println!(
                "Projection ({} years at {:.2}%):",
                p.years_to_retirement,
                view.assumptions.annual_return_rate * 100.0
            );
            println!("  Current balance grown: ${:.0}", p.future_balance);
            println!("  Future contributions: ${:.0}", p.future_contributions);
            println!("  Balance at retirement: ${:.0}", p.projected_balance);
        }
        (None, Some(missing)) => println!("Projection: needs {}", missing),
        (None, None) => println!("Projection: unavailable"),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = resolve_assumptions(&cli.assumptions)?;
    info!(
        "assumptions: retirement age {:?}, return {}",
        assumptions.retirement_age, assumptions.annual_return_rate
    );

    match cli.command {
        Command::Project(args) => {
            let view = evaluate(&args.selection()?, &args.snapshot()?, &assumptions);
            print_view(&view);
        }
        Command::Schedule(args) => {
            let snapshot = args.snapshot()?;
            let view = evaluate(&args.selection()?, &snapshot, &assumptions);
            let yearly = view.normalized.yearly_amount;
            let rows = projection_schedule(&snapshot, &assumptions, yearly)?;

            println!("{:>4} {:>4} {:>14} {:>12} {:>12} {:>14}",
                "Year", "Age", "Opening", "Growth", "Contrib", "Closing");
            println!("{}", "-".repeat(65));
            for row in &rows {
                println!(
                    "{:>4} {:>4} {:>14.0} {:>12.0} {:>12.0} {:>14.0}",
                    row.year,
                    row.age,
                    row.opening_balance,
                    row.growth,
                    row.contribution,
                    row.closing_balance
                );
            }
        }
        Command::Batch { input, output } => {
            let records = load_snapshots(&input)
                .with_context(|| format!("loading {}", input.display()))?;
            let runner = BatchRunner::new(assumptions);
            let rows = runner.run_batch(&records);

            let out: Box<dyn std::io::Write> = match &output {
                Some(path) => Box::new(std::fs::File::create(path)?),
                None => Box::new(std::io::stdout()),
            };
            let mut writer = csv::Writer::from_writer(out);
            for row in &rows {
                writer.serialize(BatchOutputRecord::from(row))?;
            }
            writer.flush()?;

            if let Some(path) = output {
                println!("{} accounts written to {}", rows.len(), path.display());
                println!("Total projected: ${:.0}", BatchRunner::total_projected(&rows));
            }
        }
    }

    Ok(())
}
