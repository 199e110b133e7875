use anyhow::Context;
use clap::Parser;
use gapcore::schedule::decode;
use generator::profile::{build_schedules, GeneratorConfig};
use log::{debug, info};
use std::path::PathBuf;
use workflow::config::{GapOrder, WorkflowConfig};
use workflow::input::load_schedules;
use workflow::report::{emit, render_grid};
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Find free time shared by a group of class schedules")]
struct Args {
    /// File with one `[username] schedule` per line
    #[arg(long, conflicts_with = "random")]
    schedules: Option<PathBuf>,
    /// Generate this many random schedules instead of reading a file
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, default_value_t = 10)]
    seed: u64,
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    compute_sd: bool,
    /// Treat days without classes as fully free
    #[arg(long, default_value_t = false)]
    no_classes_day: bool,
    /// Apply the no-classes-day rule to Saturday and Sunday too
    #[arg(long, default_value_t = false)]
    include_weekend: bool,
    #[arg(long)]
    limit: Option<usize>,
    /// Comma-separated day indices to keep (0 = Monday)
    #[arg(long, value_delimiter = ',')]
    days: Vec<usize>,
    #[arg(long, value_enum, default_value_t = GapOrder::Average)]
    order: GapOrder,
    /// Report per-slot meeting availability instead of gaps
    #[arg(long, default_value_t = false)]
    meeting: bool,
    /// Schedule whose class hours are excluded from the meeting report
    #[arg(long, requires = "meeting")]
    filter_schedule: Option<String>,
    /// Print the occupancy grid of a single schedule and exit
    #[arg(long)]
    inspect: Option<String>,
    /// Also write the JSON report to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(schedule) = args.inspect.as_deref() {
        let grid = decode(schedule).context("decoding schedule to inspect")?;
        info!("schedule has {} class hours", grid.class_count());
        println!("{}", render_grid(&grid));
        return Ok(());
    }

    let schedules = match (args.schedules.as_ref(), args.random) {
        (Some(path), _) => load_schedules(path)?,
        (None, Some(count)) => build_schedules(&GeneratorConfig {
            count,
            seed: args.seed,
            ..Default::default()
        })?,
        (None, None) => anyhow::bail!("provide --schedules <FILE> or --random <N>"),
    };
    info!("loaded {} schedules", schedules.len());
    for named in &schedules {
        debug!("{} -> {}", named.label(), named.schedule);
    }

    let workflow_config = if let Some(path) = args.workflow.as_ref() {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(
            args.compute_sd,
            args.no_classes_day,
            args.include_weekend,
            args.limit,
            args.days.clone(),
            args.order,
        )?
    };

    let runner = Runner::new(workflow_config);
    let json = if args.meeting {
        let report = runner.analyze_meeting(&schedules, args.filter_schedule.as_deref())?;
        emit(&report, args.output.as_deref())?
    } else {
        let report = runner.execute(&schedules)?;
        emit(&report, args.output.as_deref())?
    };
    println!("{}", json);

    Ok(())
}
