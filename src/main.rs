use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::Parser;
use log::{info, warn};
use wxtrend::day_parts::{hours_in_part, temperature_range, DayPart};
use wxtrend::engine::Outcome;
use wxtrend::initialization::{init, Mgr};
use wxtrend::manager_history::save_projection;

#[derive(Parser)]
#[command(name = "wxtrend", version, about = "Weather for a date, projected when beyond the known data")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Date to get weather for (YYYY-MM-DD)
    date: NaiveDate,

    /// Also resolve the same weekday one week later
    #[arg(long)]
    compare_week: bool,

    /// Part of the day to list hours for: morning, afternoon or evening
    #[arg(short, long, default_value = "all")]
    part: DayPart,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mgr = init(&cli.config)?;

    let mut dates = vec![cli.date];
    if cli.compare_week {
        dates.push(cli.date.checked_add_days(Days::new(7)).context("date out of range")?);
    }

    for date in dates {
        run(&mgr, date, cli.part)?;
    }

    Ok(())
}

/// Resolves one date, prints the result and saves projected days when an output directory
/// is configured
///
/// # Arguments
///
/// * 'mgr' - initialized projector and history
/// * 'date' - the date to resolve
/// * 'part' - part of the day to print hours for
fn run(mgr: &Mgr, date: NaiveDate, part: DayPart) -> Result<()> {
    let timeline = mgr.history.timeline();
    if mgr.history.has_date(date) {
        info!("{} is part of the provider timeline for {} ({})", date, timeline.resolved_address, timeline.timezone);
    } else {
        info!("{} is not in the provider timeline for {}, projecting", date, timeline.resolved_address);
    }

    let outcome = mgr.projector.outcome(mgr.history.days(), date);
    info!("{}", outcome);
    println!("{}", outcome);

    let Some(day) = outcome.day() else {
        warn!("no weather data for {}", date);
        return Ok(());
    };

    let hours = hours_in_part(day, part);
    for h in hours.iter() {
        println!("  {} {:>5.1} (feels {:>5.1}) precip {:>3.0}% wind {:>3.0} cloud {:>5.1}% {}",
                 h.time.format("%H:%M"), h.temp, h.feels_like, h.precip_prob, h.wind_speed, h.cloud_cover, h.conditions);
    }
    if let Some((low, high)) = temperature_range(&hours) {
        println!("  chart range {}: {:0.1} - {:0.1}", part, low, high);
    }

    if let (Outcome::Projected(day), Some(output_dir)) = (&outcome, &mgr.output_dir) {
        let path = save_projection(output_dir, day)
            .with_context(|| format!("saving projection for {}", date))?;
        info!("projection for {} saved to {}", date, path.display());
    }

    Ok(())
}
