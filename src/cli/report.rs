//! Verdict and station reports for the terminal

use crate::app::models::{StationRecord, Verdict};
use crate::config::RuleRegistry;
use crate::error::BuoyError;
use colored::*;
use std::fmt::Write;

/// Render the outcome of one rule evaluation, including failures
pub fn render_outcome(rule_name: &str, outcome: &Result<Verdict, BuoyError>) -> String {
    match outcome {
        Ok(verdict) => render_verdict(rule_name, verdict),
        Err(e) => format!(
            "\n{} {}: {}\n",
            "ERROR".bright_red().bold(),
            rule_name,
            e
        ),
    }
}

/// Render a verdict; safe verdicts list both supporting stations
pub fn render_verdict(rule_name: &str, verdict: &Verdict) -> String {
    match verdict {
        Verdict::Unsafe { average_wind_speed } => format!(
            "\n{}\n",
            format!(
                "*** Stay Home, {} Is Not Good : Average Wind Speed Is {:.2} ***",
                rule_name, average_wind_speed
            )
            .bright_red()
            .bold()
        ),
        Verdict::Safe {
            average_wind_speed,
            lowest_gust,
            closest,
        } => {
            let mut out = String::new();
            out.push_str(&format!(
                "\n{}\n",
                format!("*** Go Fishing, {} Looks Good ***", rule_name)
                    .bright_green()
                    .bold()
            ));
            out.push_str(&render_station(
                &format!("{} Buoy With Lowest Wind Gust", rule_name),
                lowest_gust,
                Some(*average_wind_speed),
            ));
            out.push_str(&render_station(
                &format!("{} Buoy Closest To Your Location", rule_name),
                closest,
                Some(*average_wind_speed),
            ));
            out
        }
    }
}

/// Render one station as a titled block of fields
pub fn render_station(
    title: &str,
    station: &StationRecord,
    average_wind_speed: Option<f64>,
) -> String {
    let coordinate = station.coordinate();
    let mut fields = vec![
        ("Station Id", station.station_id.clone()),
        ("Name", station.name.clone()),
        ("Location", station.location_desc.clone()),
        (
            "Latitude",
            coordinate.map_or_else(na, |c| format!("{:.6}", c.latitude)),
        ),
        (
            "Longitude",
            coordinate.map_or_else(na, |c| format!("{:.6}", c.longitude)),
        ),
    ];

    if let Some(distance) = station.distance_miles {
        fields.push(("Distance", format!("{:.2} Miles", distance)));
    }

    fields.extend([
        (
            "Wind Speed",
            station
                .condition
                .wind_speed
                .map_or_else(na, |v| format!("{:.2} Miles/Hour", v)),
        ),
        (
            "Wind Direction",
            station
                .condition
                .wind_direction
                .map_or_else(na, |v| format!("{} From True North", v)),
        ),
        (
            "Wind Gust",
            station
                .condition
                .wind_gust
                .map_or_else(na, |v| format!("{:.2} Miles/Hour", v)),
        ),
    ]);

    if let Some(average) = average_wind_speed {
        fields.push(("Avg Wind Speed", format!("{:.2} Miles/Hour", average)));
    }

    let mut out = format!("\n{}\n", title.bright_cyan().bold());
    for (label, value) in fields {
        let _ = writeln!(out, "  {:<16}: {}", label, value);
    }
    out
}

/// Render the configured rules as a table
pub fn render_rules(registry: &RuleRegistry) -> String {
    let mut out = format!("{}\n", "Configured rules:".bright_green().bold());
    for (name, config) in registry.iter() {
        let _ = writeln!(
            out,
            "  {:<12} lat {:>10.6}  lon {:>11.6}  radius {:>6.1} mi  max avg wind {:>5.1} mph",
            name.bright_yellow(),
            config.latitude,
            config.longitude,
            config.max_distance_miles,
            config.max_avg_wind_speed
        );
    }
    out
}

fn na() -> String {
    "n/a".to_string()
}
