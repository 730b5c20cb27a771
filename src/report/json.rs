/*!
 * JSON Report
 * Machine-readable report for visualization front ends
 */

use super::palette::ColorMap;
use crate::core::errors::{AppResult, SerializableError};
use crate::core::types::Ticks;
use crate::process::Process;
use crate::scheduler::{Algorithm, Occupant, ProcessStatistics, Schedule, ScheduleSummary};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report<'a> {
    algorithm: &'a Algorithm,
    timeline: Vec<ColoredInterval<'a>>,
    statistics: &'a [ProcessStatistics],
    summary: ScheduleSummary,
}

#[derive(Debug, Serialize)]
struct ColoredInterval<'a> {
    occupant: &'a Occupant,
    start: Ticks,
    end: Ticks,
    color: &'static str,
}

/// Render a schedule with per-interval colors and the run summary
pub fn render_json(schedule: &Schedule, processes: &[Process]) -> AppResult<String> {
    let colors = ColorMap::assign(processes);
    let report = Report {
        algorithm: &schedule.algorithm,
        timeline: schedule
            .timeline
            .iter()
            .map(|interval| ColoredInterval {
                occupant: &interval.occupant,
                start: interval.start,
                end: interval.end,
                color: colors.color_of(&interval.occupant),
            })
            .collect(),
        statistics: &schedule.statistics,
        summary: schedule.summary(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render an error as a JSON object
pub fn render_error_json(error: &SerializableError) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(error)?)
}
