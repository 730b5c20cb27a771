/*!
 * Text Report
 * Plain-text timeline and statistics tables
 */

use crate::scheduler::{Occupant, Schedule};
use std::fmt::Write;

/// Render the timeline, statistics table and summary as plain text
pub fn render_text(schedule: &Schedule) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_report(&mut out, schedule);
    out
}

fn write_report(out: &mut String, schedule: &Schedule) -> std::fmt::Result {
    writeln!(out, "Algorithm: {}", schedule.algorithm)?;
    writeln!(out)?;

    writeln!(out, "Timeline")?;
    writeln!(out, "{:<10} {:>7} {:>7} {:>9}", "Occupant", "Start", "End", "Duration")?;
    for interval in &schedule.timeline {
        let label = match &interval.occupant {
            Occupant::Process(pid) => pid.as_str(),
            Occupant::Idle => "(idle)",
        };
        writeln!(
            out,
            "{:<10} {:>7} {:>7} {:>9}",
            label,
            interval.start,
            interval.end,
            interval.duration()
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Statistics")?;
    writeln!(
        out,
        "{:<10} {:>7} {:>6} {:>8} {:>10} {:>10} {:>7} {:>8}",
        "Process", "Arrival", "Burst", "Priority", "Completion", "Turnaround", "Waiting", "Response"
    )?;
    for stats in &schedule.statistics {
        writeln!(
            out,
            "{:<10} {:>7} {:>6} {:>8} {:>10} {:>10} {:>7} {:>8}",
            stats.pid.as_str(),
            stats.arrival,
            stats.burst,
            stats.priority,
            stats.completion,
            stats.turnaround,
            stats.waiting,
            stats.response
        )?;
    }
    writeln!(out)?;

    let summary = schedule.summary();
    writeln!(out, "Average turnaround: {:.2}", summary.average_turnaround)?;
    writeln!(out, "Average waiting:    {:.2}", summary.average_waiting)?;
    writeln!(out, "Average response:   {:.2}", summary.average_response)?;
    writeln!(
        out,
        "Makespan: {}  Busy: {}  Idle: {}  CPU utilization: {:.1}%",
        summary.makespan,
        summary.busy_time,
        summary.idle_time,
        summary.cpu_utilization * 100.0
    )?;
    writeln!(
        out,
        "Throughput: {:.3} processes/tick  Context switches: {}",
        summary.throughput, summary.context_switches
    )
}
