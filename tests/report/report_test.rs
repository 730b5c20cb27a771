/*!
 * Report Tests
 * Text and JSON output for complete runs
 */

use cpu_sched::{
    render_error_json, render_json, render_text, schedule, Algorithm, AppError, Preset,
    SchedulerError, SerializableError,
};
use pretty_assertions::assert_eq;

#[test]
fn test_text_report_lists_every_process() {
    let processes = Preset::Basic.processes();
    let result = schedule(&processes, Algorithm::round_robin(2).unwrap()).unwrap();
    let text = render_text(&result);

    assert!(text.starts_with("Algorithm: Round Robin (quantum 2)"));
    for process in &processes {
        assert!(text.contains(process.id.as_str()));
    }
    assert!(text.contains("Average turnaround: 15.25"));
    assert!(text.contains("Context switches: 11"));
}

#[test]
fn test_json_report_round_trips_statistics() {
    let processes = Preset::Staggered.processes();
    let result = schedule(&processes, Algorithm::Fcfs).unwrap();
    let json = render_json(&result, &processes).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let timeline = value["timeline"].as_array().unwrap();
    assert_eq!(timeline.len(), result.timeline.len());
    assert_eq!(timeline[0]["occupant"]["kind"], "idle");
    assert_ne!(timeline[0]["color"], timeline[1]["color"]);

    let statistics = value["statistics"].as_array().unwrap();
    assert_eq!(statistics.len(), 4);
    assert_eq!(statistics[3]["pid"], "P4");
    assert_eq!(statistics[3]["waiting"], 3);
    assert_eq!(value["summary"]["idle_time"], 4);
}

#[test]
fn test_error_json_names_process() {
    let err = AppError::from(SchedulerError::InvalidBurst {
        pid: "P9".into(),
        burst: 0,
    });
    let json = render_error_json(&SerializableError::from(&err)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["error_type"], "scheduler_error");
    assert_eq!(value["process"], "P9");
    assert_eq!(value["message"], "Process P9 has invalid burst time 0");
}
