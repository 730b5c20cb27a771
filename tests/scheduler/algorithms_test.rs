/*!
 * Algorithm Tests
 * Golden timelines and statistics for every scheduling algorithm
 */

use cpu_sched::{schedule, Algorithm, Occupant, Preset, Process, Schedule, Ticks};
use pretty_assertions::assert_eq;

/// Timeline as `(label, start, end)` triples, idle shown as `"-"`
fn slices(schedule: &Schedule) -> Vec<(String, Ticks, Ticks)> {
    schedule
        .timeline
        .iter()
        .map(|interval| {
            let label = match &interval.occupant {
                Occupant::Process(pid) => pid.to_string(),
                Occupant::Idle => "-".to_string(),
            };
            (label, interval.start, interval.end)
        })
        .collect()
}

/// Per-process `(completion, turnaround, waiting, response)`
fn metrics(schedule: &Schedule) -> Vec<(Ticks, Ticks, Ticks, Ticks)> {
    schedule
        .statistics
        .iter()
        .map(|s| (s.completion, s.turnaround, s.waiting, s.response))
        .collect()
}

fn expect(slices: &[(&str, Ticks, Ticks)]) -> Vec<(String, Ticks, Ticks)> {
    slices
        .iter()
        .map(|&(label, start, end)| (label.to_string(), start, end))
        .collect()
}

#[test]
fn test_fcfs_basic() {
    let result = schedule(&Preset::Basic.processes(), Algorithm::Fcfs).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[("P1", 0, 5), ("P2", 5, 8), ("P3", 8, 16), ("P4", 16, 22)])
    );
    assert_eq!(
        metrics(&result),
        vec![(5, 5, 0, 0), (8, 7, 4, 4), (16, 14, 6, 6), (22, 19, 13, 13)]
    );
    assert_eq!(result.summary().average_waiting, 5.75);
}

#[test]
fn test_fcfs_convoy() {
    let result = schedule(&Preset::Convoy.processes(), Algorithm::Fcfs).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[("P1", 0, 24), ("P2", 24, 27), ("P3", 27, 30), ("P4", 30, 32)])
    );
    assert_eq!(result.summary().average_waiting, 18.75);
}

#[test]
fn test_fcfs_idle_gaps() {
    let result = schedule(&Preset::Staggered.processes(), Algorithm::Fcfs).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[
            ("-", 0, 2),
            ("P1", 2, 5),
            ("P2", 5, 7),
            ("-", 7, 9),
            ("P3", 9, 13),
            ("P4", 13, 14),
        ])
    );
    assert_eq!(result.timeline.idle_time(), 4);
    assert_eq!(result.timeline.busy_time(), 10);
}

#[test]
fn test_sjf_basic() {
    let result = schedule(&Preset::Basic.processes(), Algorithm::Sjf).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[("P1", 0, 5), ("P2", 5, 8), ("P4", 8, 14), ("P3", 14, 22)])
    );
    assert_eq!(
        metrics(&result),
        vec![(5, 5, 0, 0), (8, 7, 4, 4), (22, 20, 12, 12), (14, 11, 5, 5)]
    );
}

#[test]
fn test_srtf_basic() {
    let result = schedule(&Preset::Basic.processes(), Algorithm::Srtf).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[
            ("P1", 0, 1),
            ("P2", 1, 4),
            ("P1", 4, 8),
            ("P4", 8, 14),
            ("P3", 14, 22),
        ])
    );
    assert_eq!(
        metrics(&result),
        vec![(8, 8, 3, 0), (4, 3, 0, 0), (22, 20, 12, 12), (14, 11, 5, 5)]
    );
    assert_eq!(result.summary().context_switches, 4);
}

#[test]
fn test_srtf_no_preemption_on_equal_remaining() {
    // P2 arrives with the same remaining time as P1: P1 keeps the CPU
    let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
    let result = schedule(&processes, Algorithm::Srtf).unwrap();

    assert_eq!(slices(&result), expect(&[("P1", 0, 4), ("P2", 4, 6)]));
}

#[test]
fn test_round_robin_basic() {
    let rr = Algorithm::round_robin(2).unwrap();
    let result = schedule(&Preset::Basic.processes(), rr).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[
            ("P1", 0, 2),
            ("P2", 2, 4),
            ("P3", 4, 6),
            ("P1", 6, 8),
            ("P4", 8, 10),
            ("P2", 10, 11),
            ("P3", 11, 13),
            ("P1", 13, 14),
            ("P4", 14, 16),
            ("P3", 16, 18),
            ("P4", 18, 20),
            ("P3", 20, 22),
        ])
    );
    assert_eq!(
        metrics(&result),
        vec![(14, 14, 9, 0), (11, 10, 7, 1), (22, 20, 12, 2), (20, 17, 11, 5)]
    );
}

#[test]
fn test_round_robin_keeps_consecutive_slices_separate() {
    let processes = vec![Process::new("P1", 0, 5)];
    let result = schedule(&processes, Algorithm::round_robin(2).unwrap()).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[("P1", 0, 2), ("P1", 2, 4), ("P1", 4, 5)])
    );
}

#[test]
fn test_round_robin_arrival_queued_before_preempted() {
    // P2 arrives exactly when P1's slice ends and goes ahead of P1
    let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
    let result = schedule(&processes, Algorithm::round_robin(2).unwrap()).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[("P1", 0, 2), ("P2", 2, 4), ("P1", 4, 6)])
    );
}

#[test]
fn test_priority_basic() {
    let result = schedule(&Preset::Basic.processes(), Algorithm::Priority).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[("P1", 0, 5), ("P2", 5, 8), ("P4", 8, 14), ("P3", 14, 22)])
    );
}

#[test]
fn test_priority_mix_all_at_zero() {
    let result = schedule(&Preset::PriorityMix.processes(), Algorithm::Priority).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[
            ("P2", 0, 1),
            ("P5", 1, 6),
            ("P1", 6, 16),
            ("P3", 16, 18),
            ("P4", 18, 19),
        ])
    );
}

#[test]
fn test_ties_fall_back_to_declaration_order() {
    let processes = vec![
        Process::new("B", 0, 3),
        Process::new("A", 0, 3),
        Process::new("C", 0, 3),
    ];
    let expected = expect(&[("B", 0, 3), ("A", 3, 6), ("C", 6, 9)]);

    for algorithm in [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
    ] {
        let result = schedule(&processes, algorithm).unwrap();
        assert_eq!(slices(&result), expected, "{}", algorithm);
    }
}

#[test]
fn test_priority_defaults_when_unset() {
    // Unset priority counts as 0, ahead of explicit positive priorities
    let processes = vec![
        Process::new("P1", 0, 1),
        Process::new("P2", 1, 2).with_priority(1),
        Process::new("P3", 1, 2),
    ];
    let result = schedule(&processes, Algorithm::Priority).unwrap();

    assert_eq!(
        slices(&result),
        expect(&[("P1", 0, 1), ("P3", 1, 3), ("P2", 3, 5)])
    );
    assert_eq!(result.statistics[2].priority, 0);
}

#[test]
fn test_every_preset_schedules_under_every_algorithm() {
    let algorithms = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::round_robin(3).unwrap(),
        Algorithm::Priority,
    ];
    for preset in Preset::ALL {
        let processes = preset.processes();
        for algorithm in algorithms {
            let result = algorithm.schedule(&processes).unwrap();
            assert_eq!(result.statistics.len(), processes.len());
            assert_eq!(result.algorithm, algorithm);
        }
    }
}
