/*!
 * Property Tests
 * Invariants every timeline must satisfy, checked over random process sets
 */

use cpu_sched::{schedule, Algorithm, Occupant, Process, ProcessId, Schedule};
use proptest::prelude::*;

fn process_set() -> impl Strategy<Value = Vec<Process>> {
    prop::collection::vec((0i64..30, 1i64..12, prop::option::of(0i64..6)), 0..14).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(n, (arrival, burst, priority))| Process {
                    id: ProcessId::numbered(n + 1),
                    arrival,
                    burst,
                    priority,
                })
                .collect()
        },
    )
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![
        Just(Algorithm::Fcfs),
        Just(Algorithm::Sjf),
        Just(Algorithm::Srtf),
        Just(Algorithm::Priority),
        (1i64..6).prop_map(|q| Algorithm::round_robin(q).unwrap()),
    ]
}

fn check_timeline(processes: &[Process], result: &Schedule) -> Result<(), TestCaseError> {
    let intervals = result.timeline.intervals();

    if processes.is_empty() {
        prop_assert!(intervals.is_empty());
        prop_assert!(result.statistics.is_empty());
        return Ok(());
    }

    // Contiguous from zero, positive lengths
    prop_assert_eq!(intervals[0].start, 0);
    for pair in intervals.windows(2) {
        prop_assert_eq!(pair[0].end, pair[1].start);
    }
    for interval in intervals {
        prop_assert!(interval.start < interval.end);
    }

    // Idle never repeats back to back and never trails
    for pair in intervals.windows(2) {
        prop_assert!(!(pair[0].occupant.is_idle() && pair[1].occupant.is_idle()));
    }
    prop_assert!(!intervals[intervals.len() - 1].occupant.is_idle());

    // Work conservation: each process gets exactly its burst, never before arrival
    for process in processes {
        let owned: Vec<_> = result.timeline.intervals_for(&process.id).collect();
        prop_assert!(!owned.is_empty());
        prop_assert!(owned[0].start >= process.arrival);
        prop_assert_eq!(owned.iter().map(|i| i.duration()).sum::<i64>(), process.burst);
    }

    // Makespan is the busy time plus idle time
    let busy: i64 = processes.iter().map(|p| p.burst).sum();
    prop_assert_eq!(result.timeline.busy_time(), busy);
    prop_assert_eq!(
        result.timeline.makespan(),
        result.timeline.busy_time() + result.timeline.idle_time()
    );
    Ok(())
}

proptest! {
    #[test]
    fn prop_timeline_invariants(processes in process_set(), algorithm in algorithm()) {
        let result = schedule(&processes, algorithm).unwrap();
        check_timeline(&processes, &result)?;
    }

    #[test]
    fn prop_statistics_consistent(processes in process_set(), algorithm in algorithm()) {
        let result = schedule(&processes, algorithm).unwrap();
        prop_assert_eq!(result.statistics.len(), processes.len());

        for (process, stats) in processes.iter().zip(&result.statistics) {
            prop_assert_eq!(&stats.pid, &process.id);
            prop_assert_eq!(stats.turnaround, stats.completion - process.arrival);
            prop_assert_eq!(stats.waiting, stats.turnaround - process.burst);
            prop_assert!(stats.waiting >= 0);
            prop_assert!(stats.response >= 0);
            prop_assert!(stats.response <= stats.waiting);
        }
    }

    #[test]
    fn prop_non_preemptive_runs_once(processes in process_set()) {
        for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority] {
            let result = schedule(&processes, algorithm).unwrap();
            for process in &processes {
                prop_assert_eq!(result.timeline.intervals_for(&process.id).count(), 1);
            }
            for stats in &result.statistics {
                prop_assert_eq!(stats.response, stats.waiting);
            }
        }
    }

    #[test]
    fn prop_merged_timelines_have_no_repeats(processes in process_set()) {
        for algorithm in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Srtf, Algorithm::Priority] {
            let result = schedule(&processes, algorithm).unwrap();
            for pair in result.timeline.intervals().windows(2) {
                prop_assert_ne!(&pair[0].occupant, &pair[1].occupant);
            }
        }
    }

    #[test]
    fn prop_large_quantum_matches_fcfs(processes in process_set()) {
        let rr = schedule(&processes, Algorithm::round_robin(12).unwrap()).unwrap();
        let fcfs = schedule(&processes, Algorithm::Fcfs).unwrap();
        prop_assert_eq!(rr.timeline, fcfs.timeline);
        prop_assert_eq!(rr.statistics, fcfs.statistics);
    }

    #[test]
    fn prop_srtf_never_waits_longer_on_average_than_sjf(processes in process_set()) {
        let srtf = schedule(&processes, Algorithm::Srtf).unwrap().summary();
        let sjf = schedule(&processes, Algorithm::Sjf).unwrap().summary();
        prop_assert!(srtf.average_waiting <= sjf.average_waiting + 1e-9);
    }

    #[test]
    fn prop_repeatable(processes in process_set(), algorithm in algorithm()) {
        let first = schedule(&processes, algorithm).unwrap();
        let second = schedule(&processes, algorithm).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_occupant_at_steps_through_timeline() {
    let processes = vec![Process::new("P1", 2, 2), Process::new("P2", 2, 1)];
    let result = schedule(&processes, Algorithm::Fcfs).unwrap();
    let timeline = &result.timeline;

    let occupants: Vec<Option<&Occupant>> = (0..6).map(|t| timeline.occupant_at(t)).collect();
    let p1 = Occupant::Process("P1".into());
    let p2 = Occupant::Process("P2".into());
    assert_eq!(
        occupants,
        vec![
            Some(&Occupant::Idle),
            Some(&Occupant::Idle),
            Some(&p1),
            Some(&p1),
            Some(&p2),
            None,
        ]
    );
}
