/*!
 * Timeline
 * Ordered CPU occupancy intervals produced by a scheduling run
 */

use crate::core::types::Ticks;
use crate::process::ProcessId;
use serde::{Deserialize, Deserializer, Serialize};

/// Who holds the CPU during an interval
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pid", rename_all = "snake_case")]
pub enum Occupant {
    Process(ProcessId),
    Idle,
}

impl Occupant {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub fn process(&self) -> Option<&ProcessId> {
        match self {
            Self::Process(pid) => Some(pid),
            Self::Idle => None,
        }
    }
}

/// Half-open interval `[start, end)` with `end > start`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineInterval {
    pub occupant: Occupant,
    pub start: Ticks,
    pub end: Ticks,
}

impl TimelineInterval {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    #[inline]
    pub fn contains(&self, tick: Ticks) -> bool {
        self.start <= tick && tick < self.end
    }
}

/// Contiguous, ordered list of intervals starting at tick 0
///
/// Only the engine appends; consumers get read access. Deserialized
/// timelines are checked against the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<TimelineInterval>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }

    /// Append an interval, extending the last one when the same occupant
    /// simply keeps running
    pub(crate) fn extend(&mut self, occupant: Occupant, start: Ticks, end: Ticks) {
        if let Some(last) = self.intervals.last_mut() {
            if last.occupant == occupant && last.end == start {
                debug_assert!(end > start, "interval must move forward");
                last.end = end;
                return;
            }
        }
        self.push(occupant, start, end);
    }

    /// Append an interval as its own slice; idle gaps still coalesce
    pub(crate) fn push_slice(&mut self, occupant: Occupant, start: Ticks, end: Ticks) {
        if occupant.is_idle() {
            self.extend(occupant, start, end);
        } else {
            self.push(occupant, start, end);
        }
    }

    fn push(&mut self, occupant: Occupant, start: Ticks, end: Ticks) {
        debug_assert!(end > start, "interval [{start}, {end}) must move forward");
        debug_assert_eq!(start, self.makespan(), "intervals must be contiguous");
        self.intervals.push(TimelineInterval {
            occupant,
            start,
            end,
        });
    }

    #[inline]
    pub fn intervals(&self) -> &[TimelineInterval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimelineInterval> {
        self.intervals.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Time at which the last process completes (0 for an empty timeline)
    pub fn makespan(&self) -> Ticks {
        self.intervals.last().map_or(0, |interval| interval.end)
    }

    /// Total non-idle time
    pub fn busy_time(&self) -> Ticks {
        self.iter()
            .filter(|interval| !interval.occupant.is_idle())
            .map(TimelineInterval::duration)
            .sum()
    }

    pub fn idle_time(&self) -> Ticks {
        self.makespan() - self.busy_time()
    }

    /// Occupant holding the CPU during tick `tick`, if within the timeline
    ///
    /// Lets a playback layer step through a finished run one tick at a time.
    pub fn occupant_at(&self, tick: Ticks) -> Option<&Occupant> {
        let index = self.intervals.partition_point(|interval| interval.end <= tick);
        self.intervals
            .get(index)
            .filter(|interval| interval.contains(tick))
            .map(|interval| &interval.occupant)
    }

    /// Intervals belonging to one process, in time order
    pub fn intervals_for<'a>(
        &'a self,
        pid: &'a ProcessId,
    ) -> impl Iterator<Item = &'a TimelineInterval> + 'a {
        self.iter()
            .filter(move |interval| interval.occupant.process() == Some(pid))
    }

    /// Number of times the CPU switches from one process to a different one
    ///
    /// Idle gaps are skipped: `P1, idle, P1` is not a switch.
    pub fn context_switches(&self) -> usize {
        let mut previous: Option<&ProcessId> = None;
        let mut switches = 0;
        for pid in self.iter().filter_map(|interval| interval.occupant.process()) {
            if previous.is_some_and(|prev| prev != pid) {
                switches += 1;
            }
            previous = Some(pid);
        }
        switches
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineInterval;
    type IntoIter = std::slice::Iter<'a, TimelineInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl<'de> Deserialize<'de> for Timeline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let intervals = Vec::<TimelineInterval>::deserialize(deserializer)?;
        let mut timeline = Timeline::with_capacity(intervals.len());

        for interval in intervals {
            if interval.end <= interval.start {
                return Err(serde::de::Error::custom(format!(
                    "interval [{}, {}) is empty",
                    interval.start, interval.end
                )));
            }
            if interval.start != timeline.makespan() {
                return Err(serde::de::Error::custom(format!(
                    "interval starting at {} does not follow tick {}",
                    interval.start,
                    timeline.makespan()
                )));
            }
            let repeated_idle = interval.occupant.is_idle()
                && timeline.intervals.last().is_some_and(|last| last.occupant.is_idle());
            if repeated_idle {
                return Err(serde::de::Error::custom("consecutive idle intervals"));
            }
            timeline.intervals.push(interval);
        }

        if timeline.intervals.last().is_some_and(|last| last.occupant.is_idle()) {
            return Err(serde::de::Error::custom("timeline ends idle"));
        }
        Ok(timeline)
    }
}
