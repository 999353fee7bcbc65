// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag velocity tracking and ballistic end-position projection.
//!
//! The state machine takes a release velocity and a projected target as
//! inputs; this module derives both from raw drag samples so a host does not
//! need its own gesture math. [`DragTracker`] keeps a short sliding window of
//! `(delta, timestamp)` samples and reports the average velocity over it;
//! [`project`] turns a release velocity into the position where an
//! exponential deceleration would come to rest.

use alloc::collections::VecDeque;

#[cfg(not(feature = "std"))]
use crate::common::FloatExt;

/// Samples older than this no longer influence the velocity estimate.
const HISTORY_LIMIT_MS: i64 = 150;

/// Per-millisecond velocity retention of the deceleration curve.
const DECELERATION: f64 = 0.997;

#[derive(Debug, Clone, Copy)]
struct Sample {
    delta: f64,
    timestamp_ms: i64,
}

/// Sliding-window velocity tracker for drag samples.
///
/// Feed it one `(delta, timestamp)` pair per drag event; on release,
/// [`velocity`](Self::velocity) estimates the exit velocity in ticks per
/// second from the samples of the last 150 ms.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    history: VecDeque<Sample>,
}

impl DragTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            history: VecDeque::new(),
        }
    }

    /// Push a new drag sample.
    ///
    /// Timestamps must not move backwards; a sample older than the previous
    /// one is dropped rather than corrupting the velocity window.
    pub fn push(&mut self, delta: f64, timestamp_ms: i64) {
        if let Some(last) = self.history.back() {
            if timestamp_ms < last.timestamp_ms {
                return;
            }
        }
        self.history.push_back(Sample {
            delta,
            timestamp_ms,
        });
        self.trim();
    }

    /// Current velocity estimate in ticks per second.
    ///
    /// Zero when fewer than two samples are in the window or when they share
    /// a timestamp.
    pub fn velocity(&self) -> f64 {
        let (Some(first), Some(last)) = (self.history.front(), self.history.back()) else {
            return 0.0;
        };
        let total_ms = last.timestamp_ms - first.timestamp_ms;
        if total_ms <= 0 {
            return 0.0;
        }
        let total_delta: f64 = self.history.iter().map(|s| s.delta).sum();
        let total_s = total_ms as f64 / 1000.0;
        total_delta / total_s
    }

    /// Drop all samples (called on drag start).
    pub fn clear(&mut self) {
        self.history.clear();
    }

    fn trim(&mut self) {
        let Some(&Sample { timestamp_ms, .. }) = self.history.back() else {
            return;
        };
        while let Some(first) = self.history.front() {
            if timestamp_ms <= first.timestamp_ms + HISTORY_LIMIT_MS {
                break;
            }
            let _ = self.history.pop_front();
        }
    }
}

/// End position of an exponential deceleration from `position` at
/// `velocity` ticks per second.
///
/// Integrates a per-millisecond velocity decay of [`DECELERATION`]; the
/// result is roughly `position + velocity / 3` for the default curve.
pub fn project(position: f64, velocity: f64) -> f64 {
    position - velocity / (1000.0 * DECELERATION.ln())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_from_uniform_samples() {
        let mut t = DragTracker::new();
        // Ten 0.5-tick samples at 10ms spacing: every delta counts, over the
        // 90ms spanned first-to-last, so 5.0 ticks / 0.09s.
        for i in 0..10 {
            t.push(0.5, i * 10);
        }
        assert!((t.velocity() - 500.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn velocity_empty_or_single_sample_is_zero() {
        let mut t = DragTracker::new();
        assert_eq!(t.velocity(), 0.0);
        t.push(1.0, 0);
        assert_eq!(t.velocity(), 0.0);
    }

    // Only the last 150ms of history matter; an old slow phase does not drag
    // the estimate down.
    #[test]
    fn stale_samples_are_trimmed() {
        let mut t = DragTracker::new();
        t.push(0.001, 0);
        for i in 0..5 {
            t.push(1.0, 1_000 + i * 10);
        }
        // Five in-window ticks over the 40ms spanned by them = 125 ticks/s;
        // the ancient near-zero sample no longer dilutes the estimate.
        assert!((t.velocity() - 125.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_order_sample_is_ignored() {
        let mut t = DragTracker::new();
        t.push(1.0, 100);
        t.push(1.0, 110);
        t.push(100.0, 50);
        t.push(1.0, 120);
        assert!((t.velocity() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn clear_resets_the_window() {
        let mut t = DragTracker::new();
        t.push(1.0, 0);
        t.push(1.0, 10);
        t.clear();
        assert_eq!(t.velocity(), 0.0);
    }

    // The projection carries forward in the direction of the velocity and is
    // proportional to it.
    #[test]
    fn projection_direction_and_scaling() {
        let forward = project(5.0, 3.0);
        let backward = project(5.0, -3.0);
        assert!(forward > 5.0);
        assert!(backward < 5.0);
        assert!((forward - 5.0) - (5.0 - backward) < 1e-12);
        let faster = project(5.0, 6.0);
        assert!(
            ((faster - 5.0) - 2.0 * (forward - 5.0)).abs() < 1e-9,
            "projection should scale linearly with velocity"
        );
    }

    #[test]
    fn zero_velocity_projects_in_place() {
        assert_eq!(project(7.0, 0.0), 7.0);
    }
}
