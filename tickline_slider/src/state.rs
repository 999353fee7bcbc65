// Copyright 2025 the Tickline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Motion state machine: the authoritative slider position.
//!
//! ## Overview
//!
//! [`SliderState`] is a finite state machine over
//! [`Idle`](Phase::Idle) / [`Dragging`](Phase::Dragging) /
//! [`Decaying`](Phase::Decaying) with a continuous `position` payload.
//! Drag samples write the position immediately through
//! [`snap_to`](SliderState::snap_to); a released fling resolves an effective
//! target and animates toward it through [`decay_to`](SliderState::decay_to)
//! and host-driven [`step`](SliderState::step) calls.
//!
//! ## Envelopes and targets
//!
//! Drag writes clamp into a slack envelope half a tick beyond the domain
//! (`[min - 0.5, max + 0.5]`), widened to `[min - 0.5, 2·max + 0.5]` when the
//! extended tick is active so the extra virtual tick can be dragged into.
//! Decay targets are resolved from the ballistic projection: clamped for
//! free-form sliders, rounded to the nearest whole tick for snapping ones,
//! with a midpoint rule deciding between the last regular tick and the
//! extended end when a fling carries past `floor(max) - 1`.
//!
//! ## Animation model
//!
//! There is no thread or timer here. The host drives the decay one frame at
//! a time via [`step`](SliderState::step) with an elapsed-time delta; a new
//! drag or [`stop`](SliderState::stop) cancels the trajectory synchronously,
//! freezing the position wherever it was.

#[cfg(not(feature = "std"))]
use crate::common::FloatExt;
use crate::types::{ConfigError, Phase};
use tickline_scale::Interval;

/// Slack beyond the domain that a drag may reach before clamping.
const DRAG_SLACK: f64 = 0.5;

/// Decay duration when the release velocity is effectively zero.
const DEFAULT_DECAY_MS: f64 = 300.0;
/// Shortest allowed decay, so fast flings still animate visibly.
const MIN_DECAY_MS: f64 = 80.0;
/// Longest allowed decay, so slow releases do not crawl.
const MAX_DECAY_MS: f64 = 600.0;

/// An in-flight linear decay trajectory.
#[derive(Copy, Clone, Debug)]
struct Decay {
    from: f64,
    target: f64,
    duration_ms: f64,
    elapsed_ms: f64,
}

/// Persisted slider state: the tuple a host may save across restarts.
///
/// Restore with [`SliderState::restore`], which re-validates the domain and
/// re-clamps the position rather than trusting the stored values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Position at save time.
    pub position: f64,
    /// Domain lower bound.
    pub min: f64,
    /// Domain upper bound.
    pub max: f64,
    /// Whether decay targets snap to whole ticks.
    pub snap_to_integer: bool,
    /// Whether the extended virtual tick is active.
    pub extended_tick: bool,
}

/// The motion state machine.
///
/// Owns `position` exclusively: callers never write it directly, only through
/// [`snap_to`](Self::snap_to), [`decay_to`](Self::decay_to) +
/// [`step`](Self::step), and [`stop`](Self::stop).
#[derive(Clone, Debug)]
pub struct SliderState {
    position: f64,
    min: f64,
    max: f64,
    snap_to_integer: bool,
    extended_tick: bool,
    phase: Phase,
    settled: bool,
    haptic_armed: bool,
    decay: Option<Decay>,
}

impl SliderState {
    /// Create a state machine over `domain`, resting at `initial`.
    ///
    /// Fails on an empty domain (`max <= min`). When `snap_to_integer` is
    /// set, the initial position is normalized onto the nearest whole tick
    /// immediately, without animation.
    pub fn new(
        initial: f64,
        domain: Interval,
        snap_to_integer: bool,
        extended_tick: bool,
    ) -> Result<Self, ConfigError> {
        let (min, max) = (domain.start(), domain.end());
        if max <= min {
            return Err(ConfigError::InvalidDomain { min, max });
        }
        let mut state = Self {
            position: 0.0,
            min,
            max,
            snap_to_integer,
            extended_tick,
            phase: Phase::Idle,
            settled: true,
            haptic_armed: false,
            decay: None,
        };
        let start = if snap_to_integer {
            initial.round()
        } else {
            initial
        };
        state.snap_to(start);
        state.settled = true;
        Ok(state)
    }

    /// Current position, possibly mid-trajectory.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a decay has run to completion and nothing moved it since.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// True when a drag has armed haptic feedback.
    pub fn haptic_armed(&self) -> bool {
        self.haptic_armed
    }

    /// Arm haptic feedback without a drag (used by tap-driven sliders).
    pub fn arm_haptic(&mut self) {
        self.haptic_armed = true;
    }

    /// Begin a drag: cancel any decay, arm haptics, enter
    /// [`Dragging`](Phase::Dragging).
    pub fn begin_drag(&mut self) {
        self.stop();
        self.phase = Phase::Dragging;
        self.haptic_armed = true;
    }

    /// Immediately write `value` (clamped to the drag envelope), cancelling
    /// any in-flight decay. No easing.
    ///
    /// Out-of-envelope input is never an error; it clamps:
    ///
    /// ```rust
    /// use tickline_scale::Interval;
    /// use tickline_slider::SliderState;
    ///
    /// let mut state = SliderState::new(0.0, Interval::new(0.0, 15.0)?, false, false)?;
    /// state.snap_to(1.0e9);
    /// assert_eq!(state.position(), 15.5);
    /// state.snap_to(-1.0e9);
    /// assert_eq!(state.position(), -0.5);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn snap_to(&mut self, value: f64) {
        if self.decay.take().is_some() {
            self.phase = Phase::Idle;
        }
        let (lo, hi) = self.drag_envelope();
        self.position = value.clamp(lo, hi);
        self.settled = false;
    }

    /// Start a decay from the current position.
    ///
    /// `velocity` is the release velocity in ticks per second (its magnitude
    /// seeds the trajectory duration); `ballistic_target` is the projected
    /// end position from the deceleration curve. The effective target is
    /// resolved per the snapping and extended-tick configuration, then the
    /// position animates linearly toward it until [`step`](Self::step)
    /// reports completion or the decay is cancelled.
    pub fn decay_to(&mut self, velocity: f64, ballistic_target: f64) {
        let target = self.resolve_target(ballistic_target);
        let distance = target - self.position;
        let duration_ms = if velocity.abs() > f64::EPSILON {
            ((distance / velocity).abs() * 1000.0).clamp(MIN_DECAY_MS, MAX_DECAY_MS)
        } else {
            DEFAULT_DECAY_MS
        };
        self.decay = Some(Decay {
            from: self.position,
            target,
            duration_ms,
            elapsed_ms: 0.0,
        });
        self.phase = Phase::Decaying;
        self.settled = false;
    }

    /// Advance the decay by `dt_ms` elapsed milliseconds and return the new
    /// position. A no-op outside [`Decaying`](Phase::Decaying).
    ///
    /// Linear easing: each step moves proportionally to elapsed time, never
    /// overshooting the target. On completion the machine settles and returns
    /// to [`Idle`](Phase::Idle).
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        if let Some(decay) = &mut self.decay {
            decay.elapsed_ms += dt_ms.max(0.0);
            if decay.elapsed_ms >= decay.duration_ms {
                self.position = decay.target;
                self.decay = None;
                self.phase = Phase::Idle;
                self.settled = true;
            } else {
                let t = decay.elapsed_ms / decay.duration_ms;
                self.position = decay.from + (decay.target - decay.from) * t;
            }
        }
        self.position
    }

    /// Halt any in-progress decay, leaving the position at its current
    /// (possibly mid-trajectory) value. Valid from any state.
    pub fn stop(&mut self) {
        self.decay = None;
        self.phase = Phase::Idle;
    }

    /// Domain lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Domain upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Persist the state as a [`Snapshot`] tuple.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            min: self.min,
            max: self.max,
            snap_to_integer: self.snap_to_integer,
            extended_tick: self.extended_tick,
        }
    }

    /// Rebuild a state machine from a [`Snapshot`].
    ///
    /// Rejects non-finite or inverted domain bounds and non-finite positions
    /// instead of trusting the stored tuple; the position is re-clamped into
    /// the envelope on the way in.
    pub fn restore(snapshot: Snapshot) -> Result<Self, ConfigError> {
        if !snapshot.position.is_finite() {
            return Err(ConfigError::NonFinitePosition {
                position: snapshot.position,
            });
        }
        let domain = Interval::new(snapshot.min, snapshot.max)?;
        let mut state = Self::new(
            snapshot.position,
            domain,
            snapshot.snap_to_integer,
            snapshot.extended_tick,
        )?;
        state.settled = true;
        Ok(state)
    }

    /// The allowed drag envelope: half a tick of slack beyond the domain,
    /// doubled past the end when the extended tick is active.
    fn drag_envelope(&self) -> (f64, f64) {
        if self.extended_tick {
            (self.min - DRAG_SLACK, 2.0 * self.max + DRAG_SLACK)
        } else {
            (self.min - DRAG_SLACK, self.max + DRAG_SLACK)
        }
    }

    /// Resolve the effective decay target from a ballistic projection.
    fn resolve_target(&self, value: f64) -> f64 {
        if self.snap_to_integer {
            let last_regular = self.max.floor() - 1.0;
            if self.extended_tick && value > last_regular {
                // Does the fling carry far enough to commit to the extra
                // tick, or does it settle back onto the last regular one?
                // Decided by the midpoint between the two resting spots.
                let midpoint = self.max - (self.max - last_regular) / 2.0;
                if value > midpoint { self.max } else { last_regular }
            } else {
                value.round().clamp(self.min.floor(), self.max.floor())
            }
        } else if self.extended_tick {
            value.clamp(self.min - DRAG_SLACK, 2.0 * self.max + DRAG_SLACK)
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(snap: bool, extended: bool) -> SliderState {
        SliderState::new(0.0, Interval::new(0.0, 15.0).unwrap(), snap, extended).unwrap()
    }

    #[test]
    fn rejects_empty_domain() {
        let domain = Interval::new(3.0, 3.0).unwrap();
        assert_eq!(
            SliderState::new(0.0, domain, false, false).map(|_| ()),
            Err(ConfigError::InvalidDomain { min: 3.0, max: 3.0 })
        );
    }

    // snap_to always lands inside the envelope for any finite input.
    #[test]
    fn snap_to_clamps_to_envelope() {
        let mut s = state(false, false);
        for v in [-1.0e12, -0.6, 0.0, 7.3, 15.4, 16.0, 1.0e12] {
            s.snap_to(v);
            assert!(
                (-0.5..=15.5).contains(&s.position()),
                "{v} escaped the envelope: {}",
                s.position()
            );
        }
    }

    #[test]
    fn extended_envelope_is_wider() {
        let mut s = state(false, true);
        s.snap_to(1.0e9);
        assert_eq!(s.position(), 2.0 * 15.0 + 0.5);
        s.snap_to(-1.0e9);
        assert_eq!(s.position(), -0.5);
    }

    // Auto-snap: a snapping slider normalizes its initial position onto a
    // whole tick at construction, without animation.
    #[test]
    fn snapping_construction_rounds_initial() {
        let s =
            SliderState::new(6.7, Interval::new(0.0, 15.0).unwrap(), true, false).unwrap();
        assert_eq!(s.position(), 7.0);
        assert_eq!(s.phase(), Phase::Idle);
    }

    // Spec'd fling: ballistic target 7.3 with snapping settles at exactly 7.
    #[test]
    fn decay_snaps_to_nearest_tick() {
        let mut s = state(true, false);
        s.begin_drag();
        s.snap_to(6.0);
        s.decay_to(2.0, 7.3);
        assert_eq!(s.phase(), Phase::Decaying);
        // Run well past any allowed duration.
        s.step(10_000.0);
        assert_eq!(s.position(), 7.0);
        assert_eq!(s.phase(), Phase::Idle);
        assert!(s.is_settled());
    }

    #[test]
    fn decay_without_snap_clamps_target() {
        let mut s = state(false, false);
        s.snap_to(14.0);
        s.decay_to(5.0, 99.0);
        s.step(10_000.0);
        assert_eq!(s.position(), 15.0);
    }

    // Extended midpoint rule on domain 0..42: ballistic 41.9 is closer to 42
    // than to 41, so the fling commits to the full extra tick.
    #[test]
    fn extended_fling_commits_past_midpoint() {
        let domain = Interval::new(0.0, 42.0).unwrap();
        let mut s = SliderState::new(40.0, domain, true, true).unwrap();
        s.decay_to(3.0, 41.9);
        s.step(10_000.0);
        assert_eq!(s.position(), 42.0);
    }

    #[test]
    fn extended_fling_settles_back_before_midpoint() {
        let domain = Interval::new(0.0, 42.0).unwrap();
        let mut s = SliderState::new(40.0, domain, true, true).unwrap();
        s.decay_to(3.0, 41.2);
        s.step(10_000.0);
        assert_eq!(s.position(), 41.0);
    }

    // Monotone convergence: sampling during one uninterrupted decay yields a
    // sequence approaching the target with no overshoot.
    #[test]
    fn decay_converges_monotonically() {
        let mut s = state(false, false);
        s.snap_to(2.0);
        s.decay_to(4.0, 10.0);
        let mut last = s.position();
        for _ in 0..200 {
            let pos = s.step(5.0);
            assert!(pos >= last, "position moved backwards: {last} -> {pos}");
            assert!(pos <= 10.0, "overshot the target: {pos}");
            last = pos;
        }
        assert_eq!(last, 10.0);
        assert!(s.is_settled());
    }

    #[test]
    fn stop_freezes_mid_trajectory() {
        let mut s = state(false, false);
        s.snap_to(0.0);
        s.decay_to(4.0, 10.0);
        s.step(50.0);
        let frozen = s.position();
        assert!(frozen > 0.0 && frozen < 10.0, "expected a midpoint");
        s.stop();
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(s.position(), frozen);
        assert!(!s.is_settled());
        // Further steps are no-ops once stopped.
        assert_eq!(s.step(1_000.0), frozen);
    }

    #[test]
    fn new_drag_interrupts_decay() {
        let mut s = state(false, false);
        s.decay_to(4.0, 10.0);
        s.step(50.0);
        s.begin_drag();
        assert_eq!(s.phase(), Phase::Dragging);
        assert!(s.haptic_armed());
        let held = s.position();
        assert_eq!(s.step(1_000.0), held);
    }

    #[test]
    fn zero_velocity_uses_default_duration() {
        let mut s = state(false, false);
        s.decay_to(0.0, 10.0);
        // Half the default duration covers half the distance (linear easing).
        let pos = s.step(DEFAULT_DECAY_MS / 2.0);
        assert!((pos - 5.0).abs() < 1e-9, "expected midpoint, got {pos}");
    }

    #[test]
    fn snapshot_round_trips() {
        let mut s = state(true, false);
        s.snap_to(9.0);
        let snap = s.snapshot();
        let restored = SliderState::restore(snap).unwrap();
        assert_eq!(restored.position(), 9.0);
        assert_eq!(restored.snapshot(), snap);
    }

    #[test]
    fn restore_rejects_bad_tuples() {
        let good = state(false, false).snapshot();
        assert!(SliderState::restore(Snapshot {
            position: f64::NAN,
            ..good
        })
        .is_err());
        assert!(SliderState::restore(Snapshot {
            min: 10.0,
            max: 10.0,
            ..good
        })
        .is_err());
        assert!(SliderState::restore(Snapshot {
            min: f64::INFINITY,
            ..good
        })
        .is_err());
    }

    // Restored positions outside the envelope are clamped, not trusted.
    #[test]
    fn restore_reclamps_position() {
        let restored = SliderState::restore(Snapshot {
            position: 40.0,
            min: 0.0,
            max: 15.0,
            snap_to_integer: false,
            extended_tick: false,
        })
        .unwrap();
        assert_eq!(restored.position(), 15.5);
    }
}
