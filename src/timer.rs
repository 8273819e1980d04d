//! The countdown state machine.
//!
//! `Countdown` is plain data with no timers or storage attached, so every
//! transition can be exercised on the host. The component layer decides
//! when ticks arrive; this module only decides what a tick means.

use crate::config::SECONDS_PER_MINUTE;
use crate::utils::format_clock;
use log::debug;

/// Where the countdown is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not started, reset, or finished. Fields are editable.
    #[default]
    Idle,
    /// Counting down once per tick.
    Running,
    /// Started, then paused with time remaining.
    Paused,
    /// Just reached zero. Collapses to `Idle` once the expiry is acknowledged.
    Expired,
}

/// Result of delivering one tick to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was removed and time remains.
    Continued,
    /// The last second was removed on this tick.
    Expired,
    /// The countdown was not running; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Countdown {
    total_seconds: u32,
    phase: Phase,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a countdown from stored parts.
    ///
    /// An active phase with nothing left to count collapses to `Idle`, and
    /// `Expired` is never restored as such.
    pub fn from_parts(total_seconds: u32, phase: Phase) -> Self {
        let phase = match phase {
            Phase::Running | Phase::Paused if total_seconds == 0 => Phase::Idle,
            Phase::Expired => Phase::Idle,
            other => other,
        };
        Self {
            total_seconds,
            phase,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Displayed minutes, derived from the total.
    pub fn minutes(&self) -> u32 {
        self.total_seconds / SECONDS_PER_MINUTE
    }

    /// Displayed seconds, derived from the total.
    pub fn seconds(&self) -> u32 {
        self.total_seconds % SECONDS_PER_MINUTE
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// Whether an edit would be accepted. A paused countdown keeps its time
    /// until reset.
    pub fn can_edit(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Whether the input fields render as disabled.
    pub fn inputs_locked(&self) -> bool {
        !self.can_edit()
    }

    pub fn can_start(&self) -> bool {
        self.phase == Phase::Idle && self.total_seconds > 0
    }

    pub fn clock(&self) -> String {
        format_clock(self.total_seconds)
    }

    /// Replace the minutes field, keeping the displayed seconds.
    pub fn set_minutes(&mut self, minutes: u32) -> bool {
        if !self.can_edit() {
            return false;
        }
        self.total_seconds = combine(minutes, self.seconds());
        debug!("Minutes set to {}, total now {}s", minutes, self.total_seconds);
        true
    }

    /// Replace the seconds field, keeping the displayed minutes.
    ///
    /// Seconds are not clamped below 60; the excess carries into minutes on
    /// the next render.
    pub fn set_seconds(&mut self, seconds: u32) -> bool {
        if !self.can_edit() {
            return false;
        }
        self.total_seconds = combine(self.minutes(), seconds);
        debug!("Seconds set to {}, total now {}s", seconds, self.total_seconds);
        true
    }

    pub fn start(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused || self.total_seconds == 0 {
            return false;
        }
        self.phase = Phase::Running;
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }
        self.total_seconds = self.total_seconds.saturating_sub(1);
        if self.total_seconds == 0 {
            self.phase = Phase::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Continued
        }
    }

    /// Collapse `Expired` into `Idle` after the expiry has been announced.
    pub fn acknowledge_expiry(&mut self) {
        if self.phase == Phase::Expired {
            self.phase = Phase::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.total_seconds = 0;
        self.phase = Phase::Idle;
    }
}

fn combine(minutes: u32, seconds: u32) -> u32 {
    minutes
        .saturating_mul(SECONDS_PER_MINUTE)
        .saturating_add(seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn running(total: u32) -> Countdown {
        let mut timer = Countdown::new();
        timer.set_seconds(total);
        assert!(timer.start());
        timer
    }

    #[test]
    fn new_timer_is_idle_at_zero() {
        let timer = Countdown::new();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.total_seconds(), 0);
        assert_eq!(timer.clock(), "00:00");
        assert!(!timer.is_active());
        assert!(!timer.is_paused());
    }

    #[test]
    fn editing_minutes_keeps_seconds() {
        let mut timer = Countdown::new();
        assert!(timer.set_seconds(30));
        assert!(timer.set_minutes(5));
        assert_eq!(timer.total_seconds(), 330);
        assert_eq!((timer.minutes(), timer.seconds()), (5, 30));
    }

    #[test]
    fn editing_seconds_keeps_minutes() {
        let mut timer = Countdown::new();
        timer.set_minutes(2);
        timer.set_seconds(15);
        assert_eq!(timer.total_seconds(), 135);
        timer.set_seconds(0);
        assert_eq!(timer.total_seconds(), 120);
    }

    #[test]
    fn total_always_matches_fields_after_edits() {
        let mut timer = Countdown::new();
        for (minutes, seconds) in [(0, 0), (1, 59), (99, 59), (12, 7), (0, 45)] {
            timer.set_minutes(minutes);
            timer.set_seconds(seconds);
            assert_eq!(
                timer.total_seconds(),
                timer.minutes() * 60 + timer.seconds()
            );
            assert_eq!(timer.total_seconds(), minutes * 60 + seconds);
        }
    }

    #[test]
    fn oversized_seconds_carry_into_minutes() {
        let mut timer = Countdown::new();
        timer.set_minutes(1);
        timer.set_seconds(75);
        assert_eq!(timer.total_seconds(), 135);
        assert_eq!((timer.minutes(), timer.seconds()), (2, 15));
    }

    #[test]
    fn oversized_minutes_saturate() {
        let mut timer = Countdown::new();
        timer.set_minutes(u32::MAX);
        assert_eq!(timer.total_seconds(), u32::MAX);
    }

    #[test]
    fn start_at_zero_is_rejected() {
        let mut timer = Countdown::new();
        assert!(!timer.can_start());
        assert!(!timer.start());
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn tick_decrements_by_one() {
        let mut timer = running(3);
        assert_eq!(timer.tick(), TickOutcome::Continued);
        assert_eq!(timer.total_seconds(), 2);
        assert_eq!(timer.tick(), TickOutcome::Continued);
        assert_eq!(timer.total_seconds(), 1);
    }

    #[test]
    fn reaches_exactly_zero_then_expires() {
        let mut timer = running(2);
        timer.tick();
        assert_eq!(timer.tick(), TickOutcome::Expired);
        assert_eq!(timer.total_seconds(), 0);
        assert_eq!(timer.phase(), Phase::Expired);
        assert!(!timer.is_active());

        // Late ticks are ignored and never go negative.
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.total_seconds(), 0);

        timer.acknowledge_expiry();
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.clock(), "00:00");
    }

    #[test]
    fn pause_and_resume_preserve_total() {
        let mut timer = running(90);
        timer.tick();
        assert!(timer.pause());
        assert_eq!(timer.phase(), Phase::Paused);
        assert!(timer.is_active());
        assert!(timer.is_paused());

        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.total_seconds(), 89);

        assert!(timer.resume());
        assert_eq!(timer.total_seconds(), 89);
        assert_eq!(timer.tick(), TickOutcome::Continued);
        assert_eq!(timer.total_seconds(), 88);
    }

    #[test]
    fn edits_rejected_while_running_or_paused() {
        let mut timer = running(60);
        assert!(timer.inputs_locked());
        assert!(!timer.set_minutes(9));
        assert!(!timer.set_seconds(9));

        timer.pause();
        assert!(timer.inputs_locked());
        assert!(!timer.can_edit());
        assert!(!timer.set_minutes(9));
        assert_eq!(timer.total_seconds(), 60);
    }

    #[test]
    fn illegal_transitions_are_no_ops() {
        let mut timer = Countdown::new();
        assert!(!timer.pause());
        assert!(!timer.resume());

        let mut timer = running(10);
        assert!(!timer.start());
        assert!(!timer.resume());
        timer.pause();
        assert!(!timer.pause());
        assert!(!timer.start());
    }

    #[test]
    fn reset_from_any_phase() {
        for mut timer in [running(10), Countdown::from_parts(10, Phase::Paused), Countdown::new()] {
            timer.reset();
            assert_eq!(timer, Countdown::new());
        }
    }

    #[test]
    fn from_parts_collapses_empty_active_phases() {
        assert_eq!(Countdown::from_parts(0, Phase::Running).phase(), Phase::Idle);
        assert_eq!(Countdown::from_parts(0, Phase::Paused).phase(), Phase::Idle);
        assert_eq!(Countdown::from_parts(5, Phase::Expired).phase(), Phase::Idle);
        assert_eq!(Countdown::from_parts(45, Phase::Paused).phase(), Phase::Paused);
    }

    #[test]
    fn restart_after_expiry_uses_new_edit() {
        let mut timer = running(1);
        timer.tick();
        timer.acknowledge_expiry();
        timer.set_minutes(1);
        assert!(timer.start());
        assert_eq!(timer.total_seconds(), 60);
    }
}
