//! Ties the countdown to session storage.
//!
//! Every accepted transition persists the new state before returning, except
//! reset which erases the entry. Storage failures are logged and absorbed:
//! the in-memory countdown is always the source of truth.

use crate::config::STORAGE_KEY;
use crate::snapshot::TimerSnapshot;
use crate::storage::SessionStore;
use crate::timer::{Countdown, Phase, TickOutcome};
use crate::utils::coerce_field_input;
use log::{debug, info, warn};

/// What the caller has to do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The request was not legal in the current phase; nothing changed.
    Rejected,
    /// State changed; the tick stream (if any) stays as it is.
    Updated,
    /// Entered `Running`: (re)arm the one-second tick.
    StartTicking,
    /// Left `Running` by pause or reset: cancel the tick.
    StopTicking,
    /// Reached zero: cancel the tick and announce expiry.
    Expired,
}

impl Transition {
    pub fn starts_ticking(self) -> bool {
        self == Transition::StartTicking
    }

    pub fn stops_ticking(self) -> bool {
        matches!(self, Transition::StopTicking | Transition::Expired)
    }

    pub fn notifies(self) -> bool {
        self == Transition::Expired
    }
}

pub struct TimerController<S: SessionStore> {
    timer: Countdown,
    store: S,
}

impl<S: SessionStore> TimerController<S> {
    /// A fresh idle controller that does not look at stored state.
    pub fn new(store: S) -> Self {
        Self {
            timer: Countdown::new(),
            store,
        }
    }

    /// Build a controller from whatever the store holds.
    ///
    /// Returns `StartTicking` when the restored countdown was running, so the
    /// caller resumes it straight away.
    pub fn restore(store: S) -> (Self, Transition) {
        let mut controller = Self::new(store);
        let Some(snapshot) = controller.load_snapshot() else {
            return (controller, Transition::Updated);
        };

        controller.timer = snapshot.into_countdown();
        if TimerSnapshot::from(&controller.timer) != snapshot {
            // Active with nothing left; store the collapsed idle form.
            controller.persist();
        }

        info!(
            "Restored countdown at {} ({:?})",
            controller.timer.clock(),
            controller.timer.phase()
        );
        let transition = if controller.timer.phase() == Phase::Running {
            Transition::StartTicking
        } else {
            Transition::Updated
        };
        (controller, transition)
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn edit_minutes(&mut self, raw: &str) -> Transition {
        let minutes = coerce_field_input(raw);
        self.accept(|timer| timer.set_minutes(minutes), Transition::Updated)
    }

    pub fn edit_seconds(&mut self, raw: &str) -> Transition {
        let seconds = coerce_field_input(raw);
        self.accept(|timer| timer.set_seconds(seconds), Transition::Updated)
    }

    pub fn start(&mut self) -> Transition {
        let transition = self.accept(Countdown::start, Transition::StartTicking);
        if transition.starts_ticking() {
            info!("Countdown started at {}", self.timer.clock());
        }
        transition
    }

    pub fn pause(&mut self) -> Transition {
        self.accept(Countdown::pause, Transition::StopTicking)
    }

    pub fn resume(&mut self) -> Transition {
        self.accept(Countdown::resume, Transition::StartTicking)
    }

    /// The Pause/Resume button.
    pub fn toggle_pause(&mut self) -> Transition {
        match self.timer.phase() {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            _ => Transition::Rejected,
        }
    }

    pub fn tick(&mut self) -> Transition {
        match self.timer.tick() {
            TickOutcome::Ignored => Transition::Rejected,
            TickOutcome::Continued => {
                debug!("Tick: {} remaining", self.timer.clock());
                self.persist();
                Transition::Updated
            }
            TickOutcome::Expired => {
                info!("Countdown expired");
                self.timer.acknowledge_expiry();
                self.persist();
                Transition::Expired
            }
        }
    }

    /// Zero the countdown and erase the stored entry entirely.
    pub fn reset(&mut self) -> Transition {
        let was = self.timer.phase();
        self.timer.reset();
        self.erase();
        info!("Countdown reset from {:?}", was);
        Transition::StopTicking
    }

    fn accept(
        &mut self,
        apply: impl FnOnce(&mut Countdown) -> bool,
        on_success: Transition,
    ) -> Transition {
        if !apply(&mut self.timer) {
            debug!("Ignored request in phase {:?}", self.timer.phase());
            return Transition::Rejected;
        }
        self.persist();
        on_success
    }

    fn load_snapshot(&self) -> Option<TimerSnapshot> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Could not read saved countdown: {}", e);
                self.erase();
                return None;
            }
        };
        match TimerSnapshot::decode(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Discarding saved countdown: {}", e);
                self.erase();
                None
            }
        }
    }

    fn persist(&self) {
        let encoded = match TimerSnapshot::from(&self.timer).encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!("Could not encode countdown: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(STORAGE_KEY, &encoded) {
            warn!("Countdown not persisted this cycle: {}", e);
        }
    }

    fn erase(&self) {
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            warn!("Could not remove saved countdown: {}", e);
        }
    }
}
