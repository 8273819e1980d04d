use crate::config::{STORAGE_KEY, TICK_INTERVAL_MS};
use crate::controller::{TimerController, Transition};
use crate::notification::Notice;
use crate::storage::{BrowserSessionStorage, MemoryStore, SessionStore};
use crate::ticker::TickSlot;
use crate::timer::Countdown;
use crate::utils::format_two_digits;
use gloo_timers::callback::{Interval, Timeout};
use log::warn;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

type Controller = TimerController<Box<dyn SessionStore>>;

/// Everything the countdown view needs for one render.
#[derive(Clone)]
pub struct CountdownHandle {
    /// Copy of the countdown as of this render.
    pub timer: Countdown,
    /// The toast currently on screen, if any.
    pub notice: Option<Notice>,
    pub on_minutes_input: Callback<InputEvent>,
    pub on_seconds_input: Callback<InputEvent>,
    pub on_start: Callback<MouseEvent>,
    pub on_toggle_pause: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

/// Per-instance state shared between callbacks and the running interval.
#[derive(Clone)]
struct Widget {
    controller: Rc<RefCell<Controller>>,
    ticker: Rc<RefCell<TickSlot<Interval>>>,
    toast_timer: Rc<RefCell<TickSlot<Timeout>>>,
    notice_seq: Rc<Cell<u64>>,
    notice: UseStateHandle<Option<Notice>>,
    redraw: UseForceUpdateHandle,
}

impl Widget {
    /// Carry out what a transition asks of the tick stream and the toast.
    fn apply(&self, transition: Transition) {
        if transition.stops_ticking() {
            self.ticker.borrow_mut().disarm();
        }
        if transition.starts_ticking() {
            let widget = self.clone();
            self.ticker
                .borrow_mut()
                .arm(move || Interval::new(TICK_INTERVAL_MS, move || widget.on_tick()));
        }
        if transition.notifies() {
            self.announce_expiry();
        }
        // Also on Rejected, so the fields snap back to the authoritative total.
        self.redraw.force_update();
    }

    fn on_tick(&self) {
        let transition = self.controller.borrow_mut().tick();
        self.apply(transition);
    }

    fn announce_expiry(&self) {
        let id = self.notice_seq.get() + 1;
        self.notice_seq.set(id);
        let notice = Notice::expiration(id);
        let duration_ms = notice.duration_ms;
        self.notice.set(Some(notice));

        let notice_handle = self.notice.clone();
        self.toast_timer
            .borrow_mut()
            .arm(move || Timeout::new(duration_ms, move || notice_handle.set(None)));
    }

    fn edit(
        &self,
        e: InputEvent,
        apply: fn(&mut Controller, &str) -> Transition,
        field: fn(&Countdown) -> u32,
    ) {
        let input: HtmlInputElement = e.target_unchecked_into();
        let transition = apply(&mut self.controller.borrow_mut(), &input.value());
        // Rewrite the element directly: when the coerced value renders the same
        // as before, the vdom diff alone would leave the raw text in place.
        input.set_value(&format_two_digits(field(self.controller.borrow().timer())));
        self.apply(transition);
    }

    fn teardown(&self) {
        self.ticker.borrow_mut().disarm();
        self.toast_timer.borrow_mut().disarm();
    }
}

fn open_store() -> Box<dyn SessionStore> {
    match BrowserSessionStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn!("{}; `{}` will not survive a reload", e, STORAGE_KEY);
            Box::new(MemoryStore::new())
        }
    }
}

/// Custom hook owning one countdown for the lifetime of the component.
///
/// On mount the saved snapshot (if any) is restored and a running countdown
/// resumes ticking. On unmount the tick and any pending toast dismissal are
/// cancelled.
#[hook]
pub fn use_countdown() -> CountdownHandle {
    // Placeholder until the mount effect restores from session storage.
    let controller = use_mut_ref(|| {
        let store: Box<dyn SessionStore> = Box::new(MemoryStore::new());
        TimerController::new(store)
    });
    let ticker = use_mut_ref(TickSlot::<Interval>::new);
    let toast_timer = use_mut_ref(TickSlot::<Timeout>::new);
    let notice_seq = use_memo((), |_| Cell::new(0u64));
    let notice = use_state(|| None::<Notice>);
    let redraw = use_force_update();

    let widget = Widget {
        controller,
        ticker,
        toast_timer,
        notice_seq,
        notice,
        redraw,
    };

    // Restore on mount, cancel everything on unmount
    {
        let widget = widget.clone();
        use_effect_with((), move |_| {
            let (restored, transition) = TimerController::restore(open_store());
            *widget.controller.borrow_mut() = restored;
            widget.apply(transition);
            move || widget.teardown()
        });
    }

    let on_minutes_input = {
        let widget = widget.clone();
        Callback::from(move |e: InputEvent| {
            widget.edit(e, Controller::edit_minutes, Countdown::minutes)
        })
    };

    let on_seconds_input = {
        let widget = widget.clone();
        Callback::from(move |e: InputEvent| {
            widget.edit(e, Controller::edit_seconds, Countdown::seconds)
        })
    };

    let on_start = {
        let widget = widget.clone();
        Callback::from(move |_: MouseEvent| {
            let transition = widget.controller.borrow_mut().start();
            widget.apply(transition);
        })
    };

    let on_toggle_pause = {
        let widget = widget.clone();
        Callback::from(move |_: MouseEvent| {
            let transition = widget.controller.borrow_mut().toggle_pause();
            widget.apply(transition);
        })
    };

    let on_reset = {
        let widget = widget.clone();
        Callback::from(move |_: MouseEvent| {
            let transition = widget.controller.borrow_mut().reset();
            widget.apply(transition);
        })
    };

    let timer = widget.controller.borrow().timer().clone();
    CountdownHandle {
        timer,
        notice: (*widget.notice).clone(),
        on_minutes_input,
        on_seconds_input,
        on_start,
        on_toggle_pause,
        on_reset,
    }
}
