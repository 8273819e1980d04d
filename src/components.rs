//! Yew view components for the countdown widget.
//!
//! Everything here renders from props. Visibility and enabled-state rules
//! live in [`ControlState`] so they can be checked without a browser.

use crate::config::{
    MINUTES_CAPTION, MINUTES_DISPLAY_MAX, PAUSE_LABEL, RESET_LABEL, RESUME_LABEL,
    SECONDS_CAPTION, SECONDS_DISPLAY_MAX, START_LABEL, TITLE,
};
use crate::hooks::use_countdown;
use crate::notification::Notice;
use crate::timer::{Countdown, Phase};
use crate::utils::format_two_digits;
use yew::prelude::*;

/// Which controls are showing and whether they can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub show_start: bool,
    pub start_enabled: bool,
    /// `Pause` or `Resume`; `None` hides the button.
    pub pause_label: Option<&'static str>,
    pub inputs_disabled: bool,
}

impl From<&Countdown> for ControlState {
    fn from(timer: &Countdown) -> Self {
        let pause_label = match timer.phase() {
            Phase::Running => Some(PAUSE_LABEL),
            Phase::Paused => Some(RESUME_LABEL),
            Phase::Idle | Phase::Expired => None,
        };
        Self {
            show_start: !timer.is_active(),
            start_enabled: timer.can_start(),
            pause_label,
            inputs_disabled: timer.inputs_locked(),
        }
    }
}

/// One numeric field with its caption underneath.
#[derive(Properties, PartialEq)]
pub struct TimeFieldProps {
    pub id: AttrValue,
    pub caption: AttrValue,
    pub value: u32,
    pub max: u32,
    pub disabled: bool,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TimeField)]
pub fn time_field(props: &TimeFieldProps) -> Html {
    html! {
        <div class="time-field">
            <input type="number"
                id={props.id.clone()}
                min="0"
                max={props.max.to_string()}
                value={format_two_digits(props.value)}
                disabled={props.disabled}
                oninput={props.oninput.clone()}
            />
            <label for={props.id.clone()} class="time-field-caption">{ props.caption.clone() }</label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerControlsProps {
    pub state: ControlState,
    pub on_start: Callback<MouseEvent>,
    pub on_toggle_pause: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

/// Start, Pause/Resume and Reset.
#[function_component(TimerControls)]
pub fn timer_controls(props: &TimerControlsProps) -> Html {
    let state = props.state;
    html! {
        <div class="timer-controls">
            if state.show_start {
                <button class="btn btn-start"
                    disabled={!state.start_enabled}
                    onclick={props.on_start.clone()}
                >
                    { START_LABEL }
                </button>
            }
            if let Some(label) = state.pause_label {
                <button class="btn btn-pause" onclick={props.on_toggle_pause.clone()}>
                    { label }
                </button>
            }
            <button class="btn btn-reset" onclick={props.on_reset.clone()}>
                { RESET_LABEL }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
}

/// Top-center, high-contrast toast. Dismissal is timed by the owner.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div class="toaster">
            if let Some(notice) = &props.notice {
                <div key={notice.id.to_string()} class="toast toast-success" role="status">
                    <span class="toast-icon">{ notice.icon }</span>
                    <span class="toast-message">{ notice.message }</span>
                </div>
            }
        </div>
    }
}

/// The whole widget: fields, controls and the expiration toast.
#[function_component(CountdownTimer)]
pub fn countdown_timer() -> Html {
    let countdown = use_countdown();
    let state = ControlState::from(&countdown.timer);

    html! {
        <div class="timer-page">
            <Toast notice={countdown.notice.clone()} />
            <div class="timer-card">
                <h1 class="timer-title">{ TITLE }</h1>
                <div class="timer-fields">
                    <TimeField
                        id="minutes"
                        caption={MINUTES_CAPTION}
                        value={countdown.timer.minutes()}
                        max={MINUTES_DISPLAY_MAX}
                        disabled={state.inputs_disabled}
                        oninput={countdown.on_minutes_input.clone()}
                    />
                    <span class="timer-separator">{ ":" }</span>
                    <TimeField
                        id="seconds"
                        caption={SECONDS_CAPTION}
                        value={countdown.timer.seconds()}
                        max={SECONDS_DISPLAY_MAX}
                        disabled={state.inputs_disabled}
                        oninput={countdown.on_seconds_input.clone()}
                    />
                </div>
                <TimerControls
                    {state}
                    on_start={countdown.on_start.clone()}
                    on_toggle_pause={countdown.on_toggle_pause.clone()}
                    on_reset={countdown.on_reset.clone()}
                />
            </div>
        </div>
    }
}
