use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

/// Lifecycle of one waitlist signup. One-shot per page load: nothing leads
/// back out of `Submitted`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionState {
    /// A submit attempt is honored only from `Idle` with a non-empty email.
    pub fn can_begin(self, email: &str) -> bool {
        self == Self::Idle && !email.is_empty()
    }

    /// The email field is frozen from the first accepted submit onward.
    pub fn accepts_input(self) -> bool {
        self == Self::Idle
    }

    pub fn in_flight(self) -> bool {
        self == Self::Submitting
    }

    pub fn settled(self) -> bool {
        self == Self::Submitted
    }
}

/// Body a future signup endpoint would receive. Serialized into the debug log
/// in place of a network call; nothing leaves the process.
#[derive(Serialize)]
struct WaitlistRequest {
    email: String,
}

#[function_component(Waitlist)]
pub fn waitlist() -> Html {
    let email = use_state(String::new);
    let status = use_state(|| SubmissionState::Idle);

    let oninput = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            if !status.accepts_input() {
                return;
            }
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !status.can_begin(&email) {
                return;
            }
            status.set(SubmissionState::Submitting);
            let status = status.clone();
            let request = WaitlistRequest {
                email: (*email).clone(),
            };
            spawn_local(async move {
                match serde_json::to_string(&request) {
                    Ok(body) => log::debug!("waitlist signup (simulated): {body}"),
                    Err(err) => {
                        gloo_console::error!("waitlist payload failed to serialize:", err.to_string());
                    }
                }
                gloo_timers::future::TimeoutFuture::new(config::WAITLIST_LATENCY_MS).await;
                status.set(SubmissionState::Submitted);
            });
        })
    };

    html! {
        <section id="waitlist" class="waitlist-section">
            <div class="section-gradient"></div>
            <Reveal>
                <h2>{"Get Early Access"}</h2>
            </Reveal>
            <Reveal delay_ms={60}>
                <p class="waitlist-subline">
                    {"Be the first to experience personalized local discovery when we launch."}
                </p>
            </Reveal>
            <div class="waitlist-box">
                if status.settled() {
                    <div class="waitlist-success">
                        <div class="waitlist-success-sweep"></div>
                        <div class="waitlist-success-row">
                            <div class="waitlist-success-bead"></div>
                            <div>
                                <h3>{"You're on the list!"}</h3>
                                <p>{"We'll notify you when LocalConnect goes live."}</p>
                            </div>
                        </div>
                    </div>
                } else {
                    <form class="waitlist-form" onsubmit={onsubmit}>
                        <input
                            type="email"
                            required=true
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            disabled={!status.accepts_input()}
                            oninput={oninput}
                        />
                        <button type="submit" disabled={status.in_flight()}>
                            { if status.in_flight() { "Submitting…" } else { "Get Early Access" } }
                        </button>
                    </form>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::SubmissionState::{self, Idle, Submitted, Submitting};

    #[test]
    fn empty_email_never_begins() {
        for state in [Idle, Submitting, Submitted] {
            assert!(!state.can_begin(""));
        }
    }

    #[test]
    fn begin_is_exclusive_to_idle() {
        assert!(Idle.can_begin("a@b.com"));
        assert!(!Submitting.can_begin("a@b.com"));
        assert!(!Submitted.can_begin("a@b.com"));
    }

    #[test]
    fn email_freezes_once_submission_starts() {
        assert!(Idle.accepts_input());
        assert!(!Submitting.accepts_input());
        assert!(!Submitted.accepts_input());
    }

    #[test]
    fn one_shot_lifecycle() {
        // Idle -> Submitting -> Submitted, with no way back to the form.
        let mut state = SubmissionState::Idle;
        assert!(state.can_begin("a@b.com"));

        state = SubmissionState::Submitting;
        assert!(state.in_flight());
        assert!(!state.can_begin("a@b.com"));

        state = SubmissionState::Submitted;
        assert!(state.settled());
        assert!(!state.can_begin("a@b.com"));
        assert!(!state.accepts_input());
        assert!(!state.in_flight());
    }
}
