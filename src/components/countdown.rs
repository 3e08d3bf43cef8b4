use chrono::{DateTime, Days, Local, TimeZone};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;

/// Instant the countdown runs against: `now` plus the configured number of
/// calendar days. The component passes local time; tests pass UTC.
pub fn launch_target<Tz: TimeZone>(now: DateTime<Tz>) -> DateTime<Tz> {
    now.clone()
        .checked_add_days(Days::new(config::LAUNCH_WINDOW_DAYS))
        .unwrap_or(now)
}

/// Remaining time rendered as `"{d}d {h}h {m}m {s}s"`, or the terminal copy
/// once the target has passed.
pub fn remaining_label<Tz: TimeZone>(target: DateTime<Tz>, now: DateTime<Tz>) -> String {
    let diff = target.signed_duration_since(now).num_seconds();
    if diff <= 0 {
        return "Launching very soon".to_string();
    }
    let days = diff / 86_400;
    let hours = (diff / 3_600) % 24;
    let minutes = (diff / 60) % 60;
    let seconds = diff % 60;
    format!("{days}d {hours}h {minutes}m {seconds}s")
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let time_left = use_state(String::new);

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |_| {
                // The target is fixed at mount; only `now` moves between ticks.
                let target = launch_target(Local::now());
                let tick = move || time_left.set(remaining_label(target, Local::now()));
                tick();
                let interval = Interval::new(config::COUNTDOWN_TICK_MS, tick);
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <section class="countdown-section">
            <div class="section-gradient"></div>
            <Reveal>
                <div class="countdown-card">
                    <h3>{"Launching Soon"}</h3>
                    <div class="countdown-readout">{(*time_left).clone()}</div>
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn decomposes_positive_diff() {
        let now = at(2026, 3, 1, 12, 0, 0);
        let target = now
            + Duration::days(2)
            + Duration::hours(3)
            + Duration::minutes(4)
            + Duration::seconds(5);
        assert_eq!(remaining_label(target, now), "2d 3h 4m 5s");
    }

    #[test]
    fn sub_minute_diff_keeps_zero_fields() {
        let now = at(2026, 3, 1, 12, 0, 0);
        assert_eq!(remaining_label(now + Duration::seconds(59), now), "0d 0h 0m 59s");
    }

    #[test]
    fn fields_stay_inside_their_radix() {
        let now = at(2026, 3, 1, 12, 0, 0);
        let target = now + Duration::hours(23) + Duration::minutes(59) + Duration::seconds(59);
        assert_eq!(remaining_label(target, now), "0d 23h 59m 59s");
    }

    #[test]
    fn terminal_copy_at_and_past_target() {
        let now = at(2026, 3, 1, 12, 0, 0);
        assert_eq!(remaining_label(now, now), "Launching very soon");
        assert_eq!(
            remaining_label(now - Duration::seconds(1), now),
            "Launching very soon"
        );
    }

    #[test]
    fn target_is_twenty_one_calendar_days_out() {
        // Crosses a month boundary.
        assert_eq!(
            launch_target(at(2026, 1, 20, 9, 30, 0)),
            at(2026, 2, 10, 9, 30, 0)
        );
        assert_eq!(
            launch_target(at(2026, 3, 1, 12, 0, 0)),
            at(2026, 3, 22, 12, 0, 0)
        );
    }

    #[test]
    fn hour_component_drops_by_one_per_simulated_hour() {
        let now = at(2026, 3, 1, 12, 0, 0);
        let target = launch_target(now);
        // Offset the reading so neither sample sits on a day boundary.
        let first = now + Duration::minutes(90);
        let second = first + Duration::seconds(3600);
        assert_eq!(remaining_label(target, first), "20d 22h 30m 0s");
        assert_eq!(remaining_label(target, second), "20d 21h 30m 0s");
    }
}
