//! Site-wide constants. Copy, URLs and timings the page renders from fixed
//! data live here so they are adjusted in one place.

/// Hosted Spline scene rendered behind the hero copy. Opaque asset: the only
/// contract is that it renders into its container.
pub const SPLINE_SCENE_URL: &str =
    "https://prod.spline.design/wwTRdG1D9CkNs368/scene.splinecode";

/// Calendar days between a visitor's first render and the advertised launch.
pub const LAUNCH_WINDOW_DAYS: u64 = 21;

/// Simulated latency of a waitlist submission, in milliseconds. Stands in for
/// the future server round-trip so the submitting state stays observable.
pub const WAITLIST_LATENCY_MS: u32 = 900;

/// Countdown refresh period.
pub const COUNTDOWN_TICK_MS: u32 = 1_000;

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Outbound footer links, opened in a new browsing context.
pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com",
        icon: "fa-brands fa-instagram",
    },
    SocialLink {
        label: "X",
        href: "https://x.com",
        icon: "fa-brands fa-x-twitter",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com",
        icon: "fa-brands fa-linkedin-in",
    },
];
