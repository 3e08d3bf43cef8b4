use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::countdown::Countdown;
use crate::components::footer::Footer;
use crate::components::logo::Logo;
use crate::components::nav::NavBar;
use crate::components::reveal::Reveal;
use crate::components::spline::SplineScene;
use crate::components::waitlist::Waitlist;
use crate::config;
use crate::hooks::use_mouse_parallax;

struct VisionItem {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
}

const VISION_ITEMS: &[VisionItem] = &[
    VisionItem {
        icon: "fa-solid fa-map-pin",
        title: "Hyper-local",
        desc: "Personalized discovery tuned to your neighborhood.",
    },
    VisionItem {
        icon: "fa-solid fa-link",
        title: "Connected",
        desc: "Seamless engagement between people and businesses.",
    },
    VisionItem {
        icon: "fa-solid fa-wand-magic-sparkles",
        title: "Delightful",
        desc: "Premium design and motion that feels effortless.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let dim_opacity = use_state(|| 0.0);
    let (tilt_x, tilt_y) = use_mouse_parallax(12.0);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Scroll listener dimming the hero as the page leaves it
    {
        let dim_opacity = dim_opacity.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let dim_opacity = dim_opacity.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    let factor = (scroll_y / 500.0).min(1.0);
                                    dim_opacity.set(factor * 0.6);
                                }
                            }
                        }
                    });
                    match window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        Ok(()) => {
                            // Initial call
                            if let Ok(scroll_y) = window.scroll_y() {
                                let factor = (scroll_y / 500.0).min(1.0);
                                dim_opacity.set(factor * 0.6);
                            }
                            Box::new(move || {
                                if let Some(win) = web_sys::window() {
                                    let _ = win.remove_event_listener_with_callback(
                                        "scroll",
                                        callback.as_ref().unchecked_ref(),
                                    );
                                }
                            })
                        }
                        Err(_) => Box::new(|| ()),
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let hero_css = r#"
        .hero {
            position: relative;
            min-height: 92vh;
            width: 100%;
            overflow: hidden;
            background: #0B0B10;
        }
        .hero-scene {
            position: absolute;
            inset: 0;
        }
        .spline-scene {
            display: block;
            width: 100%;
            height: 100%;
        }
        .hero-overlay {
            position: absolute;
            inset: 0;
            background: #000;
            pointer-events: none;
        }
        .hero-content {
            position: relative;
            max-width: 72rem;
            min-height: 92vh;
            margin: 0 auto;
            padding: 6rem 1.5rem 0;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            text-align: center;
        }
        .hero-badge-wrap {
            will-change: transform;
        }
        .hero-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            border-radius: 9999px;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
            padding: 0.5rem 1rem;
            font-size: 0.875rem;
            color: rgba(255, 255, 255, 0.8);
            backdrop-filter: blur(8px);
        }
        .hero-badge i {
            color: #a78bfa;
        }
        .hero-title {
            margin-top: 1.5rem;
            font-size: 3rem;
            font-weight: 700;
            line-height: 1.05;
            background: linear-gradient(to bottom right, #fff, #fff, #ddd6fe);
            -webkit-background-clip: text;
            background-clip: text;
            -webkit-text-fill-color: transparent;
            animation: hero-rise 0.8s ease-out both;
        }
        .hero-subtitle {
            margin: 1.25rem auto 0;
            max-width: 42rem;
            font-size: 1.125rem;
            color: rgba(255, 255, 255, 0.7);
            animation: hero-rise 0.9s ease-out 0.1s both;
        }
        .hero-cta-group {
            margin-top: 2rem;
            display: flex;
            align-items: center;
            gap: 1rem;
            animation: hero-rise 0.8s ease-out 0.2s both;
        }
        .hero-logo-strip {
            margin-top: 3rem;
            opacity: 0.4;
            animation: hero-rise 0.8s ease-out 0.3s both;
        }
        @keyframes hero-rise {
            from {
                opacity: 0;
                transform: translateY(20px);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }
        @media (min-width: 640px) {
            .hero-title {
                font-size: 3.75rem;
            }
        }
        @media (min-width: 768px) {
            .hero-title {
                font-size: 4.5rem;
            }
            .hero-subtitle {
                font-size: 1.25rem;
            }
        }
    "#;

    let tilt_style = format!(
        "transform: rotateX({:.2}deg) rotateY({:.2}deg);",
        tilt_y / 8.0,
        -tilt_x / 8.0
    );

    html! {
        <div class="landing-page">
            <style>{hero_css}</style>
            <NavBar />
            <main>
                <section class="hero">
                    <div class="section-gradient"></div>
                    <div class="hero-scene" aria-hidden="true">
                        <SplineScene url={config::SPLINE_SCENE_URL} />
                    </div>
                    <div class="hero-overlay" style={format!("opacity: {};", *dim_opacity)}></div>
                    <div class="hero-content">
                        <div class="hero-badge-wrap" style={tilt_style}>
                            <div class="hero-badge">
                                <i class="fa-solid fa-wand-magic-sparkles"></i>
                                <span>{"Next-gen local discovery"}</span>
                            </div>
                        </div>
                        <h1 class="hero-title">{"Connecting You to Your Local World."}</h1>
                        <p class="hero-subtitle">
                            {"Discover, support, and engage with local businesses around you."}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#waitlist" class="hero-cta">{"Join the Waitlist"}</a>
                        </div>
                        <div class="hero-logo-strip">
                            <Logo />
                        </div>
                    </div>
                </section>

                <section class="vision-section">
                    <div class="section-gradient"></div>
                    <Reveal>
                        <h2>{"A vision for local connection"}</h2>
                    </Reveal>
                    <div class="vision-grid">
                        { for VISION_ITEMS.iter().enumerate().map(|(i, item)| html! {
                            <Reveal key={item.title} delay_ms={(i as u32) * 60}>
                                <div class="vision-card">
                                    <i class={item.icon}></i>
                                    <h3>{item.title}</h3>
                                    <p>{item.desc}</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <Waitlist />
                <Countdown />
            </main>
            <Footer />
        </div>
    }
}
