use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="section-gradient"></div>
            <div class="footer-inner">
                <div class="footer-copy">
                    {format!("© {year} LocalConnect. All rights reserved.")}
                </div>
                <div class="footer-socials">
                    { for config::SOCIAL_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            href={link.href}
                            target="_blank"
                            rel="noreferrer"
                            aria-label={link.label}
                            class="social-link"
                        >
                            <i class={link.icon}></i>
                        </a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
