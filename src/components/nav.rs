use yew::prelude::*;

use crate::components::logo::Logo;

/// Fixed top bar. "Vision" and "Contact" are placeholder anchors until those
/// sections get their own pages.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    html! {
        <header class="site-header">
            <div class="header-inner">
                <Logo />
                <nav class="header-nav">
                    <a href="#waitlist">{"Waitlist"}</a>
                    <a href="#">{"Vision"}</a>
                    <a href="#">{"Contact"}</a>
                </nav>
                <a href="#waitlist" class="header-cta">{"Get Early Access"}</a>
            </div>
        </header>
    }
}
