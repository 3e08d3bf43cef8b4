use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Nothing local here"}</h1>
            <p>{"That page doesn't exist."}</p>
            <Link<Route> to={Route::Landing} classes="hero-cta">
                {"Back to LocalConnect"}
            </Link<Route>>
        </div>
    }
}
