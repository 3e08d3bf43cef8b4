use yew::prelude::*;

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <div class="logo">
            <div class="logo-mark">
                <div class="logo-mark-inner"></div>
            </div>
            <span class="logo-word">{"LocalConnect"}</span>
        </div>
    }
}
