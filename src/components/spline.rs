use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SplineSceneProps {
    /// Hosted `.splinecode` document. Everything past this URL belongs to the
    /// viewer element.
    pub url: AttrValue,
}

/// Black-box 3D scene. Renders the `spline-viewer` custom element (loaded by
/// the viewer script in `index.html`) into whatever box contains it.
#[function_component(SplineScene)]
pub fn spline_scene(props: &SplineSceneProps) -> Html {
    html! {
        <spline-viewer url={props.url.clone()} class="spline-scene"></spline-viewer>
    }
}
