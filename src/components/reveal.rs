use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Extra transition delay, for staggering siblings.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Wrapper that plays its enter transition the first time it scrolls into
/// view and never again: the latch only sets, nothing resets it. The observer
/// disconnects as soon as it has fired and is torn down with the component
/// either way.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut live: Option<(IntersectionObserver, ObserverCallback)> = None;
                if let Some(element) = node.cast::<Element>() {
                    let latch = visible.clone();
                    let callback: ObserverCallback = Closure::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|entry| entry.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if intersecting {
                                latch.set(true);
                                observer.disconnect();
                            }
                        },
                    );
                    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&element);
                            live = Some((observer, callback));
                        }
                        Err(err) => {
                            // No observer, no animation: show the content.
                            gloo_console::error!("intersection observer unavailable:", err);
                            visible.set(true);
                        }
                    }
                }
                move || {
                    if let Some((observer, callback)) = live {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));
    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then_some("reveal-visible"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}
