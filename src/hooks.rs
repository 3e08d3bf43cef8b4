use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Pointer position relative to the viewport center, scaled so each axis
/// reaches `strength` at the edges. The listener lives on the window and is
/// removed when the calling component unmounts.
#[hook]
pub fn use_mouse_parallax(strength: f64) -> (f64, f64) {
    let offset = use_state(|| (0.0_f64, 0.0_f64));

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::<dyn Fn(web_sys::MouseEvent)>::new(
                    move |event: web_sys::MouseEvent| {
                        if let Some(window) = web_sys::window() {
                            let width = window
                                .inner_width()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(1.0);
                            let height = window
                                .inner_height()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(1.0);
                            let rel_x = (f64::from(event.client_x()) / width) * 2.0 - 1.0;
                            let rel_y = (f64::from(event.client_y()) / height) * 2.0 - 1.0;
                            offset.set((rel_x * strength, rel_y * strength));
                        }
                    },
                );
                let registered = web_sys::window().map(|window| {
                    let _ = window
                        .add_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        );
                    window
                });
                move || {
                    if let Some(window) = registered {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *offset
}
