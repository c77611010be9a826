use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::nav::smooth_scroll_to;
use crate::state::scrollspy;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    visible.set(scrollspy::back_to_top_visible(scroll_top));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|_| smooth_scroll_to(0.0));

    html! {
        <button
            class={classes!("back-to-top", (*visible).then(|| "visible"))}
            {onclick}
            aria-label="Back to top"
        >
            <style>
                {r#"
                .back-to-top {
                    position: fixed;
                    bottom: 30px;
                    left: 30px;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #3b82f6, #1d4ed8);
                    color: white;
                    font-size: 1.2rem;
                    cursor: pointer;
                    opacity: 0;
                    visibility: hidden;
                    transform: translateY(10px);
                    transition: all 0.3s ease;
                    z-index: 9000;
                }
                .back-to-top.visible {
                    opacity: 1;
                    visibility: visible;
                    transform: translateY(0);
                }
                .back-to-top:hover {
                    box-shadow: 0 8px 20px rgba(59, 130, 246, 0.4);
                }
                "#}
            </style>
            {"↑"}
        </button>
    }
}
