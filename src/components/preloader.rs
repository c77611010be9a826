use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.set_attribute("style", &format!("overflow: {}", value));
    }
}

/// Full-screen overlay shown while the page settles; scrolling is locked
/// until it clears.
#[function_component(Preloader)]
pub fn preloader() -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                set_body_overflow("hidden");
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(config::PRELOADER_DELAY_MS).await;
                    visible.set(false);
                    set_body_overflow("visible");
                });
                || ()
            },
            (),
        );
    }

    html! {
        <div class={classes!("preloader", (!*visible).then(|| "cleared"))}>
            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    background: #0f172a;
                    z-index: 20000;
                    opacity: 1;
                    visibility: visible;
                    transition: opacity 0.5s ease, visibility 0.5s ease;
                }
                .preloader.cleared {
                    opacity: 0;
                    visibility: hidden;
                }
                .preloader-logo {
                    font-size: 2rem;
                    font-weight: 700;
                    background: linear-gradient(45deg, #3b82f6, #10b981);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .preloader-spinner {
                    width: 48px;
                    height: 48px;
                    border: 4px solid rgba(59, 130, 246, 0.2);
                    border-top-color: #3b82f6;
                    border-radius: 50%;
                    animation: preloader-spin 1s linear infinite;
                }
                @keyframes preloader-spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
            <div class="preloader-logo">{"Webnify"}</div>
            <div class="preloader-spinner"></div>
        </div>
    }
}
