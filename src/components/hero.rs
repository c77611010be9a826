use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::nav::scroll_to_section;
use crate::components::stats::StatCounter;
use crate::state::scrollspy;

const CHART_BARS: &[u32] = &[45, 70, 55, 85, 65, 95];
const PARTICLE_COUNT: usize = 5;
const DECORATION_COUNT: usize = 3;

#[function_component(Hero)]
pub fn hero() -> Html {
    let scrolled = use_state(|| 0.0_f64);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    scrolled.set(window_clone.scroll_y().unwrap_or(0.0));
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

    let goto_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });
    let goto_services = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("services");
    });

    let particle = |index: usize| {
        let offset =
            scrollspy::parallax_offset(index, *scrolled, scrollspy::PARTICLE_PARALLAX_SPEED);
        let style = format!(
            "left: {}%; top: {}%; transform: translateY({}px);",
            12 + index * 18,
            15 + (index * 23) % 60,
            offset
        );
        html! { <div class="particle" {style}></div> }
    };

    let decoration = |index: usize| {
        let offset =
            scrollspy::parallax_offset(index, *scrolled, scrollspy::DECORATION_PARALLAX_SPEED);
        let style = format!(
            "right: {}%; top: {}%; transform: translateY({}px);",
            5 + index * 12,
            20 + index * 25,
            offset
        );
        html! { <div class="decoration" {style}></div> }
    };

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 8rem 2rem 4rem;
                    overflow: hidden;
                }
                .hero-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                    width: 100%;
                }
                .hero-copy { flex: 1; }
                .hero-copy h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin-bottom: 1.25rem;
                }
                .hero-copy h1 span {
                    background: linear-gradient(45deg, #3b82f6, #10b981);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-copy p {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.1rem;
                    margin-bottom: 2rem;
                    max-width: 460px;
                }
                .hero-actions { display: flex; gap: 1rem; margin-bottom: 2.5rem; }
                .hero-chart {
                    flex: 1;
                    display: flex;
                    align-items: flex-end;
                    gap: 12px;
                    height: 260px;
                }
                .chart-bar {
                    flex: 1;
                    border-radius: 8px 8px 0 0;
                    background: linear-gradient(180deg, #3b82f6, #1d4ed8);
                    transform-origin: bottom;
                    transform: scaleY(0);
                }
                .chart-bar.grow { animation: chart-grow 1s ease-out forwards; }
                @keyframes chart-grow {
                    from { transform: scaleY(0); }
                    to { transform: scaleY(1); }
                }
                .particle {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.5);
                    pointer-events: none;
                }
                .decoration {
                    position: absolute;
                    width: 120px;
                    height: 120px;
                    border-radius: 30%;
                    background: radial-gradient(circle, rgba(16, 185, 129, 0.12), transparent);
                    pointer-events: none;
                }
                @media (max-width: 860px) {
                    .hero-inner { flex-direction: column; gap: 2.5rem; }
                    .hero-copy h1 { font-size: 2.2rem; }
                    .hero-chart { width: 100%; height: 180px; }
                }
                "#}
            </style>
            { for (0..PARTICLE_COUNT).map(particle) }
            { for (0..DECORATION_COUNT).map(decoration) }
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>{"Building the future of "}<span>{"digital experiences"}</span></h1>
                    <p>
                        {"Webnify crafts premium web, mobile and AI solutions for teams that \
                          want to move faster than their market."}
                    </p>
                    <div class="hero-actions">
                        <button class="btn btn-primary" onclick={goto_contact}>{"Get Started"}</button>
                        <button class="btn btn-secondary" onclick={goto_services}>{"Our Services"}</button>
                    </div>
                    <StatCounter value="4.9★" label="Average client rating" mini={true} />
                </div>
                <div class="hero-chart">
                    {
                        for CHART_BARS.iter().enumerate().map(|(index, height)| {
                            let style = format!(
                                "height: {}%; animation-delay: {}ms;",
                                height,
                                index * 200
                            );
                            html! { <div class="chart-bar grow" {style}></div> }
                        })
                    }
                </div>
            </div>
        </section>
    }
}
