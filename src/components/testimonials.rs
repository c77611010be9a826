use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::config;
use crate::state::carousel::CarouselState;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Webnify rebuilt our storefront in eight weeks and conversion went up \
                forty percent. The team felt like an extension of ours.",
        name: "Maya Richardson",
        role: "COO, Northwind Retail",
    },
    Testimonial {
        quote: "Their AI team shipped a support copilot that handles half of our \
                inbound tickets. Genuinely transformative for a company our size.",
        name: "Daniel Okafor",
        role: "Head of Support, Finchline",
    },
    Testimonial {
        quote: "From cloud migration to the security audit, everything landed on time \
                and under budget. We have worked with larger agencies that did less.",
        name: "Sofia Marques",
        role: "CTO, Atlas Logistics",
    },
    Testimonial {
        quote: "The mobile app they delivered holds a 4.8 rating across both stores. \
                Communication was sharp the whole way through.",
        name: "Jonas Weber",
        role: "Founder, TrailKit",
    },
];

pub enum TestimonialsMsg {
    Next,
    Prev,
    Select(usize),
}

/// Testimonial slider. The rotation interval runs for the component's
/// whole life and is not paused by manual navigation, so automatic and
/// manual advances interleave last-write-wins.
pub struct Testimonials {
    state: CarouselState,
    _rotate: Interval,
    keydown: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl Component for Testimonials {
    type Message = TestimonialsMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let rotate = Interval::new(config::TESTIMONIAL_ROTATE_MS, move || {
            link.send_message(TestimonialsMsg::Next);
        });

        Self {
            state: CarouselState::new(TESTIMONIALS.len()),
            _rotate: rotate,
            keydown: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            match e.key().as_str() {
                "ArrowLeft" => link.send_message(TestimonialsMsg::Prev),
                "ArrowRight" => link.send_message(TestimonialsMsg::Next),
                _ => {}
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        let document = web_sys::window().unwrap().document().unwrap();
        document
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .unwrap();
        self.keydown = Some(callback);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(callback) = self.keydown.take() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.state = match msg {
            TestimonialsMsg::Next => self.state.next(),
            TestimonialsMsg::Prev => self.state.prev(),
            TestimonialsMsg::Select(index) => self.state.select(index),
        };
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = self.state.index();

        html! {
            <section id="testimonials" class="testimonials">
                <style>
                    {r#"
                    .testimonials { padding: 6rem 2rem; }
                    .testimonials h2 {
                        text-align: center;
                        font-size: 2.2rem;
                        margin-bottom: 3rem;
                    }
                    .testimonial-track {
                        position: relative;
                        max-width: 720px;
                        margin: 0 auto;
                        min-height: 220px;
                    }
                    .testimonial-card {
                        position: absolute;
                        inset: 0;
                        background: rgba(30, 41, 59, 0.7);
                        border: 1px solid rgba(59, 130, 246, 0.15);
                        border-radius: 16px;
                        padding: 2.5rem;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.5s ease;
                    }
                    .testimonial-card.active {
                        opacity: 1;
                        visibility: visible;
                    }
                    .testimonial-card blockquote {
                        font-size: 1.05rem;
                        line-height: 1.7;
                        color: rgba(255, 255, 255, 0.85);
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-author { font-weight: 600; }
                    .testimonial-role {
                        color: rgba(255, 255, 255, 0.55);
                        font-size: 0.9rem;
                    }
                    .testimonial-controls {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .slider-btn {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        border: 1px solid rgba(59, 130, 246, 0.4);
                        background: none;
                        color: white;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .slider-btn:hover { background: rgba(59, 130, 246, 0.25); }
                    .nav-dots { display: flex; gap: 0.6rem; }
                    .nav-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.25);
                        cursor: pointer;
                        transition: background 0.3s ease;
                        padding: 0;
                    }
                    .nav-dot.active { background: #3b82f6; }
                    "#}
                </style>
                <h2>{"What our clients say"}</h2>
                <div class="testimonial-track">
                    {
                        for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                            let class = classes!(
                                "testimonial-card",
                                (index == current).then(|| "active")
                            );
                            html! {
                                <div {class}>
                                    <blockquote>{testimonial.quote}</blockquote>
                                    <div class="testimonial-author">{testimonial.name}</div>
                                    <div class="testimonial-role">{testimonial.role}</div>
                                </div>
                            }
                        })
                    }
                </div>
                <div class="testimonial-controls">
                    <button
                        class="slider-btn prev-btn"
                        onclick={ctx.link().callback(|_| TestimonialsMsg::Prev)}
                        aria-label="Previous testimonial"
                    >
                        {"‹"}
                    </button>
                    <div class="nav-dots">
                        {
                            for (0..TESTIMONIALS.len()).map(|index| {
                                let class = classes!(
                                    "nav-dot",
                                    (index == current).then(|| "active")
                                );
                                html! {
                                    <button
                                        {class}
                                        onclick={ctx.link().callback(move |_| TestimonialsMsg::Select(index))}
                                        aria-label={format!("Testimonial {}", index + 1)}
                                    />
                                }
                            })
                        }
                    </div>
                    <button
                        class="slider-btn next-btn"
                        onclick={ctx.link().callback(|_| TestimonialsMsg::Next)}
                        aria-label="Next testimonial"
                    >
                        {"›"}
                    </button>
                </div>
            </section>
        }
    }
}
