use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::state::scrollspy;

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("testimonials", "Testimonials"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
];

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Scrolls a section under the fixed header.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    {
        let top = element.offset_top() as f64 - config::SMOOTH_SCROLL_OFFSET;
        smooth_scroll_to(top.max(0.0));
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active_section = use_state(|| None::<String>);

    {
        let is_scrolled = is_scrolled.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scrollspy::navbar_condensed(scroll_top));

                    let tops: Vec<(&str, f64)> = NAV_SECTIONS
                        .iter()
                        .filter_map(|(id, _)| {
                            document
                                .get_element_by_id(id)
                                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
                                .map(|e| (*id, e.offset_top() as f64))
                        })
                        .collect();
                    active_section
                        .set(scrollspy::active_section(&tops, scroll_top).map(str::to_string));
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

    // Escape closes the mobile menu from anywhere on the page.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                document
                    .add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            key_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        });
        let class = classes!(
            "nav-link",
            (active_section.as_deref() == Some(id)).then(|| "active")
        );
        html! {
            <a href={format!("#{}", id)} {class} {onclick}>{label}</a>
        }
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    padding: 1.25rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: transparent;
                    transition: all 0.3s ease;
                    z-index: 10000;
                }
                .navbar.scrolled {
                    padding: 0.75rem 2rem;
                    background: rgba(15, 23, 42, 0.95);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: white;
                    text-decoration: none;
                }
                .nav-logo span { color: #3b82f6; }
                .nav-menu {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.3s ease;
                }
                .nav-link:hover, .nav-link.active { color: #3b82f6; }
                .nav-toggle {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }
                .nav-toggle span {
                    width: 24px;
                    height: 2px;
                    background: white;
                    transition: all 0.3s ease;
                }
                .nav-toggle.active span:nth-child(1) {
                    transform: rotate(-45deg) translate(-5px, 6px);
                }
                .nav-toggle.active span:nth-child(2) { opacity: 0; }
                .nav-toggle.active span:nth-child(3) {
                    transform: rotate(45deg) translate(-5px, -6px);
                }
                @media (max-width: 768px) {
                    .nav-toggle { display: flex; }
                    .nav-menu {
                        position: fixed;
                        top: 60px;
                        right: 0;
                        flex-direction: column;
                        background: rgba(15, 23, 42, 0.98);
                        width: 100%;
                        padding: 2rem;
                        transform: translateX(100%);
                        transition: transform 0.3s ease;
                    }
                    .nav-menu.active { transform: translateX(0); }
                }
                "#}
            </style>
            <a href="#home" class="nav-logo">{"Web"}<span>{"nify"}</span></a>
            <button
                id="nav-toggle"
                class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                onclick={toggle_menu}
                aria-label="Toggle navigation"
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                { for NAV_SECTIONS.iter().map(|&(id, label)| nav_link(id, label)) }
            </div>
        </nav>
    }
}
