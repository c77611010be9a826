use yew::prelude::*;

use crate::components::reveal::LazyImage;

const FILTERS: &[(&str, &str)] = &[
    ("all", "All"),
    ("web", "Web"),
    ("mobile", "Mobile"),
    ("ai", "AI"),
];

const PORTFOLIO_ITEMS: &[(&str, &str, &str, &str)] = &[
    (
        "Northwind Storefront",
        "Headless commerce rebuild with sub-second page loads.",
        "web",
        "/assets/portfolio/northwind.jpg",
    ),
    (
        "Finchline Copilot",
        "Support copilot resolving half of inbound tickets automatically.",
        "ai",
        "/assets/portfolio/finchline.jpg",
    ),
    (
        "TrailKit",
        "Outdoor navigation app, 4.8 stars across both stores.",
        "mobile",
        "/assets/portfolio/trailkit.jpg",
    ),
    (
        "Atlas Control Tower",
        "Real-time logistics dashboard for a 12-country fleet.",
        "web",
        "/assets/portfolio/atlas.jpg",
    ),
    (
        "Lumen Forecasting",
        "Demand forecasting models cutting stockouts by a third.",
        "ai",
        "/assets/portfolio/lumen.jpg",
    ),
    (
        "Crestline Banking",
        "Mobile banking revamp with biometric onboarding.",
        "mobile",
        "/assets/portfolio/crestline.jpg",
    ),
];

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let filter = use_state(|| "all");

    let filter_button = |value: &'static str, label: &'static str| {
        let filter = filter.clone();
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_| filter.set(value))
        };
        html! {
            <button
                class={classes!("filter-btn", (*filter == value).then(|| "active"))}
                {onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <section id="portfolio" class="portfolio">
            <style>
                {r#"
                .portfolio {
                    padding: 6rem 2rem;
                    background: rgba(30, 41, 59, 0.5);
                }
                .portfolio h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                }
                .filter-bar {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2.5rem;
                    flex-wrap: wrap;
                }
                .filter-btn {
                    padding: 0.5rem 1.4rem;
                    border-radius: 999px;
                    border: 1px solid rgba(59, 130, 246, 0.4);
                    background: none;
                    color: rgba(255, 255, 255, 0.8);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .filter-btn.active, .filter-btn:hover {
                    background: linear-gradient(135deg, #3b82f6, #1d4ed8);
                    color: white;
                    border-color: transparent;
                }
                .portfolio-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .portfolio-item {
                    background: rgba(15, 23, 42, 0.8);
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid rgba(59, 130, 246, 0.1);
                }
                .portfolio-item img {
                    width: 100%;
                    height: 180px;
                    object-fit: cover;
                    display: block;
                }
                .portfolio-item img.lazy { filter: blur(4px); }
                .portfolio-body { padding: 1.25rem; }
                .portfolio-body h3 { font-size: 1.1rem; margin-bottom: 0.4rem; }
                .portfolio-body p {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.9rem;
                }
                .portfolio-tag {
                    display: inline-block;
                    margin-top: 0.8rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    color: #3b82f6;
                }
                "#}
            </style>
            <h2>{"Selected work"}</h2>
            <div class="filter-bar">
                { for FILTERS.iter().map(|&(value, label)| filter_button(value, label)) }
            </div>
            <div class="portfolio-grid">
                {
                    for PORTFOLIO_ITEMS.iter().map(|(title, description, category, image)| {
                        let visible = *filter == "all" || *filter == *category;
                        let style = if visible {
                            "display: block; animation: fadeIn 0.5s ease-in-out;"
                        } else {
                            "display: none;"
                        };
                        html! {
                            <div class="portfolio-item" {style}>
                                <LazyImage src={*image} alt={*title} />
                                <div class="portfolio-body">
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                    <span class="portfolio-tag">{*category}</span>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </section>
    }
}
