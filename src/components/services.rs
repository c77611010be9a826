use yew::prelude::*;

use crate::components::reveal::Reveal;

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "⌨",
        "Custom Web Development",
        "Hand-built sites and web apps tuned for speed, accessibility and search.",
    ),
    (
        "🤖",
        "AI & Machine Learning",
        "Copilots, recommendation engines and automation built on your own data.",
    ),
    (
        "📱",
        "Mobile App Development",
        "Native-quality iOS and Android apps from one product team.",
    ),
    (
        "☁",
        "Cloud Solutions",
        "Migrations, infrastructure as code and cost tuning across the major clouds.",
    ),
    (
        "🛡",
        "Cybersecurity",
        "Audits, hardening and monitoring, ISO 27001 aligned from day one.",
    ),
    (
        "🧭",
        "Digital Strategy",
        "Roadmaps and analytics that turn a backlog into a growth plan.",
    ),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services">
            <style>
                {r#"
                .services { padding: 6rem 2rem; }
                .services h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 0.75rem;
                }
                .services-sub {
                    text-align: center;
                    color: rgba(255, 255, 255, 0.6);
                    margin-bottom: 3rem;
                }
                .services-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    background: rgba(30, 41, 59, 0.7);
                    border: 1px solid rgba(59, 130, 246, 0.15);
                    border-radius: 16px;
                    padding: 2rem;
                    transition: border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover {
                    border-color: rgba(59, 130, 246, 0.5);
                    box-shadow: 0 12px 30px rgba(0, 0, 0, 0.25);
                }
                .service-icon { font-size: 1.8rem; margin-bottom: 1rem; }
                .service-card h3 { font-size: 1.2rem; margin-bottom: 0.6rem; }
                .service-card p {
                    color: rgba(255, 255, 255, 0.65);
                    font-size: 0.95rem;
                    line-height: 1.6;
                }
                "#}
            </style>
            <h2>{"What we build"}</h2>
            <p class="services-sub">{"Six practices, one accountable team."}</p>
            <div class="services-grid">
                {
                    for SERVICES.iter().map(|(icon, title, description)| html! {
                        <Reveal class="service-card">
                            <div class="service-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </Reveal>
                    })
                }
            </div>
        </section>
    }
}
