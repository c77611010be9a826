use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::nav::scroll_to_section;
use crate::components::reveal::Reveal;

struct Plan {
    name: &'static str,
    monthly: u32,
    yearly: u32,
    blurb: &'static str,
    features: &'static [&'static str],
    featured: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        monthly: 990,
        yearly: 9900,
        blurb: "For a first site or MVP",
        features: &[
            "Up to 5 pages",
            "Responsive design",
            "Basic SEO setup",
            "30 days of support",
        ],
        featured: false,
    },
    Plan {
        name: "Professional",
        monthly: 2490,
        yearly: 24900,
        blurb: "For growing products",
        features: &[
            "Unlimited pages",
            "CMS integration",
            "Performance budget",
            "Analytics dashboard",
            "Priority support",
        ],
        featured: true,
    },
    Plan {
        name: "Enterprise",
        monthly: 5990,
        yearly: 59900,
        blurb: "For teams that need it all",
        features: &[
            "Dedicated product team",
            "AI & data services",
            "Security audits",
            "99.9% uptime SLA",
            "24/7 support",
        ],
        featured: false,
    },
];

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let yearly = use_state(|| false);

    let on_toggle = {
        let yearly = yearly.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            yearly.set(input.checked());
        })
    };

    let goto_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    html! {
        <section id="pricing" class="pricing">
            <style>
                {r#"
                .pricing { padding: 6rem 2rem; }
                .pricing h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 1.5rem;
                }
                .pricing-toggle-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.8rem;
                    margin-bottom: 3rem;
                    color: rgba(255, 255, 255, 0.75);
                }
                .switch {
                    position: relative;
                    display: inline-block;
                    width: 52px;
                    height: 28px;
                }
                .switch input { opacity: 0; width: 0; height: 0; }
                .slider {
                    position: absolute;
                    cursor: pointer;
                    inset: 0;
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 999px;
                    transition: background 0.3s ease;
                }
                .slider::before {
                    content: '';
                    position: absolute;
                    width: 22px;
                    height: 22px;
                    left: 3px;
                    top: 3px;
                    border-radius: 50%;
                    background: white;
                    transition: transform 0.3s ease;
                }
                .switch input:checked + .slider { background: #3b82f6; }
                .switch input:checked + .slider::before { transform: translateX(24px); }
                .pricing-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                    align-items: stretch;
                }
                .pricing-card {
                    background: rgba(30, 41, 59, 0.7);
                    border: 1px solid rgba(59, 130, 246, 0.15);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                }
                .pricing-card.featured {
                    border-color: #3b82f6;
                    box-shadow: 0 16px 40px rgba(59, 130, 246, 0.2);
                }
                .plan-name { font-size: 1.2rem; margin-bottom: 0.25rem; }
                .plan-blurb {
                    color: rgba(255, 255, 255, 0.55);
                    font-size: 0.9rem;
                    margin-bottom: 1.25rem;
                }
                .amount { font-size: 2.4rem; font-weight: 700; }
                .amount-period {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.9rem;
                }
                .plan-features {
                    list-style: none;
                    margin: 1.5rem 0 2rem;
                    padding: 0;
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 0.95rem;
                }
                .plan-features li::before { content: '✓  '; color: #10b981; }
                "#}
            </style>
            <h2>{"Simple pricing"}</h2>
            <div class="pricing-toggle-row">
                <span>{"Monthly"}</span>
                <label class="switch">
                    <input id="pricing-toggle" type="checkbox" checked={*yearly} onchange={on_toggle} />
                    <span class="slider"></span>
                </label>
                <span>{"Yearly (2 months free)"}</span>
            </div>
            <div class="pricing-grid">
                {
                    for PLANS.iter().map(|plan| {
                        let (amount, period) = if *yearly {
                            (plan.yearly, "/year")
                        } else {
                            (plan.monthly, "/month")
                        };
                        html! {
                            <Reveal class={classes!("pricing-card", plan.featured.then(|| "featured"))}>
                                <h3 class="plan-name">{plan.name}</h3>
                                <p class="plan-blurb">{plan.blurb}</p>
                                <div>
                                    <span class="amount">{format!("${}", amount)}</span>
                                    <span class="amount-period">{period}</span>
                                </div>
                                <ul class="plan-features">
                                    { for plan.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                                </ul>
                                <button class="btn btn-primary" onclick={goto_contact.clone()}>
                                    {"Choose "}{plan.name}
                                </button>
                            </Reveal>
                        }
                    })
                }
            </div>
        </section>
    }
}
