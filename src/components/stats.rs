use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::state::counter::CounterTarget;

const STATS: &[(&str, &str)] = &[
    ("500+", "Happy Clients"),
    ("50+", "Awards Won"),
    ("25+", "Countries Served"),
    ("24/7", "Support"),
];

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub mini: bool,
}

pub enum StatCounterMsg {
    Reveal,
    Tick,
}

/// One animated stat. Counts up once on first reveal; values that do not
/// parse (like "24/7") render as-is. The tick interval is dropped when
/// the end value is reached.
pub struct StatCounter {
    target: Option<CounterTarget>,
    value: f64,
    animated: bool,
    interval: Option<Interval>,
}

impl Component for StatCounter {
    type Message = StatCounterMsg;
    type Properties = StatCounterProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            target: CounterTarget::parse(&ctx.props().value),
            value: 0.0,
            animated: false,
            interval: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StatCounterMsg::Reveal => {
                if self.animated || self.target.is_none() {
                    return false;
                }
                self.animated = true;
                let link = ctx.link().clone();
                self.interval = Some(Interval::new(config::COUNTER_TICK_MS, move || {
                    link.send_message(StatCounterMsg::Tick);
                }));
                true
            }
            StatCounterMsg::Tick => {
                let target = match self.target {
                    Some(target) => target,
                    None => return false,
                };
                self.value = target.advance(self.value);
                if target.is_done(self.value) {
                    self.interval = None;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let text = match self.target {
            Some(target) if self.animated => target.render(self.value),
            _ => ctx.props().value.to_string(),
        };
        let class = if ctx.props().mini { "stat-mini" } else { "stat-item" };
        let on_reveal = ctx.link().callback(|_| StatCounterMsg::Reveal);

        html! {
            <Reveal class={class} {on_reveal}>
                <span class="stat-number">{text}</span>
                <span class="stat-label">{ &ctx.props().label }</span>
            </Reveal>
        }
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section id="stats" class="stats">
            <style>
                {r#"
                .stats {
                    padding: 5rem 2rem;
                    background: rgba(30, 41, 59, 0.5);
                }
                .stats-grid {
                    max-width: 1000px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat-item, .stat-mini {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }
                .stat-mini { align-items: flex-start; }
                .stat-number {
                    font-size: 2.4rem;
                    font-weight: 700;
                    color: #3b82f6;
                }
                .stat-mini .stat-number { font-size: 1.6rem; }
                .stat-label {
                    color: rgba(255, 255, 255, 0.65);
                    font-size: 0.95rem;
                }
                "#}
            </style>
            <div class="stats-grid">
                {
                    for STATS.iter().map(|(value, label)| html! {
                        <StatCounter value={*value} label={*label} />
                    })
                }
            </div>
        </section>
    }
}
