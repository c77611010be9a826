use log::{info, Level};
use yew::prelude::*;

mod config;
mod state {
    pub mod carousel;
    pub mod chat;
    pub mod counter;
    pub mod form;
    pub mod scrollspy;
    pub mod toast;
}
mod components {
    pub mod back_to_top;
    pub mod chat;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod portfolio;
    pub mod preloader;
    pub mod pricing;
    pub mod reveal;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
    pub mod toast;
}

use components::{
    back_to_top::BackToTop, chat::ChatWidget, contact::Contact, footer::Footer, hero::Hero,
    nav::Nav, portfolio::Portfolio, preloader::Preloader, pricing::Pricing, services::Services,
    stats::Stats, testimonials::Testimonials, toast::ToastView,
};
use state::toast::{Notifier, ToastKind};

#[function_component]
fn App() -> Html {
    let notifier = use_state(Notifier::new);
    let reduced_motion = use_state(|| false);

    {
        let reduced_motion = reduced_motion.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(query) = web_sys::window()
                    .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
                    .flatten()
                {
                    reduced_motion.set(query.matches());
                }
                || ()
            },
            (),
        );
    }

    let on_notify = {
        let notifier = notifier.clone();
        Callback::from(move |(message, kind): (String, ToastKind)| {
            let mut next = (*notifier).clone();
            next.show(message, kind);
            notifier.set(next);
        })
    };

    let on_dismiss = {
        let notifier = notifier.clone();
        Callback::from(move |id: u32| {
            let mut next = (*notifier).clone();
            next.dismiss(id);
            notifier.set(next);
        })
    };

    html! {
        <>
            if *reduced_motion {
                <style>
                    {"*, *::before, *::after { \
                      animation-duration: 0.01ms !important; \
                      animation-iteration-count: 1 !important; \
                      transition-duration: 0.01ms !important; }"}
                </style>
            }
            <Preloader />
            <Nav />
            <main>
                <Hero />
                <Services />
                <Portfolio />
                <Stats />
                <Testimonials />
                <Pricing />
                <Contact on_notify={on_notify.clone()} />
            </main>
            <Footer {on_notify} />
            <ChatWidget />
            <BackToTop />
            if let Some(toast) = notifier.current() {
                <ToastView toast={toast.clone()} {on_dismiss} />
            }
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting Webnify");
    info!("Interested in joining our team? careers@webnify.com");
    yew::Renderer::<App>::new().render();
}
