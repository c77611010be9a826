use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::state::form::validate_newsletter;
use crate::state::toast::ToastKind;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_notify: Callback<(String, ToastKind)>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let email_input = use_node_ref();

    // Newsletter signup is local-only: validate, thank, reset.
    let onsubmit = {
        let email_input = email_input.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = match email_input.cast::<HtmlInputElement>() {
                Some(input) => input,
                None => return,
            };
            match validate_newsletter(&input.value()) {
                Err(message) => on_notify.emit((message.to_string(), ToastKind::Error)),
                Ok(()) => {
                    on_notify.emit((
                        "Thank you for subscribing to our newsletter!".to_string(),
                        ToastKind::Success,
                    ));
                    input.set_value("");
                }
            }
        })
    };

    html! {
        <footer class="footer">
            <style>
                {r#"
                .footer {
                    padding: 4rem 2rem 2rem;
                    border-top: 1px solid rgba(59, 130, 246, 0.15);
                }
                .footer-grid {
                    max-width: 1100px;
                    margin: 0 auto 2.5rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2.5rem;
                }
                .footer h4 { margin-bottom: 1rem; }
                .footer p, .footer a {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.95rem;
                    text-decoration: none;
                }
                .footer a:hover { color: #3b82f6; }
                .footer-links { display: flex; flex-direction: column; gap: 0.5rem; }
                .newsletter-form {
                    display: flex;
                    gap: 0.6rem;
                    margin-top: 1rem;
                }
                .newsletter-form input {
                    flex: 1;
                    padding: 0.7rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(59, 130, 246, 0.25);
                    background: rgba(15, 23, 42, 0.8);
                    color: white;
                    font: inherit;
                }
                .footer-bottom {
                    text-align: center;
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.85rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.06);
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h4>{"Webnify"}</h4>
                    <p>{"Premium digital solutions and AI innovation, trusted by 500+ clients in 25+ countries."}</p>
                    <form class="newsletter-form" {onsubmit}>
                        <input ref={email_input} type="email" placeholder="Your email" />
                        <button type="submit" class="btn btn-primary">{"Subscribe"}</button>
                    </form>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <div class="footer-links">
                        <a href="#services">{"Services"}</a>
                        <a href="#portfolio">{"Work"}</a>
                        <a href="#pricing">{"Pricing"}</a>
                        <a href="#contact">{"Contact"}</a>
                    </div>
                </div>
                <div>
                    <h4>{"Get in touch"}</h4>
                    <div class="footer-links">
                        <a href="mailto:hello@webnify.com">{"hello@webnify.com"}</a>
                        <a href="mailto:careers@webnify.com">{"careers@webnify.com"}</a>
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                {"© 2025 Webnify. All rights reserved."}
            </div>
        </footer>
    }
}
