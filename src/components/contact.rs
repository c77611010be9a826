use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::config;
use crate::state::form::{validate_contact, ContactFields};
use crate::state::toast::ToastKind;

const FALLBACK_SUCCESS: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";
const FALLBACK_ERROR: &str = "Failed to submit form. Please try again.";

#[derive(Deserialize)]
struct SubmitReply {
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

fn form_value(data: &FormData, key: &str) -> String {
    data.get(key).as_string().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub on_notify: Callback<(String, ToastKind)>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let is_loading = use_state(|| false);

    let onsubmit = {
        let is_loading = is_loading.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form: HtmlFormElement = e.target_unchecked_into();
            let data = match FormData::new_with_form(&form) {
                Ok(data) => data,
                Err(_) => return,
            };
            let fields = ContactFields {
                first_name: form_value(&data, "firstName"),
                last_name: form_value(&data, "lastName"),
                email: form_value(&data, "email"),
                phone: form_value(&data, "phone"),
                company: form_value(&data, "company"),
                service: form_value(&data, "service"),
                message: form_value(&data, "message"),
                terms: data.get("terms").as_string().is_some(),
            };

            // Validation failures never reach the network.
            if let Err(message) = validate_contact(&fields) {
                on_notify.emit((message.to_string(), ToastKind::Error));
                return;
            }

            is_loading.set(true);
            let is_loading = is_loading.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                let outcome = match Request::post(&format!("{}/submit", config::get_backend_url()))
                    .body(data)
                    .send()
                    .await
                {
                    Ok(response) => {
                        if response.ok() {
                            let message = response
                                .json::<SubmitReply>()
                                .await
                                .map(|reply| reply.message)
                                .unwrap_or_else(|_| FALLBACK_SUCCESS.to_string());
                            form.reset();
                            (message, ToastKind::Success)
                        } else {
                            let message = response
                                .json::<ErrorResponse>()
                                .await
                                .map(|reply| reply.error)
                                .unwrap_or_else(|_| FALLBACK_ERROR.to_string());
                            (message, ToastKind::Error)
                        }
                    }
                    Err(error) => (format!("Error: {}", error), ToastKind::Error),
                };
                on_notify.emit(outcome);
                is_loading.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                .contact {
                    padding: 6rem 2rem;
                    background: rgba(30, 41, 59, 0.5);
                }
                .contact h2 {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 0.75rem;
                }
                .contact-sub {
                    text-align: center;
                    color: rgba(255, 255, 255, 0.6);
                    margin-bottom: 3rem;
                }
                .contact-form {
                    max-width: 640px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .contact-form .full { grid-column: 1 / -1; }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    padding: 0.8rem 1rem;
                    border-radius: 10px;
                    border: 1px solid rgba(59, 130, 246, 0.25);
                    background: rgba(15, 23, 42, 0.8);
                    color: white;
                    font: inherit;
                }
                .contact-form textarea { min-height: 140px; resize: vertical; }
                .terms-row {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.9rem;
                }
                .terms-row input { width: auto; }
                .btn-submit {
                    position: relative;
                    justify-self: start;
                }
                .btn-submit.loading {
                    opacity: 0.7;
                    pointer-events: none;
                }
                .btn-submit:disabled { cursor: not-allowed; }
                "#}
            </style>
            <h2>{"Start a project"}</h2>
            <p class="contact-sub">{"Tell us where you want to go. We answer within one business day."}</p>
            <form class="contact-form" {onsubmit}>
                <input type="text" name="firstName" placeholder="First name *" />
                <input type="text" name="lastName" placeholder="Last name *" />
                <input type="text" name="email" placeholder="Email *" />
                <input type="tel" name="phone" placeholder="Phone" />
                <input class="full" type="text" name="company" placeholder="Company" />
                <select class="full" name="service">
                    <option value="">{"Select a service *"}</option>
                    <option value="web-development">{"Custom Web Development"}</option>
                    <option value="ai-ml">{"AI & Machine Learning"}</option>
                    <option value="mobile-apps">{"Mobile App Development"}</option>
                    <option value="cloud">{"Cloud Solutions"}</option>
                    <option value="security">{"Cybersecurity"}</option>
                    <option value="strategy">{"Digital Strategy"}</option>
                </select>
                <textarea class="full" name="message" placeholder="Project details *"></textarea>
                <label class="terms-row full">
                    <input type="checkbox" name="terms" />
                    {"I accept the terms and conditions"}
                </label>
                <button
                    type="submit"
                    class={classes!("btn", "btn-primary", "btn-submit", "full", (*is_loading).then(|| "loading"))}
                    disabled={*is_loading}
                >
                    { if *is_loading { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        </section>
    }
}
