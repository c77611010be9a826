use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::state::toast::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Toast,
    pub on_dismiss: Callback<u32>,
}

/// The single visible notification. The auto-dismiss timeout carries the
/// toast id, so a fire that outlives its toast does nothing.
#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::TOAST_DISMISS_MS, move || {
                    on_dismiss.emit(id);
                });
                timeout.forget();
                || ()
            },
            props.toast.id,
        );
    }

    let (class, icon) = match props.toast.kind {
        ToastKind::Success => ("notification success", "✓"),
        ToastKind::Error => ("notification error", "!"),
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div {class}>
            <style>
                {r#"
                .notification {
                    position: fixed;
                    top: 100px;
                    right: 20px;
                    color: white;
                    padding: 16px 20px;
                    border-radius: 12px;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
                    z-index: 10000;
                    animation: slideInRight 0.3s ease-out;
                    max-width: 400px;
                    min-width: 300px;
                }
                .notification.success {
                    background: linear-gradient(135deg, #10b981, #059669);
                }
                .notification.error {
                    background: linear-gradient(135deg, #ef4444, #dc2626);
                }
                .notification-content {
                    display: flex;
                    align-items: center;
                    gap: 12px;
                }
                .notification-icon {
                    font-size: 20px;
                    font-weight: bold;
                    flex-shrink: 0;
                }
                .notification-text {
                    flex: 1;
                    font-size: 14px;
                    font-weight: 500;
                }
                .notification-close {
                    background: none;
                    border: none;
                    color: white;
                    cursor: pointer;
                    padding: 4px;
                    border-radius: 4px;
                    transition: background 0.3s ease;
                    flex-shrink: 0;
                }
                .notification-close:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                @keyframes slideInRight {
                    from { transform: translateX(100%); opacity: 0; }
                    to { transform: translateX(0); opacity: 1; }
                }
                "#}
            </style>
            <div class="notification-content">
                <div class="notification-icon">{icon}</div>
                <div class="notification-text">
                    <span>{ &props.toast.message }</span>
                </div>
                <button class="notification-close" {onclick}>{"✕"}</button>
            </div>
        </div>
    }
}
