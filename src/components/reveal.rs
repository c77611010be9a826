use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const OBSERVER_THRESHOLD: f64 = 0.1;
const OBSERVER_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=400";

fn observe_once(
    node: &NodeRef,
    mut on_intersect: impl FnMut() + 'static,
) -> impl FnOnce() {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    on_intersect();
                    observer.unobserve(&entry.target());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(OBSERVER_THRESHOLD));
    options.set_root_margin(OBSERVER_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .expect("failed to construct IntersectionObserver");
    if let Some(element) = node.cast::<web_sys::Element>() {
        observer.observe(&element);
    }

    move || {
        observer.disconnect();
        drop(callback);
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_reveal: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in the first time they enter the
/// viewport. The observer is dropped after the first intersection.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let on_reveal = props.on_reveal.clone();
        use_effect_with_deps(
            move |_| {
                observe_once(&node, move || {
                    revealed.set(true);
                    on_reveal.emit(());
                })
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then(|| "revealed"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Deferred image: renders a placeholder until scrolled near, then swaps
/// in the real source. Broken loads fall back to the placeholder.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_state(|| false);

    {
        let node = node.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| observe_once(&node, move || loaded.set(true)),
            (),
        );
    }

    let onerror = Callback::from(|e: Event| {
        let img: web_sys::HtmlImageElement = e.target_unchecked_into();
        if img.src() != PLACEHOLDER_IMAGE {
            img.set_src(PLACEHOLDER_IMAGE);
        }
    });

    let src = if *loaded {
        props.src.clone()
    } else {
        AttrValue::from(PLACEHOLDER_IMAGE)
    };

    html! {
        <img
            ref={node}
            class={classes!((!*loaded).then(|| "lazy"), props.class.clone())}
            {src}
            alt={props.alt.clone()}
            {onerror}
        />
    }
}
