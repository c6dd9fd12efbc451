use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::RevealSettings;
use crate::reveal::reveal_style;

#[derive(Properties, PartialEq)]
pub struct RevealCardProps {
    /// Position among all animated cards on the page, for the stagger.
    pub index: usize,
    /// `feature-card` or `testimonial-card`.
    pub class: &'static str,
    pub settings: RevealSettings,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealCard)]
pub fn reveal_card(props: &RevealCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let settings = props.settings.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new({
                    let revealed = revealed.clone();
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if entry.is_intersecting() {
                                revealed.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    }
                });

                let init = IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(settings.threshold));
                init.set_root_margin(settings.root_margin);

                let observer = match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &init,
                ) {
                    Ok(observer) => {
                        if let Some(element) = node.cast::<web_sys::Element>() {
                            observer.observe(&element);
                        }
                        Some(observer)
                    }
                    Err(e) => {
                        warn!("IntersectionObserver unavailable, showing card immediately: {:?}", e);
                        revealed.set(true);
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={props.class}
            style={reveal_style(*revealed, props.index, &props.settings)}
        >
            { for props.children.iter() }
        </div>
    }
}
