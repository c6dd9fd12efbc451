use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::{scroll_to_fragment, NavAppearance};

#[derive(Properties, PartialEq)]
pub struct ScrollLinkProps {
    pub href: AttrValue,
    pub header_offset: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// In-page anchor that glides to its target instead of jumping.
#[function_component(ScrollLink)]
pub fn scroll_link(props: &ScrollLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let header_offset = props.header_offset;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_fragment(&href, header_offset);
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} onclick={onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroNavProps {
    pub header_offset: f64,
    pub solid_after: f64,
}

#[function_component(HeroNav)]
pub fn hero_nav(props: &HeroNavProps) -> Html {
    let appearance = use_state_eq(|| NavAppearance::Transparent);
    let last_scroll_top = use_mut_ref(|| 0.0_f64);

    {
        let appearance = appearance.clone();
        let last_scroll_top = last_scroll_top.clone();
        let solid_after = props.solid_after;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();

                let scroll_callback = Closure::<dyn FnMut()>::new({
                    let window = window.clone();
                    move || {
                        let scroll_top = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        appearance.set(NavAppearance::for_offset(scroll_top, solid_after));
                        *last_scroll_top.borrow_mut() = scroll_top;
                    }
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let offset = props.header_offset;
    html! {
        <nav class="hero-nav" style={appearance.style()}>
            <div class="nav-content">
                <ScrollLink href="#top" header_offset={offset} class="nav-logo">
                    {"Mike Saif"}
                </ScrollLink>
                <div class="nav-links">
                    <ScrollLink href="#features" header_offset={offset} class="nav-link">{"Why AI"}</ScrollLink>
                    <ScrollLink href="#ebook" header_offset={offset} class="nav-link">{"Free eBook"}</ScrollLink>
                    <ScrollLink href="#testimonials" header_offset={offset} class="nav-link">{"Results"}</ScrollLink>
                    <ScrollLink href="#contact" header_offset={offset} class="nav-cta">{"Contact"}</ScrollLink>
                </div>
            </div>
        </nav>
    }
}
