use web_sys::{HtmlFormElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::field::ValidatedField;
use crate::state::PopupMessage;

/// True when the click landed on the overlay container itself rather than on
/// the panel inside it.
fn clicked_backdrop(e: &MouseEvent) -> bool {
    e.target().is_some() && e.target() == e.current_target()
}

fn overlay_class(base: &'static str, visible: bool) -> Classes {
    classes!(base, (!visible).then_some("hidden"))
}

#[derive(Properties, PartialEq)]
pub struct ContactPopupProps {
    pub visible: bool,
    pub action: AttrValue,
    pub message: Option<PopupMessage>,
    pub pending: bool,
    /// Bumped by the page after a successful send; the form clears itself.
    pub reset_epoch: u32,
    pub on_close: Callback<()>,
    pub on_backdrop: Callback<bool>,
    pub on_submit: Callback<SubmitEvent>,
}

#[function_component(ContactPopup)]
pub fn contact_popup(props: &ContactPopupProps) -> Html {
    let form_ref = use_node_ref();

    {
        let form_ref = form_ref.clone();
        use_effect_with_deps(
            move |epoch| {
                if *epoch != 0 {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                || ()
            },
            props.reset_epoch,
        );
    }

    let on_backdrop = {
        let on_backdrop = props.on_backdrop.clone();
        Callback::from(move |e: MouseEvent| on_backdrop.emit(clicked_backdrop(&e)))
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div id="contactFormPopup" class={overlay_class("popup-overlay", props.visible)} onclick={on_backdrop}>
            <div class="popup-content">
                <button id="closeContactPopup" class="popup-close" aria-label="Close" onclick={on_close}>
                    {"×"}
                </button>
                <h2>{"Let's Talk About Your Business"}</h2>
                <p class="popup-subtitle">{"Tell me where you're stuck and I'll get back to you within one business day."}</p>
                <div class="popup-form-wrapper">
                    <form
                        id="contactForm"
                        ref={form_ref}
                        action={props.action.clone()}
                        method="POST"
                        onsubmit={props.on_submit.clone()}
                    >
                        <div class="form-row">
                            <ValidatedField name="firstName" label="First name" required={true} reset_epoch={props.reset_epoch} />
                            <ValidatedField name="lastName" label="Last name" required={true} reset_epoch={props.reset_epoch} />
                        </div>
                        <ValidatedField
                            name="email"
                            label="Email"
                            input_type="email"
                            placeholder="you@company.com"
                            required={true}
                            reset_epoch={props.reset_epoch}
                        />
                        <ValidatedField
                            name="message"
                            label="How can I help?"
                            multiline={true}
                            required={true}
                            reset_epoch={props.reset_epoch}
                        />
                        <button type="submit" class="btn-primary" disabled={props.pending}>
                            { if props.pending { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                    {
                        if let Some(message) = props.message {
                            html! {
                                <div class={classes!("success-message", (!message.is_success()).then_some("error"))}>
                                    { message.text() }
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThankYouProps {
    pub visible: bool,
    pub download_link: Option<&'static str>,
    pub on_close: Callback<()>,
    pub on_backdrop: Callback<bool>,
    pub on_download: Callback<()>,
}

#[function_component(ThankYouOverlay)]
pub fn thank_you_overlay(props: &ThankYouProps) -> Html {
    let on_backdrop = {
        let on_backdrop = props.on_backdrop.clone();
        Callback::from(move |e: MouseEvent| on_backdrop.emit(clicked_backdrop(&e)))
    };
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_download = props.on_download.reform(|e: MouseEvent| e.prevent_default());

    html! {
        <div id="thankYouPage" class={overlay_class("thank-you-overlay", props.visible)} onclick={on_backdrop}>
            <div class="thank-you-content">
                <div class="thank-you-icon">{"✓"}</div>
                <h2>{"Thank You!"}</h2>
                <p>{"Your copy of AI for Small Business is ready. A confirmation is also on its way to your inbox."}</p>
                <a
                    id="downloadLink"
                    class="btn-primary"
                    href={props.download_link.unwrap_or("#")}
                    download={props.download_link.unwrap_or_default()}
                    onclick={on_download}
                >
                    {"Download the eBook"}
                </a>
                <button id="closeThankYou" class="btn-secondary" onclick={on_close}>
                    {"Back to the site"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub text: Option<String>,
}

#[function_component(PageNotice)]
pub fn page_notice(props: &NoticeProps) -> Html {
    match &props.text {
        Some(text) => html! { <div class="success-message page-notice">{ text.clone() }</div> },
        None => html! {},
    }
}
