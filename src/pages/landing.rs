use chrono::Utc;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::{debug, error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, KeyboardEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::captcha::{self, CAPTCHA_ELEMENT};
use crate::components::field::ValidatedField;
use crate::components::nav::{HeroNav, ScrollLink};
use crate::components::overlays::{ContactPopup, PageNotice, ThankYouOverlay};
use crate::components::reveal_card::RevealCard;
use crate::config::PageConfig;
use crate::download;
use crate::records::{ContactRecord, EbookRequest, FormFields};
use crate::state::{FormKind, Overlay, PageAction, PageState, SubmitGuard, SubmitPhase};
use crate::storage::{append_contact_history, save_ebook_request, StoreHandle};
use crate::submit::{self, SubmitError, EBOOK_FAILED_ALERT};

const DOWNLOAD_STARTED_TEXT: &str = "Your download has started.";

const FEATURES: [(&str, &str, &str); 6] = [
    ("⏱", "Win Back Your Week", "Automate the follow-ups, scheduling and data entry that quietly eat ten hours of every week."),
    ("💬", "Answer Customers Faster", "Use AI assistants to draft replies and FAQs so no lead waits until Monday."),
    ("📈", "Market Without an Agency", "Turn one idea into posts, emails and ads in your own voice, in minutes."),
    ("🧾", "Tame the Paperwork", "Summarise invoices, contracts and reports without reading every line."),
    ("🔒", "Stay in Control", "Pick tools that keep customer data private and decisions in your hands."),
    ("🛠", "Start This Afternoon", "Step-by-step playbooks that need no technical background and no big budget."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Mike's playbook saved our front desk about six hours a week. The booking reminders alone paid for the time we spent setting it up.", "Dana R.", "Owner, Riverside Physio"),
    ("I was sceptical about AI. Two weeks later our newsletter goes out on time and sounds more like us than before.", "Luis M.", "Founder, Corner Roasters"),
    ("Clear, practical and honest about what AI can't do. Exactly what a small team needs.", "Priya S.", "Director, Brightline Bookkeeping"),
];

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn apply_body_overflow(value: &str) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if value.is_empty() {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", value)
    };
    if let Err(e) = result {
        warn!("Could not update body overflow: {:?}", e);
    }
}

/// Pulls the form and its data out of a submit event, holding the guard.
/// Returns `None` (with the guard released) when the submit should be dropped.
fn begin_submission(
    e: &SubmitEvent,
    guard: &SubmitGuard,
    name: &str,
) -> Option<(HtmlFormElement, web_sys::FormData)> {
    e.prevent_default();
    let Some(form) = e.target_dyn_into::<HtmlFormElement>() else {
        error!("{} form: {}", name, SubmitError::MissingForm);
        return None;
    };
    if !guard.try_begin() {
        debug!("{} form submission already in flight, ignoring", name);
        return None;
    }
    match submit::form_data(&form) {
        Ok(data) => Some((form, data)),
        Err(e) => {
            error!("{} form: {}", name, e);
            guard.finish();
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: PageConfig,
    pub store: StoreHandle,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingProps) -> Html {
    let state = use_reducer(PageState::default);
    let ebook_guard = use_state(SubmitGuard::default);
    let contact_guard = use_state(SubmitGuard::default);
    let config = &props.config;

    {
        let overflow = state.body_overflow();
        use_effect_with_deps(
            move |overflow| {
                apply_body_overflow(overflow);
                || ()
            },
            overflow,
        );
    }

    {
        let action = config.ebook_action;
        use_effect_with_deps(
            move |_| {
                captcha::init_captcha(action, CAPTCHA_ELEMENT);
                || ()
            },
            (),
        );
    }

    {
        let state = state.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                state.dispatch(PageAction::Escape);
            }
        });
    }

    // Each notice removes itself; a newer notice is left alone.
    {
        let dispatcher = state.dispatcher();
        let dismiss_ms = config.notice_dismiss_ms;
        use_effect_with_deps(
            move |notice_id| {
                if let Some(id) = *notice_id {
                    Timeout::new(dismiss_ms, move || dispatcher.dispatch(PageAction::DismissNotice(id))).forget();
                }
                || ()
            },
            state.notice.as_ref().map(|n| n.id),
        );
    }

    let on_ebook_submit = {
        let state = state.clone();
        let guard = (*ebook_guard).clone();
        let store = props.store.clone();
        let asset = config.ebook_asset;
        Callback::from(move |e: SubmitEvent| {
            let Some((form, data)) = begin_submission(&e, &guard, "eBook") else {
                return;
            };

            let fields = FormFields::from_form_data(&data, &EbookRequest::FIELDS);
            if let Err(e) = save_ebook_request(store.store(), &EbookRequest::capture(&fields, Utc::now())) {
                warn!("Could not record eBook request: {}", e);
            }
            state.dispatch(PageAction::SubmitStarted(FormKind::Ebook));

            let state = state.clone();
            let guard = guard.clone();
            spawn_local(async move {
                match submit::send_form(&form.action(), &form.method(), data).await {
                    Ok(()) => {
                        info!("eBook request accepted");
                        state.dispatch(PageAction::EbookSent { download: asset });
                        form.reset();
                    }
                    Err(e) => {
                        error!("Form submission error: {}", e);
                        alert(EBOOK_FAILED_ALERT);
                        state.dispatch(PageAction::EbookFailed);
                    }
                }
                guard.finish();
            });
        })
    };

    let on_contact_submit = {
        let state = state.clone();
        let guard = (*contact_guard).clone();
        let store = props.store.clone();
        let auto_close_ms = config.contact_auto_close_ms;
        let generation = state.contact_generation;
        Callback::from(move |e: SubmitEvent| {
            let Some((form, data)) = begin_submission(&e, &guard, "Contact") else {
                return;
            };

            let fields = FormFields::from_form_data(&data, &ContactRecord::FIELDS);
            match append_contact_history(store.store(), &ContactRecord::capture(&fields, Utc::now())) {
                Ok(len) => debug!("Contact history now holds {} entries", len),
                Err(e) => warn!("Could not record contact message: {}", e),
            }
            state.dispatch(PageAction::SubmitStarted(FormKind::Contact));

            let state = state.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let sent = match submit::send_form(&form.action(), &form.method(), data).await {
                    Ok(()) => {
                        info!("Contact message accepted");
                        // ContactPopup resets the form when this bumps its reset epoch.
                        state.dispatch(PageAction::ContactSent { generation });
                        true
                    }
                    Err(e) => {
                        error!("Form submission error: {}", e);
                        state.dispatch(PageAction::ContactFailed { generation });
                        false
                    }
                };
                guard.finish();

                if sent {
                    TimeoutFuture::new(auto_close_ms).await;
                    state.dispatch(PageAction::AutoCloseContact { generation });
                }
            });
        })
    };

    let on_download = {
        let state = state.clone();
        let asset = config.ebook_asset;
        Callback::from(move |_: ()| {
            info!("Download button clicked");
            let state = state.clone();
            spawn_local(async move {
                if download::download_or_open(asset, asset).await {
                    state.dispatch(PageAction::ShowNotice(DOWNLOAD_STARTED_TEXT.to_string()));
                }
            });
        })
    };

    let open_contact = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(PageAction::OpenContact))
    };

    let close = |overlay: Overlay| -> Callback<()> {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::Close(overlay)))
    };

    let backdrop = |overlay: Overlay| -> Callback<bool> {
        let state = state.clone();
        Callback::from(move |on_container: bool| {
            state.dispatch(PageAction::BackdropClicked { overlay, on_container })
        })
    };

    let offset = config.header_offset;
    let reveal = &config.reveal;
    let ebook_pending = state.phase(FormKind::Ebook) == SubmitPhase::Pending;

    html! {
        <div class="landing-page">
            <HeroNav header_offset={offset} solid_after={config.nav_solid_after} />

            <header id="top" class="hero">
                <div class="hero-content">
                    <p class="hero-eyebrow">{"AI for Small Business"}</p>
                    <h1>{"Put AI to work in your business this month, not someday."}</h1>
                    <p class="hero-subtitle">
                        {"Practical, jargon-free guidance for owners who want more time and fewer repetitive tasks."}
                    </p>
                    <div class="hero-cta-group">
                        <ScrollLink href="#ebook" header_offset={offset} class="btn-primary">
                            {"Get the free eBook"}
                        </ScrollLink>
                        <ScrollLink href="#features" header_offset={offset} class="btn-secondary">
                            {"See what's possible"}
                        </ScrollLink>
                    </div>
                </div>
            </header>

            <section id="features" class="features">
                <h2>{"What AI Can Do for You"}</h2>
                <div class="feature-grid">
                    {
                        for FEATURES.iter().enumerate().map(|(index, (icon, title, body))| html! {
                            <RevealCard index={index} class="feature-card" settings={reveal.clone()}>
                                <div class="feature-icon">{ *icon }</div>
                                <h3>{ *title }</h3>
                                <p>{ *body }</p>
                            </RevealCard>
                        })
                    }
                </div>
            </section>

            <section id="ebook" class="ebook-section">
                <div class="ebook-copy">
                    <h2>{"Free eBook: AI for Small Business"}</h2>
                    <p>{"Twenty pages of tools, prompts and checklists you can use today. Tell me where to send it."}</p>
                </div>
                <form
                    id="ebookForm"
                    class="ebook-form"
                    action={config.ebook_action}
                    method="POST"
                    onsubmit={on_ebook_submit}
                >
                    <div class="form-row">
                        <ValidatedField name="firstName" label="First name" required={true} reset_epoch={state.ebook_resets} />
                        <ValidatedField name="lastName" label="Last name" required={true} reset_epoch={state.ebook_resets} />
                    </div>
                    <ValidatedField
                        name="email"
                        label="Email"
                        input_type="email"
                        placeholder="you@company.com"
                        required={true}
                        reset_epoch={state.ebook_resets}
                    />
                    <ValidatedField
                        name="phone"
                        label="Phone (optional)"
                        input_type="tel"
                        reset_epoch={state.ebook_resets}
                    />
                    <div id="ebook-captcha"></div>
                    <button type="submit" class="btn-primary" disabled={ebook_pending}>
                        { if ebook_pending { "Sending..." } else { "Send Me the eBook" } }
                    </button>
                </form>
            </section>

            <section id="testimonials" class="testimonials">
                <h2>{"Owners Who Made the Leap"}</h2>
                <div class="testimonial-grid">
                    {
                        for TESTIMONIALS.iter().enumerate().map(|(i, (quote, name, role))| html! {
                            <RevealCard index={FEATURES.len() + i} class="testimonial-card" settings={reveal.clone()}>
                                <p class="testimonial-quote">{ format!("\u{201c}{}\u{201d}", quote) }</p>
                                <p class="testimonial-name">{ *name }</p>
                                <p class="testimonial-role">{ *role }</p>
                            </RevealCard>
                        })
                    }
                </div>
            </section>

            <section id="contact" class="contact-section">
                <h2>{"Not Sure Where to Start?"}</h2>
                <p>{"Send me a note about your business and I'll point you at the first thing worth automating."}</p>
                <button id="openContactForm" class="btn-primary" onclick={open_contact}>
                    {"Contact Me"}
                </button>
            </section>

            <footer class="site-footer">
                <p>{"© Mike Saif. AI for Small Business."}</p>
                <ScrollLink href="#top" header_offset={offset} class="footer-link">{"Back to top"}</ScrollLink>
            </footer>

            <ContactPopup
                visible={state.visibility(Overlay::ContactPopup).is_visible()}
                action={config.contact_action}
                message={state.popup_message}
                pending={state.phase(FormKind::Contact) == SubmitPhase::Pending}
                reset_epoch={state.contact_resets}
                on_close={close(Overlay::ContactPopup)}
                on_backdrop={backdrop(Overlay::ContactPopup)}
                on_submit={on_contact_submit}
            />

            <ThankYouOverlay
                visible={state.visibility(Overlay::ThankYou).is_visible()}
                download_link={state.download_link}
                on_close={close(Overlay::ThankYou)}
                on_backdrop={backdrop(Overlay::ThankYou)}
                on_download={on_download}
            />

            <PageNotice text={state.notice.as_ref().map(|n| n.text.clone())} />

            <style>
                {r#"
                    :root {
                        --primary: #2563eb;
                        --primary-dark: #1d4ed8;
                        --text: #111827;
                        --muted: #6b7280;
                        --surface: #f9fafb;
                    }
                    .landing-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: var(--text);
                    }
                    .hero-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 100;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .nav-content {
                        max-width: 1200px;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: var(--text);
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                    }
                    .nav-link, .footer-link {
                        color: var(--text);
                        text-decoration: none;
                    }
                    .nav-cta {
                        background: var(--primary);
                        color: white;
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        text-decoration: none;
                    }
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 120px 1.5rem 4rem;
                        background: linear-gradient(135deg, #eff6ff 0%, #ffffff 60%);
                    }
                    .hero h1 {
                        font-size: 3rem;
                        max-width: 800px;
                        margin: 0 auto 1rem;
                    }
                    .hero-eyebrow {
                        color: var(--primary);
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .hero-subtitle {
                        color: var(--muted);
                        font-size: 1.25rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        margin-top: 2rem;
                    }
                    .btn-primary, .btn-secondary {
                        display: inline-block;
                        padding: 0.875rem 2rem;
                        border-radius: 12px;
                        font-weight: 600;
                        border: none;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .btn-primary {
                        background: var(--primary);
                        color: white;
                    }
                    .btn-primary:hover {
                        background: var(--primary-dark);
                    }
                    .btn-primary:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .btn-secondary {
                        background: white;
                        color: var(--primary);
                        border: 2px solid var(--primary);
                    }
                    section {
                        padding: 5rem 1.5rem;
                    }
                    section h2 {
                        text-align: center;
                        font-size: 2.25rem;
                        margin-bottom: 2.5rem;
                    }
                    .feature-grid, .testimonial-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card, .testimonial-card {
                        background: white;
                        border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                    }
                    .feature-icon {
                        font-size: 2rem;
                        margin-bottom: 1rem;
                    }
                    .ebook-section {
                        background: var(--surface);
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    .ebook-section h2 {
                        text-align: left;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .form-group {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1rem;
                    }
                    .form-group label {
                        font-size: 0.875rem;
                        font-weight: 600;
                        margin-bottom: 0.375rem;
                    }
                    .form-group input, .form-group textarea {
                        padding: 0.75rem 1rem;
                        border: 2px solid #e5e7eb;
                        border-radius: 10px;
                        font-size: 1rem;
                        outline: none;
                        transition: border-color 0.2s ease;
                    }
                    .validation-error {
                        color: #ef4444;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .testimonial-quote {
                        font-style: italic;
                    }
                    .testimonial-name {
                        font-weight: 700;
                        margin-bottom: 0;
                    }
                    .testimonial-role {
                        color: var(--muted);
                        margin-top: 0.25rem;
                    }
                    .contact-section {
                        text-align: center;
                    }
                    .site-footer {
                        text-align: center;
                        padding: 2rem;
                        color: var(--muted);
                        border-top: 1px solid #e5e7eb;
                    }
                    .popup-overlay, .thank-you-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(17, 24, 39, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1000;
                        padding: 1rem;
                    }
                    .popup-overlay.hidden, .thank-you-overlay.hidden {
                        display: none;
                    }
                    .popup-content, .thank-you-content {
                        position: relative;
                        background: white;
                        border-radius: 20px;
                        padding: 2.5rem;
                        width: 100%;
                        max-width: 560px;
                        max-height: 90vh;
                        overflow-y: auto;
                    }
                    .thank-you-content {
                        text-align: center;
                    }
                    .thank-you-content .btn-secondary {
                        margin-left: 1rem;
                    }
                    .thank-you-icon {
                        width: 64px;
                        height: 64px;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        background: #10b981;
                        color: white;
                        font-size: 2rem;
                        line-height: 64px;
                    }
                    .popup-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        font-size: 1.75rem;
                        cursor: pointer;
                        color: var(--muted);
                    }
                    .popup-subtitle {
                        color: var(--muted);
                    }
                    .success-message {
                        background: #10b981;
                        color: white;
                        padding: 1rem 1.5rem;
                        border-radius: 12px;
                        margin-top: 1.5rem;
                        text-align: center;
                        animation: slideIn 0.3s ease-out;
                        box-shadow: 0 4px 15px rgba(16, 185, 129, 0.3);
                    }
                    .success-message.error {
                        background: #ef4444;
                        box-shadow: 0 4px 15px rgba(239, 68, 68, 0.3);
                    }
                    .page-notice {
                        position: fixed;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 1100;
                    }
                    @keyframes slideIn {
                        from {
                            opacity: 0;
                            transform: translateY(-10px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.25rem;
                        }
                        .nav-links .nav-link {
                            display: none;
                        }
                        .ebook-section, .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
