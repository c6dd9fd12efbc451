//! Page-level interaction state.
//!
//! Everything that changes how the page looks after a user action lives in
//! [`PageState`] and is driven through [`PageAction`]s. The Yew render layer
//! reads the state and turns it into classes and inline styles, so the
//! transitions below can be exercised without a browser.

use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

pub const CONTACT_SENT_TEXT: &str = "Thank you! Your message has been sent. I'll respond shortly.";
pub const CONTACT_FAILED_TEXT: &str = "Oops! There was a problem sending your message. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    ContactPopup,
    ThankYou,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    Ebook,
    Contact,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
}

/// Inline message shown under the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupMessage {
    Sent,
    Failed,
}

impl PopupMessage {
    pub fn text(self) -> &'static str {
        match self {
            PopupMessage::Sent => CONTACT_SENT_TEXT,
            PopupMessage::Failed => CONTACT_FAILED_TEXT,
        }
    }

    pub fn is_success(self) -> bool {
        self == PopupMessage::Sent
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub contact: Visibility,
    pub thank_you: Visibility,
    /// Bumped every time the contact popup opens; auto-close timers carry the
    /// generation they were scheduled for.
    pub contact_generation: u32,
    pub popup_message: Option<PopupMessage>,
    pub download_link: Option<&'static str>,
    pub ebook_phase: SubmitPhase,
    pub contact_phase: SubmitPhase,
    /// Incremented after a successful submit so field feedback can reset.
    pub ebook_resets: u32,
    pub contact_resets: u32,
    pub notice: Option<Notice>,
    next_notice_id: u32,
}

pub enum PageAction {
    OpenContact,
    Close(Overlay),
    BackdropClicked { overlay: Overlay, on_container: bool },
    Escape,
    SubmitStarted(FormKind),
    EbookSent { download: &'static str },
    EbookFailed,
    /// Responses carry the popup generation they were submitted from.
    ContactSent { generation: u32 },
    ContactFailed { generation: u32 },
    AutoCloseContact { generation: u32 },
    ShowNotice(String),
    DismissNotice(u32),
}

impl PageState {
    pub fn visibility(&self, overlay: Overlay) -> Visibility {
        match overlay {
            Overlay::ContactPopup => self.contact,
            Overlay::ThankYou => self.thank_you,
        }
    }

    /// Document scrolling is disabled while any overlay is up.
    pub fn scroll_locked(&self) -> bool {
        self.contact.is_visible() || self.thank_you.is_visible()
    }

    /// Value for `document.body.style.overflow`; empty clears the property.
    pub fn body_overflow(&self) -> &'static str {
        if self.scroll_locked() {
            "hidden"
        } else {
            ""
        }
    }

    pub fn phase(&self, form: FormKind) -> SubmitPhase {
        match form {
            FormKind::Ebook => self.ebook_phase,
            FormKind::Contact => self.contact_phase,
        }
    }

    fn hide(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::ContactPopup => {
                self.contact = Visibility::Hidden;
                self.popup_message = None;
            }
            Overlay::ThankYou => self.thank_you = Visibility::Hidden,
        }
    }

    /// A response or timer from an earlier opening of the popup is stale.
    fn is_current_contact(&self, generation: u32) -> bool {
        self.contact.is_visible() && generation == self.contact_generation
    }

    fn set_phase(&mut self, form: FormKind, phase: SubmitPhase) {
        match form {
            FormKind::Ebook => self.ebook_phase = phase,
            FormKind::Contact => self.contact_phase = phase,
        }
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::OpenContact => {
                if !self.contact.is_visible() {
                    self.contact = Visibility::Visible;
                    self.contact_generation = self.contact_generation.wrapping_add(1);
                    self.popup_message = None;
                }
            }
            PageAction::Close(overlay) => self.hide(overlay),
            PageAction::BackdropClicked { overlay, on_container } => {
                if on_container {
                    self.hide(overlay);
                }
            }
            PageAction::Escape => {
                if self.thank_you.is_visible() {
                    self.hide(Overlay::ThankYou);
                }
                if self.contact.is_visible() {
                    self.hide(Overlay::ContactPopup);
                }
            }
            PageAction::SubmitStarted(form) => self.set_phase(form, SubmitPhase::Pending),
            PageAction::EbookSent { download } => {
                self.ebook_phase = SubmitPhase::Idle;
                self.thank_you = Visibility::Visible;
                self.download_link = Some(download);
                self.ebook_resets = self.ebook_resets.wrapping_add(1);
            }
            PageAction::EbookFailed => self.ebook_phase = SubmitPhase::Idle,
            PageAction::ContactSent { generation } => {
                self.contact_phase = SubmitPhase::Idle;
                if self.is_current_contact(generation) {
                    self.popup_message = Some(PopupMessage::Sent);
                    self.contact_resets = self.contact_resets.wrapping_add(1);
                }
            }
            PageAction::ContactFailed { generation } => {
                self.contact_phase = SubmitPhase::Idle;
                if self.is_current_contact(generation) {
                    self.popup_message = Some(PopupMessage::Failed);
                }
            }
            PageAction::AutoCloseContact { generation } => {
                if self.is_current_contact(generation) {
                    self.hide(Overlay::ContactPopup);
                }
            }
            PageAction::ShowNotice(text) => {
                let id = self.next_notice_id;
                self.next_notice_id = self.next_notice_id.wrapping_add(1);
                self.notice = Some(Notice { id, text });
            }
            PageAction::DismissNotice(id) => {
                if self.notice.as_ref().map(|n| n.id) == Some(id) {
                    self.notice = None;
                }
            }
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// In-flight marker for one form.
///
/// Rendered state lags behind events by a render cycle, so the double-submit
/// check goes through this shared cell instead of the reducer snapshot.
#[derive(Clone, Default)]
pub struct SubmitGuard(Rc<Cell<SubmitPhase>>);

impl SubmitGuard {
    /// Moves to `Pending`; returns false if a submission is already running.
    pub fn try_begin(&self) -> bool {
        if self.0.get() == SubmitPhase::Pending {
            return false;
        }
        self.0.set(SubmitPhase::Pending);
        true
    }

    pub fn finish(&self) {
        self.0.set(SubmitPhase::Idle);
    }
}

impl PartialEq for SubmitGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
