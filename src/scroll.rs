//! Anchor scrolling and the nav bar's scroll-dependent look.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Element id an in-page link points at. `#` on its own, an empty fragment
/// and links to other pages give `None`.
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

pub fn scroll_destination(offset_top: i32, header_offset: f64) -> f64 {
    f64::from(offset_top) - header_offset
}

/// Smooth-scrolls so the link's target sits just below the fixed header.
/// Returns false when there is nothing to scroll to.
pub fn scroll_to_fragment(href: &str, header_offset: f64) -> bool {
    let Some(id) = fragment_target(href) else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let target = window
        .document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    match target {
        Some(target) => {
            let options = ScrollToOptions::new();
            options.set_top(scroll_destination(target.offset_top(), header_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
            true
        }
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAppearance {
    Transparent,
    Solid,
}

impl NavAppearance {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavAppearance::Solid
        } else {
            NavAppearance::Transparent
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            NavAppearance::Solid => {
                "background: rgba(255, 255, 255, 0.95); box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1); backdrop-filter: blur(10px);"
            }
            NavAppearance::Transparent => "background: transparent; box-shadow: none; backdrop-filter: none;",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_targets() {
        assert_eq!(fragment_target("#features"), Some("features"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/privacy"), None);
    }

    #[test]
    fn destination_leaves_room_for_header() {
        assert_eq!(scroll_destination(1200, 80.0), 1120.0);
        assert_eq!(scroll_destination(40, 80.0), -40.0);
    }

    #[test]
    fn nav_turns_solid_past_threshold() {
        assert_eq!(NavAppearance::for_offset(0.0, 100.0), NavAppearance::Transparent);
        assert_eq!(NavAppearance::for_offset(100.0, 100.0), NavAppearance::Transparent);
        assert_eq!(NavAppearance::for_offset(100.5, 100.0), NavAppearance::Solid);
    }

    #[test]
    fn nav_styles() {
        assert!(NavAppearance::Solid.style().contains("blur(10px)"));
        assert!(NavAppearance::Transparent.style().contains("backdrop-filter: none"));
    }
}
