use log::Level;

const DEFAULT_FORM_ACTION: &str = "https://formspree.io/f/xqawaayb";

pub const EBOOK_ASSET: &str = "AIForSmallBusinesseBook.pdf";

/// Formspree endpoint for the eBook form. Override at build time with
/// `EBOOK_FORM_ACTION`.
pub fn ebook_form_action() -> &'static str {
    option_env!("EBOOK_FORM_ACTION").unwrap_or(DEFAULT_FORM_ACTION)
}

pub fn contact_form_action() -> &'static str {
    option_env!("CONTACT_FORM_ACTION").unwrap_or(DEFAULT_FORM_ACTION)
}

pub const LOG_LEVEL: Level = Level::Info;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealSettings {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub stagger_secs: f64,
    pub offset_px: u32,
    pub duration_secs: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
            stagger_secs: 0.1,
            offset_px: 30,
            duration_secs: 0.6,
        }
    }
}

/// Tunables for the landing page, built once per page load.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Height of the fixed header; anchor scrolling stops this far above the target.
    pub header_offset: f64,
    /// Scroll offset past which the nav bar turns opaque.
    pub nav_solid_after: f64,
    pub contact_auto_close_ms: u32,
    pub notice_dismiss_ms: u32,
    pub reveal: RevealSettings,
    pub ebook_asset: &'static str,
    pub ebook_action: &'static str,
    pub contact_action: &'static str,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_offset: 80.0,
            nav_solid_after: 100.0,
            contact_auto_close_ms: 3_000,
            notice_dismiss_ms: 5_000,
            reveal: RevealSettings::default(),
            ebook_asset: EBOOK_ASSET,
            ebook_action: ebook_form_action(),
            contact_action: contact_form_action(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_layout() {
        let config = PageConfig::default();
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.nav_solid_after, 100.0);
        assert_eq!(config.contact_auto_close_ms, 3_000);
        assert_eq!(config.notice_dismiss_ms, 5_000);
        assert_eq!(config.ebook_asset, "AIForSmallBusinesseBook.pdf");
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn console_logging_starts_at_info() {
        assert_eq!(LOG_LEVEL, Level::Info);
        assert!(Level::Debug > LOG_LEVEL, "debug output stays off");
    }

    #[test]
    fn form_actions_point_at_an_endpoint() {
        assert!(ebook_form_action().starts_with("http"));
        assert!(contact_form_action().starts_with("http"));
    }
}
