use log::{debug, info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Object, Reflect};

/// Element the captcha widget renders into.
pub const CAPTCHA_ELEMENT: &str = "#ebook-captcha";

/// Form id of a Formspree endpoint (`https://formspree.io/f/<id>`).
pub fn form_id(action: &str) -> Option<&str> {
    let path = action.split(['?', '#']).next().unwrap_or_default();
    let (prefix, id) = path.trim_end_matches('/').rsplit_once('/')?;
    if id.is_empty() || !prefix.ends_with("/f") {
        return None;
    }
    Some(id)
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn init_options(form_id: &str, element: &str) -> Result<Object, JsValue> {
    let captcha = Object::new();
    set(&captcha, "sitekey", &JsValue::from_str("auto"))?;
    set(&captcha, "element", &JsValue::from_str(element))?;

    let options = Object::new();
    set(&options, "formId", &JsValue::from_str(form_id))?;
    set(&options, "captcha", &captcha)?;
    Ok(options)
}

/// Calls `window.formspree.init` when the Formspree script is on the page.
/// Returns whether the widget was initialised.
pub fn init_captcha(action: &str, element: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(formspree) = Reflect::get(&window, &"formspree".into()) else {
        return false;
    };
    if !formspree.is_object() {
        debug!("Formspree script not loaded, skipping captcha");
        return false;
    }
    let Some(id) = form_id(action) else {
        warn!("No Formspree form id in {}", action);
        return false;
    };
    let init = Reflect::get(&formspree, &"init".into()).and_then(|f| f.dyn_into::<Function>());
    let Ok(init) = init else {
        warn!("formspree.init is not callable");
        return false;
    };

    match init_options(id, element).and_then(|options| init.call1(&formspree, &options)) {
        Ok(_) => {
            info!("Formspree captcha initialised for form {}", id);
            true
        }
        Err(e) => {
            warn!("Formspree captcha init failed: {:?}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_id_is_last_segment_of_endpoint() {
        assert_eq!(form_id("https://formspree.io/f/xqawaayb"), Some("xqawaayb"));
        assert_eq!(form_id("https://formspree.io/f/xqawaayb/"), Some("xqawaayb"));
        assert_eq!(form_id("https://formspree.io/f/abc123?ref=landing"), Some("abc123"));
    }

    #[test]
    fn non_formspree_actions_have_no_form_id() {
        assert_eq!(form_id("https://formspree.io/f/"), None);
        assert_eq!(form_id("https://example.com/contact"), None);
        assert_eq!(form_id(""), None);
    }
}
