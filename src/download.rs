//! Client-side "save as" for the eBook PDF.

use gloo_net::http::Request;
use log::{error, info, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Uint8Array};
use web_sys::{Blob, HtmlAnchorElement, Url};

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("asset request failed: {0}")]
    Fetch(#[from] gloo_net::Error),

    #[error("asset request returned status {0}")]
    Status(u16),

    #[error("browser refused to build the download: {0}")]
    Dom(String),
}

fn dom_error(err: JsValue) -> DownloadError {
    DownloadError::Dom(format!("{:?}", err))
}

/// Fetches `url` and hands it to the browser as a download named `filename`.
pub async fn save_asset(url: &str, filename: &str) -> Result<(), DownloadError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(DownloadError::Status(response.status()));
    }
    let bytes = response.binary().await?;
    trigger_save(&bytes, filename)
}

fn trigger_save(bytes: &[u8], filename: &str) -> Result<(), DownloadError> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(dom_error)?;
    let object_url = Url::create_object_url_with_blob(&blob).map_err(dom_error)?;

    let result = click_hidden_anchor(&object_url, filename);
    if let Err(e) = Url::revoke_object_url(&object_url) {
        warn!("Could not release download URL: {:?}", e);
    }
    result
}

fn click_hidden_anchor(href: &str, filename: &str) -> Result<(), DownloadError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError::Dom("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| DownloadError::Dom("no body".into()))?;

    let anchor = document
        .create_element("a")
        .map_err(dom_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DownloadError::Dom("created element is not an anchor".into()))?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").map_err(dom_error)?;

    body.append_child(&anchor).map_err(dom_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(dom_error)?;
    Ok(())
}

/// Opens the asset in a new browsing context when the blob route fails.
pub fn open_directly(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            error!("Could not open {}: {:?}", url, e);
        }
    }
}

/// Save-as with fallback. Returns true when the blob download was triggered.
pub async fn download_or_open(url: &str, filename: &str) -> bool {
    match save_asset(url, filename).await {
        Ok(()) => {
            info!("Download triggered successfully");
            true
        }
        Err(e) => {
            error!("Download failed: {}", e);
            open_directly(url);
            false
        }
    }
}
