use gloo_net::http::{Method, Request};
use log::debug;
use serde_json::Value;
use thiserror::Error;
use web_sys::{FormData, HtmlFormElement};

pub const EBOOK_FAILED_ALERT: &str = "Oops! There was a problem submitting your form. Please try again.";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("endpoint rejected submission with status {status}: {details}")]
    Rejected { status: u16, details: Value },

    #[error("submit event did not come from a form")]
    MissingForm,

    #[error("could not read form data")]
    FormData,
}

/// The form's `method` attribute; anything but GET is posted.
pub fn method_for(method: &str) -> Method {
    if method.eq_ignore_ascii_case("get") {
        Method::GET
    } else {
        Method::POST
    }
}

pub fn form_data(form: &HtmlFormElement) -> Result<FormData, SubmitError> {
    FormData::new_with_form(form).map_err(|_| SubmitError::FormData)
}

/// Sends multipart form data to a form-processing endpoint.
///
/// Error bodies are read as JSON when possible; anything else is reported as
/// `null`.
pub async fn send_form(action: &str, method: &str, data: FormData) -> Result<(), SubmitError> {
    debug!("Submitting form to {}", action);
    let response = Request::new(action)
        .method(method_for(method))
        .header("Accept", "application/json")
        .body(data)
        .send()
        .await?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let details = response.json::<Value>().await.unwrap_or(Value::Null);
    Err(SubmitError::Rejected { status, details })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_defaults_to_post() {
        assert!(matches!(method_for("post"), Method::POST));
        assert!(matches!(method_for("POST"), Method::POST));
        assert!(matches!(method_for(""), Method::POST));
        assert!(matches!(method_for("GET"), Method::GET));
    }

    #[test]
    fn rejected_error_reports_status_and_body() {
        let err = SubmitError::Rejected {
            status: 500,
            details: serde_json::json!({ "error": "boom" }),
        };
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("boom"));
    }
}
