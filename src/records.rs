//! Records captured from form submissions and written to local storage.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use web_sys::FormData;

pub const PHONE_NOT_PROVIDED: &str = "Not provided";

/// Text values read out of a submitted form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    /// Reads the named fields; missing and non-text entries are skipped.
    pub fn from_form_data(data: &FormData, names: &[&str]) -> Self {
        let values = names
            .iter()
            .filter_map(|name| data.get(name).as_string().map(|v| (name.to_string(), v)))
            .collect();
        Self(values)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// ISO-8601 UTC with milliseconds, e.g. `2024-05-01T12:30:00.123Z`.
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EbookRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: String,
    pub timestamp: String,
}

impl EbookRequest {
    pub const FIELDS: [&'static str; 4] = ["email", "firstName", "lastName", "phone"];

    pub fn capture(fields: &FormFields, now: DateTime<Utc>) -> Self {
        let phone = fields
            .get("phone")
            .filter(|p| !p.is_empty())
            .unwrap_or(PHONE_NOT_PROVIDED)
            .to_string();

        Self {
            email: fields.owned("email"),
            first_name: fields.owned("firstName"),
            last_name: fields.owned("lastName"),
            phone,
            timestamp: timestamp(now),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub timestamp: String,
}

impl ContactRecord {
    pub const FIELDS: [&'static str; 4] = ["firstName", "lastName", "email", "message"];

    pub fn capture(fields: &FormFields, now: DateTime<Utc>) -> Self {
        Self {
            first_name: fields.owned("firstName"),
            last_name: fields.owned("lastName"),
            email: fields.owned("email"),
            message: fields.owned("message"),
            timestamp: timestamp(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn timestamp_uses_iso_millis_with_z() {
        assert_eq!(timestamp(fixed_now()), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn ebook_phone_defaults_when_blank() {
        let fields: FormFields = [
            ("email", "jane@example.com"),
            ("firstName", "Jane"),
            ("lastName", "Doe"),
            ("phone", ""),
        ]
        .into_iter()
        .collect();

        let record = EbookRequest::capture(&fields, fixed_now());
        assert_eq!(record.phone, PHONE_NOT_PROVIDED);
        assert_eq!(record.email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn ebook_serializes_with_camel_case_keys() {
        let fields: FormFields = [
            ("email", "jane@example.com"),
            ("firstName", "Jane"),
            ("lastName", "Doe"),
            ("phone", "555-0100"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(EbookRequest::capture(&fields, fixed_now())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "email": "jane@example.com",
                "firstName": "Jane",
                "lastName": "Doe",
                "phone": "555-0100",
                "timestamp": "2024-05-01T12:30:00.000Z",
            })
        );
    }

    #[test]
    fn missing_contact_fields_become_null() {
        let fields: FormFields = [("email", "a@b.co")].into_iter().collect();
        let json = serde_json::to_value(ContactRecord::capture(&fields, fixed_now())).unwrap();

        assert_eq!(json["email"], "a@b.co");
        assert!(json["firstName"].is_null());
        assert!(json["message"].is_null());
    }
}
