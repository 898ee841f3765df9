//! Payloads served by `/api/v1/*`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_COMPANY_NAME: &str = "Pivotal";
pub const DEFAULT_SPACE_NAME: &str = "development";

/// Deployment details from `/api/v1/info`.
///
/// Every field is optional on the wire; the accessors apply the defaults the
/// landing page falls back to. A field of the wrong JSON type reads as absent
/// rather than failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    #[serde(
        rename = "CompanyName",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub company_name: Option<String>,
    #[serde(
        rename = "ExperimentationSpaceName",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub space_name: Option<String>,
    #[serde(
        rename = "IgnitionOrgCount",
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub org_count: Option<u64>,
}

impl Info {
    pub fn company_name(&self) -> &str {
        non_empty(self.company_name.as_deref()).unwrap_or(DEFAULT_COMPANY_NAME)
    }

    pub fn space_name(&self) -> &str {
        non_empty(self.space_name.as_deref()).unwrap_or(DEFAULT_SPACE_NAME)
    }

    pub fn org_count(&self) -> u64 {
        self.org_count.unwrap_or(0)
    }
}

/// The signed-in user's profile from `/api/v1/profile`.
///
/// Opaque: any JSON object decodes, and it serializes back unchanged. Only
/// string values of a few well-known keys are ever read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    fields: Map<String, Value>,
}

impl Profile {
    /// Add or replace one key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// `key` as a non-blank string; other JSON types read as absent.
    pub fn text(&self, key: &str) -> Option<&str> {
        non_empty(self.fields.get(key).and_then(Value::as_str))
    }

    pub fn name(&self) -> Option<&str> {
        self.text("Name")
    }

    pub fn account_name(&self) -> Option<&str> {
        self.text("AccountName")
    }

    pub fn email(&self) -> Option<&str> {
        self.text("Email")
    }

    /// Best label for the user: name, then account name, then email.
    pub fn display_name(&self) -> Option<&str> {
        self.name()
            .or_else(|| self.account_name())
            .or_else(|| self.email())
    }
}

impl From<Map<String, Value>> for Profile {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// The user's playground org from `/api/v1/organization`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub guid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota_definition_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_isolation_segment_guid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

/// Whole non-negative numbers, floats truncated, numeric strings; anything
/// else reads as absent.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn info_defaults_when_fields_are_missing() {
        let info: Info = serde_json::from_value(json!({})).unwrap();
        assert_eq!(info.company_name(), "Pivotal");
        assert_eq!(info.space_name(), "development");
        assert_eq!(info.org_count(), 0);
    }

    #[test]
    fn info_reads_wire_names() {
        let info: Info = serde_json::from_value(json!({
            "CompanyName": "Maximus",
            "ExperimentationSpaceName": "prod",
            "IgnitionOrgCount": 42
        }))
        .unwrap();
        assert_eq!(info.company_name(), "Maximus");
        assert_eq!(info.space_name(), "prod");
        assert_eq!(info.org_count(), 42);
    }

    #[test]
    fn blank_company_name_falls_back() {
        let info = Info {
            company_name: Some("  ".into()),
            ..Info::default()
        };
        assert_eq!(info.company_name(), DEFAULT_COMPANY_NAME);
    }

    #[test]
    fn float_org_count_is_accepted() {
        let info: Info = serde_json::from_value(json!({
            "CompanyName": "Maximus",
            "IgnitionOrgCount": 42.0
        }))
        .unwrap();
        assert_eq!(info.company_name(), "Maximus");
        assert_eq!(info.org_count(), 42);
    }

    #[test]
    fn malformed_fields_fall_back_without_failing() {
        let info: Info = serde_json::from_value(json!({
            "CompanyName": 7,
            "ExperimentationSpaceName": null,
            "IgnitionOrgCount": -3
        }))
        .unwrap();
        assert_eq!(info.company_name(), "Pivotal");
        assert_eq!(info.space_name(), "development");
        assert_eq!(info.org_count(), 0);

        let info: Info =
            serde_json::from_value(json!({ "IgnitionOrgCount": "17" })).unwrap();
        assert_eq!(info.org_count(), 17);

        let info: Info =
            serde_json::from_value(json!({ "IgnitionOrgCount": { "total": 3 } })).unwrap();
        assert_eq!(info.org_count(), 0);
    }

    #[test]
    fn profile_round_trips_unchanged() {
        let raw = json!({
            "AccountName": "tester@pivotal.io",
            "Subject": "abc-123",
            "Groups": ["admins"]
        });
        let profile: Profile = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.display_name(), Some("tester@pivotal.io"));
        assert_eq!(profile.get("Subject"), Some(&json!("abc-123")));
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn profile_with_structured_name_still_decodes() {
        let raw = json!({ "Name": { "given": "Tess" }, "AccountName": "tester" });
        let profile: Profile = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(profile.name(), None);
        assert_eq!(profile.display_name(), Some("tester"));
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn display_name_prefers_name() {
        let profile = Profile::default()
            .with("Name", "Tess Ter")
            .with("AccountName", "tester");
        assert_eq!(profile.display_name(), Some("Tess Ter"));
        assert_eq!(Profile::default().display_name(), None);
        assert_eq!(
            Profile::default().with("Email", " ").display_name(),
            None
        );
    }

    #[test]
    fn organization_tolerates_missing_optional_fields() {
        let org: Organization =
            serde_json::from_value(json!({ "guid": "test-org-guid", "name": "ignition-testuser" }))
                .unwrap();
        assert_eq!(org.guid, "test-org-guid");
        assert!(org.url.is_none());
    }
}
