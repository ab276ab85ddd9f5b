//! Domain types and wire DTOs for the employee API.
//!
//! # Design
//! The remote service is loose about JSON types: identifiers, salaries and
//! ages show up as numbers or strings depending on the record. All of them
//! decode to text here, which is also how the edit form holds them, so the
//! controller never has to coerce anything.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned employee identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TextOrNumber::deserialize(deserializer).map(|v| Self(v.into_text()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }
}

/// Accepts a JSON string, number or null; null becomes empty text.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?
        .map(TextOrNumber::into_text)
        .unwrap_or_default())
}

/// A single employee record as listed by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(rename = "employee_name")]
    pub name: String,
    #[serde(rename = "employee_salary", deserialize_with = "lenient_text")]
    pub salary: String,
    #[serde(rename = "employee_age", deserialize_with = "lenient_text")]
    pub age: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Request payload for create and update. Values are sent exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub salary: String,
    pub age: String,
}

impl EmployeeFields {
    pub fn new(name: impl Into<String>, salary: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            salary: salary.into(),
            age: age.into(),
        }
    }
}

/// Envelope returned by create, update and delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Acknowledgement {
    /// The service reports some rejections as `"status":"error"` on a 2xx.
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

/// `GET /employees` wraps the records under `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    pub data: Vec<Employee>,
}

/// `GET /employee/{id}` returns the record fields at the top level. The id is
/// taken from the request, not from this body.
#[derive(Debug, Deserialize)]
pub(crate) struct EmployeeDetail {
    employee_name: String,
    #[serde(deserialize_with = "lenient_text")]
    employee_salary: String,
    #[serde(deserialize_with = "lenient_text")]
    employee_age: String,
    #[serde(default)]
    profile_image: Option<String>,
}

impl EmployeeDetail {
    pub(crate) fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.employee_name,
            salary: self.employee_salary,
            age: self.employee_age,
            profile_image: self.profile_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_accepts_numeric_and_text_fields() {
        let json = r#"{"id":1,"employee_name":"Tiger Nixon","employee_salary":320800,"employee_age":"61","profile_image":""}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, EmployeeId::from(1));
        assert_eq!(employee.name, "Tiger Nixon");
        assert_eq!(employee.salary, "320800");
        assert_eq!(employee.age, "61");
        assert_eq!(employee.profile_image.as_deref(), Some(""));
    }

    #[test]
    fn employee_null_salary_becomes_empty() {
        let json = r#"{"id":"7","employee_name":"X","employee_salary":null,"employee_age":20}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id.as_str(), "7");
        assert_eq!(employee.salary, "");
        assert!(employee.profile_image.is_none());
    }

    #[test]
    fn employee_missing_name_is_rejected() {
        let json = r#"{"id":1,"employee_salary":1,"employee_age":2}"#;
        assert!(serde_json::from_str::<Employee>(json).is_err());
    }

    #[test]
    fn employee_id_rejects_objects() {
        assert!(serde_json::from_str::<EmployeeId>(r#"{"id":1}"#).is_err());
    }

    #[test]
    fn fields_serialize_as_strings() {
        let fields = EmployeeFields::new("B", "200", "25");
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json, serde_json::json!({"name":"B","salary":"200","age":"25"}));
    }

    #[test]
    fn acknowledgement_detects_error_status() {
        let ack: Acknowledgement =
            serde_json::from_str(r#"{"status":"error","message":"bad age"}"#).unwrap();
        assert!(ack.is_error());
        let ack: Acknowledgement = serde_json::from_str(r#"{"data":"2"}"#).unwrap();
        assert!(!ack.is_error());
    }
}
