//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The list/detail envelope asymmetry of the
//! remote service is handled here and nowhere else: the list payload sits
//! under `data`, the detail payload is the bare record.

use std::borrow::Cow;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Acknowledgement, Employee, EmployeeDetail, EmployeeFields, EmployeeId, ListEnvelope};

/// Synchronous, stateless codec for the employee API.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, "employees".to_string())
    }

    pub fn build_get_employee(&self, id: &EmployeeId) -> HttpRequest {
        self.bodyless(HttpMethod::Get, format!("employee/{}", path_segment(id)))
    }

    pub fn build_create_employee(&self, fields: &EmployeeFields) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Post, "create".to_string(), fields)
    }

    pub fn build_update_employee(
        &self,
        id: &EmployeeId,
        fields: &EmployeeFields,
    ) -> Result<HttpRequest, ApiError> {
        self.with_json(HttpMethod::Put, format!("update/{}", path_segment(id)), fields)
    }

    pub fn build_delete_employee(&self, id: &EmployeeId) -> HttpRequest {
        self.bodyless(HttpMethod::Delete, format!("delete/{}", path_segment(id)))
    }

    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        check_status(&response)?;
        let envelope: ListEnvelope = decode(&response.body)?;
        Ok(envelope.data)
    }

    /// The detail body does not reliably carry the id, so the caller passes
    /// the one it asked for.
    pub fn parse_get_employee(
        &self,
        id: &EmployeeId,
        response: HttpResponse,
    ) -> Result<Employee, ApiError> {
        check_status(&response)?;
        let detail: EmployeeDetail = decode(&response.body)?;
        Ok(detail.into_employee(id.clone()))
    }

    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<Acknowledgement, ApiError> {
        parse_acknowledgement(response)
    }

    pub fn parse_update_employee(&self, response: HttpResponse) -> Result<Acknowledgement, ApiError> {
        parse_acknowledgement(response)
    }

    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<Acknowledgement, ApiError> {
        parse_acknowledgement(response)
    }

    fn bodyless(&self, method: HttpMethod, resource: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}/{resource}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json(
        &self,
        method: HttpMethod,
        resource: String,
        fields: &EmployeeFields,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(fields).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}/{resource}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Ids come from the server; keep each one inside a single path segment.
fn path_segment(id: &EmployeeId) -> Cow<'_, str> {
    match id.as_str() {
        "." => Cow::Borrowed("%2E"),
        ".." => Cow::Borrowed("%2E%2E"),
        raw => urlencoding::encode(raw),
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn parse_acknowledgement(response: HttpResponse) -> Result<Acknowledgement, ApiError> {
    check_status(&response)?;
    let ack: Acknowledgement = decode(&response.body)?;
    if ack.is_error() {
        return Err(ApiError::Validation {
            status: response.status,
            message: ack.message.unwrap_or_else(|| "request rejected".to_string()),
        });
    }
    Ok(ack)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        _ if response.is_success() => Ok(()),
        404 => Err(ApiError::NotFound),
        400 | 422 => Err(ApiError::Validation {
            status: response.status,
            message: rejection_message(&response.body),
        }),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}

/// Prefer the envelope's `message` when the rejection body is JSON.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<Acknowledgement>(body)
        .ok()
        .and_then(|ack| ack.message)
        .unwrap_or_else(|| body.to_string())
}
