//! Form Collector: the raw career form as submitted and its validated payload.

pub mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{validate_form, FieldError};

/// The career form exactly as the client submitted it.
///
/// Every field is optional on the wire so that a missing required field is
/// reported as a field error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerForm {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub summary: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub projects: Option<String>,
    pub job_roles: Option<String>,
    pub career_goals: Option<String>,
}

/// A validated form. Optional fields are `None` when left blank, never `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPayload {
    pub full_name: String,
    pub job_title: String,
    pub phone_number: String,
    pub email: String,
    pub website: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub projects: Option<String>,
    pub job_roles: Option<String>,
    pub career_goals: Option<String>,
}
