use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::forms::{CareerForm, FormPayload};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// A single rejected field, keyed by its wire (camelCase) name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Length bounds for a text field, in characters.
struct LengthRule {
    field: &'static str,
    label: &'static str,
    min: usize,
    max: usize,
    min_message: Option<&'static str>,
    max_message: Option<&'static str>,
}

const FULL_NAME: LengthRule = LengthRule {
    field: "fullName",
    label: "Full name",
    min: 3,
    max: 100,
    min_message: None,
    max_message: None,
};
const JOB_TITLE: LengthRule = LengthRule {
    field: "jobTitle",
    label: "Job title",
    min: 3,
    max: 100,
    min_message: None,
    max_message: None,
};
const PHONE_NUMBER: LengthRule = LengthRule {
    field: "phoneNumber",
    label: "Phone number",
    min: 7,
    max: 20,
    min_message: Some("Phone number seems too short."),
    max_message: Some("Phone number seems too long."),
};
const SUMMARY: LengthRule = LengthRule {
    field: "summary",
    label: "Summary",
    min: 20,
    max: 1000,
    min_message: Some("Summary should be at least 20 characters."),
    max_message: None,
};
const SKILLS: LengthRule = LengthRule {
    field: "skills",
    label: "Skills description",
    min: 10,
    max: 1000,
    min_message: None,
    max_message: None,
};
const EXPERIENCE: LengthRule = LengthRule {
    field: "experience",
    label: "Experience description",
    min: 10,
    max: 5000,
    min_message: None,
    max_message: None,
};
const EDUCATION: LengthRule = LengthRule {
    field: "education",
    label: "Education description",
    min: 10,
    max: 3000,
    min_message: None,
    max_message: None,
};
const PROJECTS: LengthRule = LengthRule {
    field: "projects",
    label: "Projects description",
    min: 10,
    max: 5000,
    min_message: None,
    max_message: None,
};
const JOB_ROLES: LengthRule = LengthRule {
    field: "jobRoles",
    label: "Target job roles",
    min: 3,
    max: 200,
    min_message: None,
    max_message: None,
};
const CAREER_GOALS: LengthRule = LengthRule {
    field: "careerGoals",
    label: "Career goals",
    min: 10,
    max: 1000,
    min_message: None,
    max_message: None,
};

/// Validates the raw form and produces a `FormPayload`.
///
/// Every field is checked; the error list names all failing fields, in form order.
/// Values are trimmed. Blank optional fields become `None`.
pub fn validate_form(form: &CareerForm) -> Result<FormPayload, Vec<FieldError>> {
    let mut errors = Vec::new();

    let full_name = required(&form.full_name, &FULL_NAME, &mut errors);
    let job_title = required(&form.job_title, &JOB_TITLE, &mut errors);
    let phone_number = required(&form.phone_number, &PHONE_NUMBER, &mut errors);
    let email = email(&form.email, &mut errors);
    let website = optional_url(&form.website, "website", "website", &mut errors);
    let linkedin_url = optional_url(
        &form.linkedin_url,
        "linkedinUrl",
        "LinkedIn profile",
        &mut errors,
    );
    let github_url = optional_url(&form.github_url, "githubUrl", "GitHub profile", &mut errors);
    let summary = required(&form.summary, &SUMMARY, &mut errors);
    let skills = required(&form.skills, &SKILLS, &mut errors);
    let experience = required(&form.experience, &EXPERIENCE, &mut errors);
    let education = required(&form.education, &EDUCATION, &mut errors);
    let projects = optional(&form.projects, &PROJECTS, &mut errors);
    let job_roles = optional(&form.job_roles, &JOB_ROLES, &mut errors);
    let career_goals = optional(&form.career_goals, &CAREER_GOALS, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(FormPayload {
        full_name,
        job_title,
        phone_number,
        email,
        website,
        linkedin_url,
        github_url,
        summary,
        skills,
        experience,
        education,
        projects,
        job_roles,
        career_goals,
    })
}

/// Trimmed value, or `None` for absent/whitespace-only input.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn check_length(value: &str, rule: &LengthRule) -> Option<FieldError> {
    let len = value.chars().count();
    let message = if len < rule.min {
        rule.min_message.map(str::to_string).unwrap_or_else(|| {
            format!("{} must be at least {} characters.", rule.label, rule.min)
        })
    } else if len > rule.max {
        rule.max_message.map(str::to_string).unwrap_or_else(|| {
            format!("{} must be at most {} characters.", rule.label, rule.max)
        })
    } else {
        return None;
    };

    Some(FieldError {
        field: rule.field.to_string(),
        message,
    })
}

fn required(value: &Option<String>, rule: &LengthRule, errors: &mut Vec<FieldError>) -> String {
    let value = present(value).unwrap_or_default();
    if let Some(err) = check_length(value, rule) {
        errors.push(err);
    }
    value.to_string()
}

fn optional(
    value: &Option<String>,
    rule: &LengthRule,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = present(value)?;
    if let Some(err) = check_length(value, rule) {
        errors.push(err);
    }
    Some(value.to_string())
}

fn email(value: &Option<String>, errors: &mut Vec<FieldError>) -> String {
    let value = present(value).unwrap_or_default();
    if !EMAIL_RE.is_match(value) {
        errors.push(FieldError {
            field: "email".to_string(),
            message: "Invalid email address.".to_string(),
        });
    }
    value.to_string()
}

fn optional_url(
    value: &Option<String>,
    field: &str,
    label: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let value = present(value)?;
    if !is_absolute_url(value) {
        errors.push(FieldError {
            field: field.to_string(),
            message: format!("Invalid URL for {label}."),
        });
    }
    Some(value.to_string())
}

/// Only web links are accepted; they end up as hyperlinks in every export.
fn is_absolute_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CareerForm {
        CareerForm {
            full_name: Some("Michelle Hloom".to_string()),
            job_title: Some("Graphic Designer".to_string()),
            phone_number: Some("+1 555 123 4567".to_string()),
            email: Some("michelle@example.com".to_string()),
            website: Some("https://michelle.design".to_string()),
            linkedin_url: Some(String::new()),
            github_url: None,
            summary: Some("Designer with eight years of brand and product work.".to_string()),
            skills: Some("Figma, Illustrator, Photoshop, Typography".to_string()),
            experience: Some("Acme;NYC;2020-2022;Designer;Led rebrand".to_string()),
            education: Some("RISD;Providence, RI;2012-2016;BFA".to_string()),
            projects: Some("   ".to_string()),
            job_roles: None,
            career_goals: Some("Lead a product design team at a mission-driven company.".to_string()),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_form_produces_payload() {
        let payload = validate_form(&valid_form()).unwrap();
        assert_eq!(payload.full_name, "Michelle Hloom");
        assert_eq!(payload.website.as_deref(), Some("https://michelle.design"));
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let payload = validate_form(&valid_form()).unwrap();
        assert_eq!(payload.linkedin_url, None);
        assert_eq!(payload.github_url, None);
        assert_eq!(payload.projects, None);
        assert_eq!(payload.job_roles, None);
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut form = valid_form();
        form.full_name = Some("  Michelle Hloom \n".to_string());
        let payload = validate_form(&form).unwrap();
        assert_eq!(payload.full_name, "Michelle Hloom");
    }

    #[test]
    fn test_missing_required_fields_all_reported() {
        let errors = validate_form(&CareerForm::default()).unwrap_err();
        assert_eq!(
            fields(&errors),
            vec![
                "fullName",
                "jobTitle",
                "phoneNumber",
                "email",
                "summary",
                "skills",
                "experience",
                "education"
            ]
        );
    }

    #[test]
    fn test_short_name_message() {
        let mut form = valid_form();
        form.full_name = Some("Al".to_string());
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Full name must be at least 3 characters.");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut form = valid_form();
        // 3 characters, 6 bytes
        form.full_name = Some("Łéo".to_string());
        assert!(validate_form(&form).is_ok());
    }

    #[test]
    fn test_phone_bounds() {
        let mut form = valid_form();
        form.phone_number = Some("12345".to_string());
        assert_eq!(
            validate_form(&form).unwrap_err()[0].message,
            "Phone number seems too short."
        );

        form.phone_number = Some("1".repeat(21));
        assert_eq!(
            validate_form(&form).unwrap_err()[0].message,
            "Phone number seems too long."
        );
    }

    #[test]
    fn test_invalid_email() {
        for bad in ["michelle", "michelle@", "@example.com", "mi chelle@example.com"] {
            let mut form = valid_form();
            form.email = Some(bad.to_string());
            let errors = validate_form(&form).unwrap_err();
            assert_eq!(fields(&errors), vec!["email"], "accepted {bad}");
        }
    }

    #[test]
    fn test_invalid_optional_url() {
        let mut form = valid_form();
        form.github_url = Some("github.com/michelle".to_string());
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(fields(&errors), vec!["githubUrl"]);
        assert_eq!(errors[0].message, "Invalid URL for GitHub profile.");
    }

    #[test]
    fn test_optional_field_checked_when_present() {
        let mut form = valid_form();
        form.career_goals = Some("Grow".to_string());
        form.job_roles = Some("x".repeat(201));
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(fields(&errors), vec!["jobRoles", "careerGoals"]);
        assert_eq!(
            errors[0].message,
            "Target job roles must be at most 200 characters."
        );
    }

    #[test]
    fn test_summary_uses_should_wording() {
        let mut form = valid_form();
        form.summary = Some("Too short".to_string());
        assert_eq!(
            validate_form(&form).unwrap_err()[0].message,
            "Summary should be at least 20 characters."
        );
    }
}
