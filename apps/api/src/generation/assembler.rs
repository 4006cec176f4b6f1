//! Prompt assembly: projects a validated `FormPayload` into the variables each
//! prompt template expects. Pure and deterministic; no validation happens here.

use serde::Serialize;

use crate::entries::{parse_entries, EntryKind, ParsedEntry};
use crate::errors::AppError;
use crate::forms::FormPayload;
use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, RESUME_PROJECTS_SECTION, RESUME_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{fill_template, NOT_PROVIDED};

const DEFAULT_CAREER_GOALS: &str = "achieve success in the targeted role";

/// Variables for the resume prompt.
#[derive(Debug, Clone, Serialize)]
pub struct ResumePromptVars<'a> {
    pub full_name_all_caps: String,
    pub job_title: &'a str,
    pub contact_details: String,
    pub summary: &'a str,
    pub skills: &'a str,
    pub experience_entries: Vec<ParsedEntry>,
    pub education_entries: Vec<ParsedEntry>,
    /// `None` when the user listed no projects; the PROJECTS section is dropped.
    pub project_entries: Option<Vec<ParsedEntry>>,
    #[serde(skip)]
    payload: &'a FormPayload,
}

/// Variables for the cover letter prompt, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverLetterPromptVars<'a> {
    pub job_roles: String,
    pub skills: &'a str,
    pub experience: &'a str,
    pub career_goals: &'a str,
}

/// Builds the contact block: phone and email always, then website, LinkedIn and
/// GitHub lines only when present and non-blank. One item per line.
pub fn build_contact_details(payload: &FormPayload) -> String {
    let mut lines = vec![
        format!("Phone: {}", payload.phone_number),
        format!("Email: {}", payload.email),
    ];

    let optional = [
        ("Website", &payload.website),
        ("LinkedIn", &payload.linkedin_url),
        ("GitHub", &payload.github_url),
    ];
    for (label, value) in optional {
        if let Some(value) = non_blank(value) {
            lines.push(format!("{label}: {value}"));
        }
    }

    lines.join("\n")
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl<'a> ResumePromptVars<'a> {
    pub fn from_payload(payload: &'a FormPayload) -> Self {
        let project_entries = parse_entries(payload.projects.as_deref(), EntryKind::Project);

        Self {
            full_name_all_caps: payload.full_name.to_uppercase(),
            job_title: &payload.job_title,
            contact_details: build_contact_details(payload),
            summary: &payload.summary,
            skills: &payload.skills,
            experience_entries: parse_entries(Some(payload.experience.as_str()), EntryKind::Experience),
            education_entries: parse_entries(Some(payload.education.as_str()), EntryKind::Education),
            project_entries: (!project_entries.is_empty()).then_some(project_entries),
            payload,
        }
    }

    /// Raw user input, passed to the model as context.
    fn raw_context(&self) -> String {
        let p = self.payload;
        let or_not_provided = |v: &Option<String>| non_blank(v).unwrap_or(NOT_PROVIDED).to_string();

        [
            format!("Full Name: {}", p.full_name),
            format!("Job Title for Header: {}", p.job_title),
            format!("Phone: {}", p.phone_number),
            format!("Email: {}", p.email),
            format!("Website: {}", or_not_provided(&p.website)),
            format!("LinkedIn: {}", or_not_provided(&p.linkedin_url)),
            format!("GitHub: {}", or_not_provided(&p.github_url)),
            format!("Target Job Role(s): {}", or_not_provided(&p.job_roles)),
            format!("Experience: {}", p.experience),
            format!("Education: {}", p.education),
            format!("Projects: {}", or_not_provided(&p.projects)),
            format!("Career Goals: {}", or_not_provided(&p.career_goals)),
        ]
        .join("\n")
    }

    /// Fills the resume template.
    pub fn render(&self) -> Result<String, AppError> {
        let experience_json = to_json(&self.experience_entries, "experience entries")?;
        let education_json = to_json(&self.education_entries, "education entries")?;

        let projects_section = match &self.project_entries {
            Some(projects) => {
                let projects_json = to_json(projects, "project entries")?;
                fill_template(
                    RESUME_PROJECTS_SECTION,
                    &[("projects_json", projects_json.as_str())],
                )
            }
            None => String::new(),
        };

        let raw_context = self.raw_context();

        Ok(fill_template(
            RESUME_PROMPT_TEMPLATE,
            &[
                ("full_name_all_caps", self.full_name_all_caps.as_str()),
                ("job_title", self.job_title),
                ("contact_details", self.contact_details.as_str()),
                ("summary", self.summary),
                ("skills", self.skills),
                ("experience_json", experience_json.as_str()),
                ("education_json", education_json.as_str()),
                ("projects_section", projects_section.as_str()),
                ("raw_context", raw_context.as_str()),
            ],
        ))
    }
}

impl<'a> CoverLetterPromptVars<'a> {
    pub fn from_payload(payload: &'a FormPayload) -> Self {
        let job_roles = match non_blank(&payload.job_roles) {
            Some(roles) => roles.to_string(),
            None => format!(
                "target roles based on resume content ({})",
                payload.job_title
            ),
        };

        Self {
            job_roles,
            skills: &payload.skills,
            experience: &payload.experience,
            career_goals: non_blank(&payload.career_goals).unwrap_or(DEFAULT_CAREER_GOALS),
        }
    }

    pub fn render(&self) -> String {
        fill_template(
            COVER_LETTER_PROMPT_TEMPLATE,
            &[
                ("job_roles", self.job_roles.as_str()),
                ("skills", self.skills),
                ("experience", self.experience),
                ("career_goals", self.career_goals),
            ],
        )
    }
}

fn to_json<T: Serialize>(value: &T, what: &str) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize {what}: {e}")))
}
