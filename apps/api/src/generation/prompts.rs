// All LLM prompt templates for the generation pipeline.
// Placeholders use `{name}` and are filled by `llm_client::prompts::fill_template`.

pub const RESUME_TEMPLATE_NAME: &str = "generate_resume";
pub const ATS_SCORE_TEMPLATE_NAME: &str = "generate_ats_score";
pub const ATS_IMPROVEMENT_TEMPLATE_NAME: &str = "generate_ats_improvements";
pub const COVER_LETTER_TEMPLATE_NAME: &str = "generate_cover_letter";

/// System prompt for resume generation.
pub const RESUME_SYSTEM: &str = "You are an expert resume writer producing realistic, \
    impactful plain text resumes that fit on a single A4 page.";

/// Resume prompt.
/// Replace: {full_name_all_caps}, {job_title}, {contact_details}, {summary}, {skills},
///          {experience_json}, {education_json}, {projects_section}, {raw_context}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Write a one-page plain text resume (no HTML, no markdown, no bold) using this layout:

{full_name_all_caps}
{job_title}
{contact_details}

PROFESSIONAL SUMMARY
<a concise rewrite of the summary below>

SKILLS
<the skills below, grouped into categories such as "Frontend:", "Backend:", "Tools:" where obvious>

EXPERIENCE
<one block per experience entry>

EDUCATION
<one block per education entry>
{projects_section}
LAYOUT RULES:
1. Section headings are exactly PROFESSIONAL SUMMARY, SKILLS, EXPERIENCE, EDUCATION and PROJECTS, in ALL CAPS, never underlined, each preceded by one blank line.
2. Experience block: line 1 company name; line 2 job title in ALL CAPS; line 3 "<location> – <dates>" or just "<dates>" when there is no location; then at most three bullet lines indented by two spaces and starting with "* ". Quantify impact.
3. Education block: line 1 institution; line 2 degree in ALL CAPS; line 3 "<location> – <dates>" or just "<dates>"; optionally one short indented detail line (GPA, honors).
4. Project block: line 1 project name in ALL CAPS; line 2 one or two concise sentences; line 3 "Link: <link>" when a link exists.
5. Dates use MM/YYYY, MM/YYYY – MM/YYYY, MM/YYYY – Present or YYYY – YYYY. Normalize whatever the user typed.
6. One blank line between entries. Cut or summarize low-value detail so everything fits on one page.
7. Match the tone to the target roles and career goals.

SUMMARY:
{summary}

SKILLS:
{skills}

EXPERIENCE ENTRIES (JSON):
{experience_json}

EDUCATION ENTRIES (JSON):
{education_json}

USER INFORMATION (raw, for context):
{raw_context}

Return a JSON object with this EXACT schema:
{"resume": "<the complete resume as one plain text string>"}"#;

/// Section appended to the resume prompt when the user listed projects.
/// Replace: {projects_json}
pub const RESUME_PROJECTS_SECTION: &str = r#"
PROJECTS
<one block per project entry>

PROJECT ENTRIES (JSON):
{projects_json}
"#;

/// System prompt for ATS scoring.
pub const ATS_SCORE_SYSTEM: &str = "You are an expert Applicant Tracking System analyzer.";

/// ATS score prompt. Replace: {resume_text}
pub const ATS_SCORE_PROMPT_TEMPLATE: &str = r#"Evaluate how well the resume below would pass through an Applicant Tracking System.

Return a JSON object with this EXACT schema:
{"atsScore": 0-100, "atsFeedback": "* point one\n* point two"}

- atsScore: overall ATS compatibility from 0 to 100.
- atsFeedback: two or three actionable bullet points in one string, each starting with "* ", covering keywords, parseable formatting and section clarity.

RESUME:
{resume_text}"#;

/// System prompt for ATS improvement suggestions.
pub const ATS_IMPROVEMENT_SYSTEM: &str = "You are an expert ATS optimization consultant.";

/// ATS improvement prompt. Replace: {resume_text}, {score_context}
pub const ATS_IMPROVEMENT_PROMPT_TEMPLATE: &str = r#"Suggest three to five specific, actionable changes that would raise the ATS score of the resume below.

Consider keyword coverage for typical postings in this field, formatting an ATS can parse, section clarity, action verbs, quantified impact, and anything that could break parsing.

RESUME:
{resume_text}
{score_context}
Return a JSON object with this EXACT schema:
{"improvementSuggestions": ["* Suggestion one", "* Suggestion two"]}"#;

/// Score context appended to the improvement prompt. Replace: {ats_score}, {ats_feedback}
pub const ATS_SCORE_CONTEXT: &str = r#"
Current ATS Score: {ats_score}/100
Current ATS Feedback:
{ats_feedback}

Go beyond this feedback with more detailed suggestions.
"#;

/// System prompt for cover letters.
pub const COVER_LETTER_SYSTEM: &str = "You are an expert career advisor who writes \
    professional, engaging cover letters.";

/// Cover letter prompt. Replace: {job_roles}, {skills}, {experience}, {career_goals}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a cover letter tailored to the information below, highlighting the most relevant experience and skills.

Job Roles: {job_roles}
Skills: {skills}
Experience: {experience}
Career Goals: {career_goals}

Return a JSON object with this EXACT schema:
{"coverLetter": "<the complete cover letter as plain text>"}"#;
