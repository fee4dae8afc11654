//! Prompt templates for structured extraction

/// Prompt templates for CV and job description extraction
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub cv_extraction: String,
    pub jd_summary: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            cv_extraction: CV_EXTRACTION_TEMPLATE.to_string(),
            jd_summary: JD_SUMMARY_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_cv_extraction(&self, cv_text: &str) -> String {
        self.cv_extraction.replace("{cv}", cv_text)
    }

    pub fn render_jd_summary(&self, jd_text: &str) -> String {
        self.jd_summary.replace("{job}", jd_text)
    }
}

const CV_EXTRACTION_TEMPLATE: &str = r#"Analyze the following CV and extract the candidate's details.

Respond with a single valid JSON object using exactly these keys:
"name", "education", "work_experience", "skills", "email", "phone_number".

- "name": full name of the candidate (string)
- "education": degrees, institutions and years, most recent or most relevant first (array of strings)
- "work_experience": the 2-3 most recent or relevant roles with job title, company, years and key responsibilities (array of strings)
- "skills": key technical and soft skills as comma-separated values (string)
- "email": the candidate's primary email address (string)
- "phone_number": the candidate's primary phone number (string)

If a section is not present in the CV, keep the key and leave its value empty.
If several emails or phone numbers are listed, choose the most likely personal contact.

<CV>
{cv}
</CV>"#;

const JD_SUMMARY_TEMPLATE: &str = r#"Analyze the following job description and extract its key elements.

Respond with a single valid JSON object. All keys and string values must use double quotes.
Use exactly these keys: "job_title", "responsibilities", "required_skills", "required_experience", "educational_qualifications".

- "responsibilities" and "educational_qualifications": JSON arrays when there are several items
- "required_skills": comma-separated string
- "required_experience": string

If a section is not found, keep the key with an empty string, or an empty array for "responsibilities" and "educational_qualifications".

<JOB DESCRIPTION>
{job}
</JOB DESCRIPTION>"#;
