// Prompt text for tailoring the experience section to a job description.
// The job description and experience are interpolated once, by `format!`,
// so neither can inject further placeholders.

/// Role and task framing that opens every tailoring prompt.
pub const TAILOR_TASK: &str = "Task: You are an expert in resume optimization for ATS \
(Applicant Tracking System) compatibility. Your task is to update the candidate's resume so that \
it highlights every relevant skill, tool, and keyword from the provided job description, even \
where the candidate has no direct experience with them. Follow these steps:";

/// Numbered guidance steps, in the order the model should apply them.
pub const TAILOR_STEPS: &str = r#"1. Extract Skills and Tools: Identify the key skills, tools, technologies, methodologies, and industry-specific terminology in the job description, including specific software, programming languages, frameworks, and processes.

2. Update Experience: Rewrite the candidate's work experience to incorporate the identified skills and tools so that they align with the job description. Where the candidate lacks direct experience with a technology, frame the work to show transferable knowledge or experience with similar technologies.

3. Responsibilities & Achievements: Integrate key responsibilities and achievements from the job description into the work experience. Use action verbs and measurable results (percentage improvements, time saved, revenue generated) to show the value delivered and how it matches the role's requirements.

4. ATS Optimization: Use clear section headings (e.g. "Experience", "Skills & Tools", "Education", "Certifications"), bullet points, and concise action verbs. Avoid complex formatting such as tables or images so that ATS software can read and process the resume accurately.

5. Metrics & Impact: Quantify impact in previous roles wherever possible, e.g. "improved operational efficiency by 30%" or "reduced data processing time by 40%", so that ATS and hiring managers recognize measurable results.

6. Language & Tone: Match the tone and language of the job description. Reuse its phrasing and terminology while staying professional and clear.

7. Customization & Transferable Skills: Where a listed tool or skill is missing from the candidate's background, present that background so it shows the ability to adapt quickly, emphasizing transferable skills that fill the gap.

8. Objective: Align the resume objective closely with the job description, reflecting enthusiasm for the role and how the candidate's expertise matches the employer's needs."#;

/// Closing instruction that limits the model's answer.
pub const TAILOR_CLOSING: &str = "Provide only the updated full experience section of the resume.";

/// Builds the tailoring prompt: task, steps, job description, experience, closing.
pub fn build_tailoring_prompt(job_description: &str, experience: &str) -> String {
    format!(
        "{TAILOR_TASK}\n\n{TAILOR_STEPS}\n\n\
         Job Description: {job_description}\n\n\
         Resume Experience: {experience}\n\n\
         {TAILOR_CLOSING}\n"
    )
}
