//! Axum route handlers for the tailoring form.

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    Form,
};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::generator::{tailor_experience, TailorOutcome};
use crate::state::AppState;
use crate::views::{index_page, results_page};

pub const JOB_DESCRIPTION_REQUIRED: &str = "Job description is required.";

/// Form fields in submission order; repeated keys are kept.
type FormFields = Vec<(String, String)>;

/// First value submitted under `name`, if any.
fn first_field(fields: FormFields, name: &str) -> Option<String> {
    fields
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// GET /
pub async fn handle_index() -> Html<String> {
    index_page()
}

/// POST /optimize
///
/// A body that is not a readable urlencoded form counts as a missing field.
/// Only a missing or empty field is rejected. Every upstream failure is
/// rendered into the result page rather than returned as an error status.
pub async fn handle_optimize(
    State(state): State<AppState>,
    form: Result<Form<FormFields>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let job_description = match form {
        Ok(Form(fields)) => first_field(fields, "job_description"),
        Err(rejection) => {
            debug!("Unreadable optimize form: {rejection}");
            None
        }
    }
    .filter(|jd| !jd.is_empty())
    .ok_or_else(|| AppError::Validation(JOB_DESCRIPTION_REQUIRED.to_string()))?;

    info!(
        "Tailoring experience for job description ({} bytes)",
        job_description.len()
    );

    let result = tailor_experience(
        state.completion.as_ref(),
        &state.experience,
        &job_description,
    )
    .await;

    let outcome = TailorOutcome::from_result(result);
    match &outcome {
        TailorOutcome::Generated(_) => info!("Rendering tailored experience"),
        TailorOutcome::Empty => info!("Rendering failure message for empty completion"),
        TailorOutcome::Failed(e) => warn!("Rendering completion error: {e}"),
    }

    Ok(results_page(&outcome.into_display_text()))
}
