use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::vacancy_dto::{
        CreateVacancyPayload, CreateVacancyResponse, ReplaceFaqsPayload, ReplaceFaqsResponse,
    },
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Json(payload): Json<CreateVacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let vacante_id = state.vacancy_service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateVacancyResponse { vacante_id }),
    ))
}

#[axum::debug_handler]
pub async fn replace_faqs(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ReplaceFaqsPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let updated = state.vacancy_service.replace_faqs(id, payload.faqs).await?;
    Ok(Json(ReplaceFaqsResponse { updated }))
}

#[axum::debug_handler]
pub async fn get_vacancy_knowledge(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    match state.knowledge_service.fetch(id).await? {
        Some(knowledge) => Ok(Json(knowledge)),
        None => Err(Error::NotFound("Vacancy not found".to_string())),
    }
}
