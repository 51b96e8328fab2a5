use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::brand::{Brand, CreateBrand, UpdateBrand};
use serde_json::Value;

use crate::errors::JsonApiError;
use crate::routes::params;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/brands",
    tag = "brands",
    responses(
        (status = 200, description = "All brands", body = [crate::openapi::BrandDoc])
    )
)]
pub async fn find_all(State(state): State<AppState>) -> Json<Vec<Brand>> {
    Json(state.brands.find_all().await)
}

#[utoipa::path(
    get, path = "/brands/{id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BrandDoc),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Brand>, JsonApiError> {
    let id = params::uuid(&id)?;
    Ok(Json(state.brands.find_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/brands", tag = "brands",
    request_body = crate::openapi::CreateBrandDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BrandDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Brand>), JsonApiError> {
    let Json(body) = body?;
    let input = CreateBrand::from_json(&body)?;
    Ok((StatusCode::CREATED, Json(state.brands.create(input).await)))
}

#[utoipa::path(
    patch, path = "/brands/{id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand ID")),
    request_body = crate::openapi::UpdateBrandDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::BrandDoc),
        (status = 400, description = "Validation Error or id mismatch"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Brand>, JsonApiError> {
    let id = params::uuid(&id)?;
    let Json(body) = body?;
    let patch = UpdateBrand::from_json(&body)?;
    Ok(Json(state.brands.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/brands/{id}", tag = "brands",
    params(("id" = Uuid, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    let id = params::uuid(&id)?;
    state.brands.delete(id).await?;
    Ok(Json(Message::new(format!("Brand with id {id} deleted"))))
}
