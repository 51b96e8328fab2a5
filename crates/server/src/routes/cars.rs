use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::Message;
use models::car::{Car, CreateCar, UpdateCar};
use serde_json::Value;
use tracing::info;

use crate::errors::JsonApiError;
use crate::routes::params;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/cars",
    tag = "cars",
    responses(
        (status = 200, description = "All cars", body = [crate::openapi::CarDoc])
    )
)]
pub async fn find_all(State(state): State<AppState>) -> Json<Vec<Car>> {
    let cars = state.cars.find_all().await;
    info!(count = cars.len(), "list cars");
    Json(cars)
}

#[utoipa::path(
    get, path = "/cars/sku/{sku}", tag = "cars",
    params(("sku" = i64, Path, description = "Car SKU")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CarDoc),
        (status = 400, description = "SKU is not an integer"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn find_by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Car>, JsonApiError> {
    let sku = params::integer(&sku)?;
    Ok(Json(state.cars.find_by_sku(sku).await?))
}

#[utoipa::path(
    get, path = "/cars/{id}", tag = "cars",
    params(("id" = Uuid, Path, description = "Car ID (UUID v4)")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CarDoc),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Car>, JsonApiError> {
    let id = params::uuid_v4(&id)?;
    Ok(Json(state.cars.find_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/cars", tag = "cars",
    request_body = crate::openapi::CreateCarDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CarDoc),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), JsonApiError> {
    let Json(body) = body?;
    let input = CreateCar::from_json(&body)?;
    let car = state.cars.create(input).await;
    Ok((StatusCode::CREATED, Json(car)))
}

#[utoipa::path(
    patch, path = "/cars/{id}", tag = "cars",
    params(("id" = Uuid, Path, description = "Car ID")),
    request_body = crate::openapi::UpdateCarDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CarDoc),
        (status = 400, description = "Validation Error or id mismatch"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Car>, JsonApiError> {
    let id = params::uuid(&id)?;
    let Json(body) = body?;
    let patch = UpdateCar::from_json(&body)?;
    Ok(Json(state.cars.update(id, patch).await?))
}

#[utoipa::path(
    delete, path = "/cars/{id}", tag = "cars",
    params(("id" = Uuid, Path, description = "Car ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 400, description = "Invalid UUID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, JsonApiError> {
    let id = params::uuid(&id)?;
    state.cars.delete(id).await?;
    Ok(Json(Message::new(format!("Car with id {id} deleted"))))
}
