use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct CarDoc { pub id: Uuid, pub brand: String, pub model: String, pub sku: i64 }

/// `sku` also accepts a numeric string.
#[derive(ToSchema)]
pub struct CreateCarDoc {
    pub brand: String,
    #[schema(min_length = 3)]
    pub model: String,
    pub sku: i64,
}

#[derive(ToSchema)]
pub struct UpdateCarDoc {
    /// Must equal the path id when present.
    pub id: Option<Uuid>,
    pub brand: Option<String>,
    #[schema(min_length = 3)]
    pub model: Option<String>,
    pub sku: Option<i64>,
}

#[derive(serde::Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandDoc {
    pub id: Uuid,
    pub name: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

#[derive(ToSchema)]
pub struct CreateBrandDoc {
    #[schema(min_length = 1)]
    pub name: String,
}

#[derive(ToSchema)]
pub struct UpdateBrandDoc {
    pub id: Option<Uuid>,
    #[schema(min_length = 1)]
    pub name: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cars::find_all,
        crate::routes::cars::find_by_sku,
        crate::routes::cars::find_by_id,
        crate::routes::cars::create,
        crate::routes::cars::update,
        crate::routes::cars::delete,
        crate::routes::brands::find_all,
        crate::routes::brands::find_by_id,
        crate::routes::brands::create,
        crate::routes::brands::update,
        crate::routes::brands::delete,
        crate::routes::seed::populate,
    ),
    components(
        schemas(
            HealthResponse,
            MessageDoc,
            CarDoc,
            CreateCarDoc,
            UpdateCarDoc,
            BrandDoc,
            CreateBrandDoc,
            UpdateBrandDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cars"),
        (name = "brands"),
        (name = "seed")
    )
)]
pub struct ApiDoc;
