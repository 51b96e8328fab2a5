use axum::extract::State;

use crate::state::AppState;

/// 追加种子数据（车辆与品牌），重复调用会重复追加
#[utoipa::path(
    get,
    path = "/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Seed executed", body = String)
    )
)]
pub async fn populate(State(state): State<AppState>) -> &'static str {
    state.seed.populate().await
}
