use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::{json, Value};

use crate::database::redemptions_repo;
use crate::error::AppError;
use crate::services::rewards_service::{self, RedemptionView, RewardView};
use crate::state::AppState;
use crate::web::middleware::auth::AuthenticatedUser;

pub async fn list_rewards_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Vec<RewardView>>, AppError> {
    let views = rewards_service::list_rewards(&state.pool, &state.rewards, &auth_user.id).await?;
    Ok(Json(views))
}

pub async fn redeem_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    Path(reward_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<RedemptionView>, AppError> {
    let view =
        rewards_service::redeem(&state.pool, &state.rewards, &auth_user.id, &reward_id).await?;
    Ok(Json(view))
}

pub async fn redemption_history_handler(
    Extension(auth_user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let rows = redemptions_repo::list_for_user(&state.pool, &auth_user.id).await?;

    let redemptions: Vec<Value> = rows
        .into_iter()
        .map(|row| {
            let title = state
                .rewards
                .iter()
                .find(|r| r.id == row.reward_id)
                .map(|r| r.title.clone())
                .unwrap_or_default();
            json!({
                "redemption_id": row.redemption_id,
                "reward_id": row.reward_id,
                "reward_title": title,
                "cost_points": row.cost_points,
                "code": row.code,
                "created_at": row.created_at,
            })
        })
        .collect();

    Ok(Json(json!({ "redemptions": redemptions })))
}
