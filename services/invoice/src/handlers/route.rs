use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Local;

use crate::error::InvoiceServiceError;
use crate::state::AppState;
use crate::usecase::route::ListRoutesUseCase;

/// Routes are scheduled per calendar month in the field team's local time.
pub async fn get_user_routes(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<String>>, InvoiceServiceError> {
    let usecase = ListRoutesUseCase {
        repo: state.route_schedule_repo(),
    };
    let routes = usecase
        .execute(&user_id, Local::now().date_naive())
        .await?;
    Ok(Json(routes))
}
