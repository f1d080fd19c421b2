use axum::{Json, extract::State};

use crate::error::InvoiceServiceError;
use crate::state::AppState;
use crate::usecase::catalog::ListProductsUseCase;

pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, InvoiceServiceError> {
    let usecase = ListProductsUseCase {
        repo: state.catalog_repo(),
        client_id: state.catalog_client_id,
    };
    Ok(Json(usecase.execute().await?))
}
