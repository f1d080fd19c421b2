use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::error::InvoiceServiceError;
use crate::state::AppState;
use crate::usecase::outlet::ListOutletsUseCase;

#[derive(Deserialize)]
pub struct GetOutletsQuery {
    #[serde(rename = "routeName")]
    pub route_name: Option<String>,
}

pub async fn get_outlets(
    State(state): State<AppState>,
    Query(query): Query<GetOutletsQuery>,
) -> Result<Json<Vec<String>>, InvoiceServiceError> {
    let usecase = ListOutletsUseCase {
        repo: state.outlet_repo(),
    };
    let names = usecase.execute(query.route_name.as_deref()).await?;
    Ok(Json(names))
}
