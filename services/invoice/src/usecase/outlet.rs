use crate::domain::repository::OutletRepository;
use crate::error::InvoiceServiceError;

// ── Resolve outlet ───────────────────────────────────────────────────────────

/// Maps an outlet name to its stable code. A miss is terminal: codes name
/// stored documents and key invoice rows, so nothing proceeds without one.
pub struct OutletResolver<R: OutletRepository> {
    pub repo: R,
}

impl<R: OutletRepository> OutletResolver<R> {
    pub async fn resolve(&self, outlet_name: &str) -> Result<String, InvoiceServiceError> {
        if outlet_name.is_empty() {
            return Err(InvoiceServiceError::MissingField("outlet_name"));
        }
        self.repo
            .find_code_by_name(outlet_name)
            .await?
            .ok_or_else(|| InvoiceServiceError::OutletNotFound(outlet_name.to_owned()))
    }
}

// ── ListOutlets ──────────────────────────────────────────────────────────────

pub struct ListOutletsUseCase<R: OutletRepository> {
    pub repo: R,
}

impl<R: OutletRepository> ListOutletsUseCase<R> {
    /// Outlet names on a route. No route selected yields an empty list.
    pub async fn execute(&self, route_name: Option<&str>) -> Result<Vec<String>, InvoiceServiceError> {
        match route_name.map(str::trim) {
            Some(route) if !route.is_empty() => self.repo.list_names_by_route(route).await,
            _ => Ok(Vec::new()),
        }
    }
}
