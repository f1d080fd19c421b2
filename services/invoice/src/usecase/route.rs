use chrono::{Datelike, NaiveDate};

use crate::domain::repository::RouteScheduleRepository;
use crate::error::InvoiceServiceError;

/// Routes a user is scheduled on for the month containing `today`.
pub struct ListRoutesUseCase<R: RouteScheduleRepository> {
    pub repo: R,
}

impl<R: RouteScheduleRepository> ListRoutesUseCase<R> {
    pub async fn execute(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<Vec<String>, InvoiceServiceError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(InvoiceServiceError::MissingField("user_id"));
        }
        if !self.repo.user_exists(user_id).await? {
            return Err(InvoiceServiceError::UserNotFound);
        }
        self.repo.list_route_names(user_id, today.month()).await
    }
}
