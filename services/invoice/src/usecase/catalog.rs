use crate::domain::repository::ProductCatalogRepository;
use crate::error::InvoiceServiceError;

pub struct ListProductsUseCase<R: ProductCatalogRepository> {
    pub repo: R,
    pub client_id: i32,
}

impl<R: ProductCatalogRepository> ListProductsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<String>, InvoiceServiceError> {
        self.repo.list_descriptions(self.client_id).await
    }
}
