use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::warn;

use fieldsales_invoice_schema::{invoice_details, mobi_users, outlets, products, route_schedules};

use crate::domain::repository::{
    InvoiceRepository, OutletRepository, ProductCatalogRepository, RouteScheduleRepository,
};
use crate::domain::types::{InvoiceRecord, ProductKey};
use crate::error::InvoiceServiceError;

// ── Outlet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOutletRepository {
    pub db: Arc<DatabaseConnection>,
}

impl OutletRepository for DbOutletRepository {
    async fn find_code_by_name(
        &self,
        outlet_name: &str,
    ) -> Result<Option<String>, InvoiceServiceError> {
        let model = outlets::Entity::find()
            .filter(outlets::Column::OutletName.eq(outlet_name))
            .one(self.db.as_ref())
            .await
            .context("find outlet by name")?;
        Ok(model.map(|m| m.outlet_code))
    }

    async fn list_names_by_route(
        &self,
        route_name: &str,
    ) -> Result<Vec<String>, InvoiceServiceError> {
        let models = outlets::Entity::find()
            .filter(outlets::Column::ClientRoute.eq(route_name))
            .order_by_asc(outlets::Column::OutletName)
            .all(self.db.as_ref())
            .await
            .context("list outlets by route")?;
        Ok(models.into_iter().map(|m| m.outlet_name).collect())
    }
}

// ── Invoice repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInvoiceRepository {
    pub db: Arc<DatabaseConnection>,
}

impl InvoiceRepository for DbInvoiceRepository {
    async fn insert(&self, record: &InvoiceRecord) -> Result<i32, InvoiceServiceError> {
        let txn = self
            .db
            .as_ref()
            .begin()
            .await
            .context("begin invoice transaction")
            .map_err(InvoiceServiceError::Persistence)?;

        match invoice_active_model(record).insert(&txn).await {
            Ok(model) => {
                txn.commit()
                    .await
                    .context("commit invoice transaction")
                    .map_err(InvoiceServiceError::Persistence)?;
                Ok(model.id)
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    warn!(error = %rollback, "invoice transaction rollback failed");
                }
                Err(InvoiceServiceError::Persistence(
                    anyhow::Error::new(e).context("insert invoice details"),
                ))
            }
        }
    }
}

fn invoice_active_model(record: &InvoiceRecord) -> invoice_details::ActiveModel {
    // Quantities are bounded by i32::MAX when parsed.
    let qty = |key: ProductKey| Set(record.quantities.get(key) as i32);
    invoice_details::ActiveModel {
        user_id: Set(record.user_id.clone()),
        outlet_code: Set(record.outlet_code.clone()),
        outlet_name: Set(record.outlet_name.clone()),
        invoice_available: Set(record.invoice_available),
        display_type: Set(record.display_type.as_str().to_owned()),
        invoice_date: Set(record.invoice_date),
        invoice_number: Set(record.invoice_number.clone()),
        invoice_document: Set(record
            .invoice_document_key
            .as_ref()
            .map(|k| k.as_str().to_owned())),
        sensodent_k_fr_75gm: qty(ProductKey::SensodentKFr75gm),
        sensodent_kf_cp_75gm: qty(ProductKey::SensodentKfCp75gm),
        sensodent_k_fr_125gm: qty(ProductKey::SensodentKFr125gm),
        sensodent_kf_cp_125gm: qty(ProductKey::SensodentKfCp125gm),
        sensodent_kf_cp_15g: qty(ProductKey::SensodentKfCp15g),
        sensodent_k_fr_15g: qty(ProductKey::SensodentKFr15g),
        kidodent_cavity_shield: qty(ProductKey::KidodentCavityShield),
        ..Default::default()
    }
}

// ── Product catalog repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductCatalogRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ProductCatalogRepository for DbProductCatalogRepository {
    async fn list_descriptions(&self, client_id: i32) -> Result<Vec<String>, InvoiceServiceError> {
        let descriptions = products::Entity::find()
            .select_only()
            .column(products::Column::ProductDescription)
            .filter(products::Column::ClientId.eq(client_id))
            .filter(products::Column::Deleted.eq(false))
            .distinct()
            .order_by_asc(products::Column::ProductDescription)
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await
            .context("list product descriptions")?;
        Ok(descriptions)
    }
}

// ── Route schedule repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRouteScheduleRepository {
    pub db: Arc<DatabaseConnection>,
}

impl RouteScheduleRepository for DbRouteScheduleRepository {
    async fn user_exists(&self, user_id: &str) -> Result<bool, InvoiceServiceError> {
        let user = mobi_users::Entity::find_by_id(user_id.to_owned())
            .one(self.db.as_ref())
            .await
            .context("find mobile user")?;
        Ok(user.is_some())
    }

    async fn list_route_names(
        &self,
        user_id: &str,
        month: u32,
    ) -> Result<Vec<String>, InvoiceServiceError> {
        let routes = route_schedules::Entity::find()
            .select_only()
            .column(route_schedules::Column::RouteName)
            .filter(route_schedules::Column::UserId.eq(user_id))
            .filter(route_schedules::Column::Month.eq(month as i32))
            .distinct()
            .order_by_asc(route_schedules::Column::RouteName)
            .into_tuple::<String>()
            .all(self.db.as_ref())
            .await
            .context("list scheduled routes")?;
        Ok(routes)
    }
}
