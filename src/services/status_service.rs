use crate::{
    errors::AppError,
    models::status_model::{StatusCheck, StatusCheckCreate},
    services::status_store::StatusStore,
};

/// Máximo de registros que devuelve `list`.
pub const STATUS_LIST_LIMIT: u32 = 1000;

#[derive(Clone, Debug)]
pub struct StatusCheckService {
    store: StatusStore,
}

impl StatusCheckService {
    pub fn new(store: StatusStore) -> Self {
        StatusCheckService { store }
    }

    pub async fn create(&self, req: StatusCheckCreate) -> Result<StatusCheck, AppError> {
        let record = StatusCheck::new(req.client_name);
        self.store.save(&record).await.map_err(AppError::Storage)?;
        Ok(record)
    }

    pub async fn list(&self) -> Result<Vec<StatusCheck>, AppError> {
        self.store
            .list(STATUS_LIST_LIMIT)
            .await
            .map_err(AppError::Storage)
    }
}
