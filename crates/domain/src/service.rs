use log::{debug, error};

use crate::{Catalog, ReadError, StorageError};

#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    async fn read_catalog(&self) -> Result<Catalog, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn get_catalog(&self) -> Result<Catalog, ReadError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: CatalogRepository> CatalogService for Service<R> {
    async fn get_catalog(&self) -> Result<Catalog, ReadError> {
        let result = self.repository.read_catalog().await;
        if let Err(ref err) = result {
            match err {
                ReadError::Storage(StorageError::NoConnection) => {
                    debug!("failed to get catalog: {err}");
                }
                _ => error!("failed to get catalog: {err}"),
            }
        }
        result
    }
}
