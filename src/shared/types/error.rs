//! Error kinds surfaced to GraphQL callers

use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinkError {
    #[error("A link with the requested ID cannot be found!")]
    NotFound { id: i32 },
    #[error("The link store cannot hold any more links")]
    StoreFull,
    #[error("The link store is unavailable")]
    StoreUnavailable
}

impl LinkError {
    pub fn code(&self) -> &'static str {
        match self {
            LinkError::NotFound { .. } => "NOT_FOUND",
            LinkError::StoreFull => "STORE_FULL",
            LinkError::StoreUnavailable => "INTERNAL"
        }
    }
}

impl ErrorExtensions for LinkError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let LinkError::NotFound { id } = self {
                e.set("id", *id);
            }
        })
    }
}
