use crate::db::models::NewBook;
use crate::error::BookshelfError;
use axum::{
    Json,
    extract::{FromRequest, Request},
};

pub(crate) struct BookPayload(pub(crate) NewBook);

impl<S> FromRequest<S> for BookPayload
where
    S: Send + Sync,
{
    type Rejection = BookshelfError;

    /// Extract a create-book request body.
    ///
    /// Any `axum::Json` rejection (missing/wrong content type, malformed
    /// JSON, wrong field types) collapses into `InvalidPayload` before the
    /// store is ever touched. A client-supplied `id` field is ignored; the
    /// store assigns the real one.
    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let Json(new) = Json::<NewBook>::from_request(req, &())
            .await
            .map_err(|_| BookshelfError::InvalidPayload)?;

        Ok(Self(new))
    }
}
