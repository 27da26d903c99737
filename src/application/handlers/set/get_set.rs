//! GetSetHandler - Query handler for retrieving a set with its statistics.

use std::sync::Arc;

use crate::domain::foundation::SetId;
use crate::domain::set::{Set, SetError};
use crate::ports::SetRepository;

/// Query to get a set by ID.
#[derive(Debug, Clone)]
pub struct GetSetQuery {
    pub set_id: SetId,
}

/// Handler for retrieving sets.
pub struct GetSetHandler {
    repository: Arc<dyn SetRepository>,
}

impl GetSetHandler {
    pub fn new(repository: Arc<dyn SetRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetSetQuery) -> Result<Set, SetError> {
        self.repository
            .find_by_id(&query.set_id)
            .await?
            .ok_or_else(|| SetError::not_found(query.set_id))
    }
}
