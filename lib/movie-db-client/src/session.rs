use std::future::Future;

use tokio::sync::OnceCell;

use crate::{error::MovieDbError, models::GuestSession};

/// Process-wide guest session, created on first use.
///
/// Concurrent first callers wait on a single in-flight creation. A failed creation
/// leaves the cell empty, so the next caller starts a fresh attempt.
#[derive(Debug, Default)]
pub struct GuestSessionCache {
    cell: OnceCell<GuestSession>,
}

impl GuestSessionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_create<F, Fut>(&self, create: F) -> Result<&GuestSession, MovieDbError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<GuestSession, MovieDbError>>,
    {
        self.cell.get_or_try_init(create).await
    }

    pub fn get(&self) -> Option<&GuestSession> {
        self.cell.get()
    }
}
