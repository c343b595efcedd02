//! In-memory [`RecordRepository`] for handler tests.

use std::sync::{Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::error::{ClientError, Result};
use crate::repository::{RecordRepository, RecordRow};

/// Repository holding rows in memory and recording every create call.
///
/// When failing, both operations return a 500 `ApiError` without touching state.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    rows: Mutex<Vec<RecordRow>>,
    created: Mutex<Vec<[String; 3]>>,
    failing: AtomicBool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<RecordRow>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Values passed to `create`, in call order.
    pub fn created(&self) -> Vec<[String; 3]> {
        self.created.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::ApiError {
                status: 500,
                url: "memory://objects".to_string(),
                message: "simulated upstream failure".to_string(),
                correlation_id: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordRepository for InMemoryRepository {
    async fn list(&self) -> Result<Vec<RecordRow>> {
        self.check()?;
        Ok(self.rows.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    async fn create(&self, values: [String; 3]) -> Result<()> {
        self.check()?;
        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(values.clone());
        let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        let id = (rows.len() + 1).to_string();
        rows.push(RecordRow { id, values });
        Ok(())
    }
}
