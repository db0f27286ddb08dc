//! Save collaborators that receive confirmed objectives.
//!
//! The session does not persist anything itself. On `save()` it hands an
//! [`ObjectiveRecord`] to whatever [`SaveCollaborator`] it was built with.

use std::sync::{Arc, Mutex};

use log::info;

use crate::{
    error::{OkrError, Result},
    models::ObjectiveRecord,
};

/// Receives every objective confirmed by a session.
pub trait SaveCollaborator: Send {
    /// Accepts a finished record.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures as [`OkrError::Save`].
    fn save(&mut self, record: &ObjectiveRecord) -> Result<()>;
}

/// Logs each record as JSON at info level and keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSaver;

impl SaveCollaborator for LogSaver {
    fn save(&mut self, record: &ObjectiveRecord) -> Result<()> {
        let json = serde_json::to_string(record)?;
        info!("Saving OKR: {json}");
        Ok(())
    }
}

/// Keeps records in memory; clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct RecordingSaver {
    records: Arc<Mutex<Vec<ObjectiveRecord>>>,
}

impl RecordingSaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, oldest first.
    pub fn records(&self) -> Vec<ObjectiveRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl SaveCollaborator for RecordingSaver {
    fn save(&mut self, record: &ObjectiveRecord) -> Result<()> {
        self.records
            .lock()
            .map_err(|e| OkrError::save(format!("recording lock poisoned: {e}")))?
            .push(record.clone());
        Ok(())
    }
}

impl<F> SaveCollaborator for F
where
    F: FnMut(&ObjectiveRecord) -> Result<()> + Send,
{
    fn save(&mut self, record: &ObjectiveRecord) -> Result<()> {
        self(record)
    }
}
