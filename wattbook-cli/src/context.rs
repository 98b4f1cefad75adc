//! Shared service construction for commands

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::debug;
use wattbook_core::sources::{StaticIdentity, SystemClock, UuidSource};
use wattbook_core::{AssessmentService, SqliteRecordStore};

/// Everything a command needs to talk to the record store
pub struct CliContext {
    pub service: AssessmentService<SqliteRecordStore>,
}

impl CliContext {
    /// Open the database and build the service with production sources.
    ///
    /// Without an explicit path the database lives at
    /// `<data_dir>/assessments.db`, creating the directory if needed.
    pub fn open(db: Option<PathBuf>, auditor: String) -> Result<Self> {
        let path = match db {
            Some(path) => path,
            None => {
                let dir = wattbook_paths::data_dir();
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("creating data dir {}", dir.display()))?;
                dir.join("assessments.db")
            }
        };
        debug!(path = %path.display(), auditor = %auditor, "Opening assessment database");

        let store = SqliteRecordStore::open(&path)
            .with_context(|| format!("opening assessment store at {}", path.display()))?;
        let service = AssessmentService::new(
            Arc::new(store),
            Box::new(UuidSource),
            Box::new(SystemClock::default()),
            Box::new(StaticIdentity(auditor)),
        );

        Ok(Self { service })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_with_explicit_db_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assessments.db");

        let ctx = CliContext::open(Some(path.clone()), "tester".into()).unwrap();
        assert!(path.exists());
        assert!(ctx.service.list_assessments().unwrap().is_empty());
    }
}
