//! wattbook-core: persistent energy assessment records
//!
//! This crate provides the record-management layer for wattbook:
//!
//! - **Record types** - [`Assessment`] and its embedded append-only
//!   [`UsageReading`] history
//! - **Durable storage** - the [`RecordStore`] trait and its SQLite-backed
//!   [`SqliteRecordStore`], an ordered map from id to full record snapshot
//! - **Domain logic** - [`AssessmentService`] for validated CRUD, history
//!   appends, and derived queries
//! - **Injected sources** - [`sources`] traits for ids, time, and caller
//!   identity so tests can run fully deterministic
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use wattbook_core::{AssessmentService, NewAssessment, SqliteRecordStore};
//! use wattbook_core::sources::{StaticIdentity, SystemClock, UuidSource};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteRecordStore::open("assessments.db")?;
//!     let service = AssessmentService::new(
//!         Arc::new(store),
//!         Box::new(UuidSource),
//!         Box::new(SystemClock::default()),
//!         Box::new(StaticIdentity("inspector-7".into())),
//!     );
//!
//!     let created = service.create_assessment(NewAssessment {
//!         address: "1 Main St".into(),
//!         efficiency_rating: 7.5,
//!         recommendations: Some("seal windows".into()),
//!         cost_savings: 220.0,
//!     })?;
//!     println!("created {}", created.id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod service;
pub mod sources;
pub mod store;
pub mod types;

mod migrations;

// Re-export key types for convenience
pub use error::{AssessmentError, StoreError};
pub use service::AssessmentService;
pub use store::{RecordStore, SqliteRecordStore};
pub use types::{Assessment, AssessmentPatch, NewAssessment, UsageReading};
