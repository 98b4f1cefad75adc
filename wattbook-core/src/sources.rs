//! Injected sources for identifiers, time, and caller identity
//!
//! The service never reaches for ambient globals; ids, timestamps, and the
//! calling identity all come through these traits so tests can substitute
//! deterministic implementations.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

/// Produces globally unique opaque string identifiers.
///
/// The store relies on ids never repeating; a colliding id would silently
/// replace the existing record.
pub trait IdentifierSource: Send + Sync {
    fn fresh_id(&self) -> String;
}

/// Produces a monotonically non-decreasing logical timestamp per call
pub trait ClockSource: Send + Sync {
    fn now(&self) -> i64;
}

/// Supplies the identity invoking a mutating operation
pub trait CallerIdentity: Send + Sync {
    fn current(&self) -> String;
}

/// UUID v4 identifiers
#[derive(Debug, Default)]
pub struct UuidSource;

impl IdentifierSource for UuidSource {
    fn fresh_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Wall clock in unix milliseconds, clamped so consecutive calls never go
/// backwards even if the system clock does.
#[derive(Debug, Default)]
pub struct SystemClock {
    last: AtomicI64,
}

impl ClockSource for SystemClock {
    fn now(&self) -> i64 {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        let prev = self.last.fetch_max(wall, Ordering::SeqCst);
        prev.max(wall)
    }
}

/// Fixed caller identity resolved once at construction
#[derive(Debug, Clone)]
pub struct StaticIdentity(pub String);

impl CallerIdentity for StaticIdentity {
    fn current(&self) -> String {
        self.0.clone()
    }
}
