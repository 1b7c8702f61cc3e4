//! Wall-clock sources.
//!
//! The engine never calls `Utc::now()` directly: it reads time and the
//! system time zone through [`Clock`] so tests can drive it by hand.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::env;
use std::sync::{Arc, Mutex};

/// Source of the current instant and the system time zone.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Zone the host is currently configured for.
    fn system_zone(&self) -> Tz;
}

/// Parse an IANA zone id.
pub fn parse_zone(zone_id: &str) -> Option<Tz> {
    zone_id.trim().parse::<Tz>().ok()
}

/// The real clock. The system zone is taken from `TZ`, UTC if unset or unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn system_zone(&self) -> Tz {
        env::var("TZ")
            .ok()
            .and_then(|id| parse_zone(&id))
            .unwrap_or(Tz::UTC)
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
    zone: Arc<Mutex<Tz>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>, zone: Tz) -> Self {
        ManualClock {
            now: Arc::new(Mutex::new(now)),
            zone: Arc::new(Mutex::new(zone)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        match self.now.lock() {
            Ok(mut guard) => *guard = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.set(self.now() + by);
    }

    pub fn set_system_zone(&self, zone: Tz) {
        match self.zone.lock() {
            Ok(mut guard) => *guard = zone,
            Err(poisoned) => *poisoned.into_inner() = zone,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn system_zone(&self) -> Tz {
        match self.zone.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
