#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use painel::{Clock, Painel, PainelBuilder, RecordSource};

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap();
        *guard += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// 2026-10-18 15:30:00 in Sao Paulo (UTC-3).
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 18, 30, 0).unwrap()
}

/// Builder over `source` with the clock pinned to `fixture_now()`.
pub fn builder_at(source: Arc<dyn RecordSource>, clock: Arc<ManualClock>) -> PainelBuilder {
    Painel::builder().with_source(source).clock(clock)
}

/// Assert two monetary values agree to the cent.
pub fn assert_money(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected}, got {actual}"
    );
}
