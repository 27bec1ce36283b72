use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering::SeqCst;
use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;

/// Where rolling codes read "now" from.
#[derive(Debug, Clone, Default)]
pub enum ClockSource {
    /// The system wall clock, in UTC.
    #[default]
    System,

    /// The system clock shifted by a fixed number of seconds (positive or negative).
    FixedOffset(i64),

    /// A settable instant. Clones share the same underlying time.
    Mock(Arc<AtomicU64>),
}

impl ClockSource {
    pub fn new_mock(now: u64) -> ClockSource {
        ClockSource::Mock(Arc::new(AtomicU64::new(now)))
    }

    /// Seconds since the Unix epoch. Instants before the epoch read as 0.
    pub fn epoch_seconds(&self) -> u64 {
        match self {
            ClockSource::System => system_epoch_seconds(),
            ClockSource::FixedOffset(offset) => {
                system_epoch_seconds().saturating_add_signed(*offset)
            }
            ClockSource::Mock(now) => now.load(SeqCst),
        }
    }

    /// Sets the current time of a mock clock. No-op for real clocks.
    pub fn set_time(&self, now: u64) {
        if let ClockSource::Mock(n) = self {
            n.store(now, SeqCst);
        }
    }

    /// Moves a mock clock forward, stopping at `u64::MAX`. No-op for real clocks.
    pub fn advance(&self, delta: Duration) {
        if let ClockSource::Mock(n) = self {
            let secs = delta.as_secs();
            let _ = n.fetch_update(SeqCst, SeqCst, |t| Some(t.saturating_add(secs)));
        }
    }
}

fn system_epoch_seconds() -> u64 {
    u64::try_from(OffsetDateTime::now_utc().unix_timestamp()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_reads_back_what_was_set() {
        let clock = ClockSource::new_mock(1_700_000_000);
        assert_eq!(clock.epoch_seconds(), 1_700_000_000);

        clock.set_time(42);
        assert_eq!(clock.epoch_seconds(), 42);

        clock.advance(Duration::from_secs(10));
        assert_eq!(clock.epoch_seconds(), 52);
    }

    #[test]
    fn cloned_mocks_share_time() {
        let a = ClockSource::new_mock(100);
        let b = a.clone();
        a.set_time(200);
        assert_eq!(b.epoch_seconds(), 200);
        b.advance(Duration::from_secs(1));
        assert_eq!(a.epoch_seconds(), 201);
    }

    #[test]
    fn system_and_offset_clocks() {
        let before = ClockSource::System.epoch_seconds();
        assert!(before > 1_600_000_000);

        let ahead = ClockSource::FixedOffset(1337).epoch_seconds();
        let behind = ClockSource::FixedOffset(-600).epoch_seconds();
        let after = ClockSource::System.epoch_seconds();

        assert!(ahead >= before + 1337 && ahead <= after + 1337);
        assert!(behind + 600 >= before && behind + 600 <= after);
    }

    #[test]
    fn setting_a_real_clock_is_ignored() {
        let clock = ClockSource::System;
        clock.set_time(5);
        assert!(clock.epoch_seconds() > 5);
    }
}
