use std::sync::Mutex;

use chrono::Duration;
use chrono::FixedOffset;
use chrono::Local;
use chrono::Offset;
use chrono::Utc;
use hello_time_common::mutex_lock_or_recover;

use crate::calendar::CalendarTime;
use crate::calendar::Instant;

/// Access to the host time-of-day service.
///
/// Keeps clock reads and time-zone conversion out of the formatting path so
/// a fixed instant can be injected.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;

    /// Breaks `instant` down in this clock's local time zone.
    fn to_local_calendar(&self, instant: Instant) -> CalendarTime;
}

/// Host wall clock in the host's configured time zone (`TZ` on Unix).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Utc::now()
    }

    fn to_local_calendar(&self, instant: Instant) -> CalendarTime {
        CalendarTime::from_datetime(&instant.with_timezone(&Local))
    }
}

/// Deterministic clock for tests.
///
/// Each `now()` returns the current reading and then advances it by `step`.
/// A zero step freezes the clock.
#[derive(Debug)]
pub struct MockClock {
    state: Mutex<MockClockState>,
    step: Duration,
    offset: FixedOffset,
}

#[derive(Debug)]
struct MockClockState {
    next: Instant,
    call_count: u64,
}

impl MockClock {
    /// Always reads `instant`, in UTC.
    pub fn fixed(instant: Instant) -> Self {
        Self::stepping(instant, Duration::zero())
    }

    pub fn stepping(start: Instant, step: Duration) -> Self {
        Self {
            state: Mutex::new(MockClockState {
                next: start,
                call_count: 0,
            }),
            step,
            offset: Utc.fix(),
        }
    }

    /// Converts to calendar time at `offset` instead of UTC.
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn call_count(&self) -> u64 {
        mutex_lock_or_recover(&self.state).call_count
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        let mut state = mutex_lock_or_recover(&self.state);
        let reading = state.next;
        state.next = reading + self.step;
        state.call_count += 1;
        reading
    }

    fn to_local_calendar(&self, instant: Instant) -> CalendarTime {
        CalendarTime::from_datetime(&instant.with_timezone(&self.offset))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }

    fn to_local_calendar(&self, instant: Instant) -> CalendarTime {
        (**self).to_local_calendar(instant)
    }
}
