//! Core of hello-time: reads the current instant through a [`Clock`],
//! breaks it down into a [`CalendarTime`] and renders it in the classic
//! `Www Mmm dd HH:MM:SS yyyy` layout.

#![deny(clippy::all)]

pub mod calendar;
pub mod clock;
pub mod error;
pub mod format;
pub mod printer;

pub use calendar::CalendarTime;
pub use calendar::Instant;
pub use clock::Clock;
pub use clock::MockClock;
pub use clock::SystemClock;
pub use error::PrintError;
pub use format::format_calendar_time;
pub use printer::TimePrinter;
pub use printer::print_local_time;
pub use printer::report_write_failure;
