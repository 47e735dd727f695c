use chrono::DateTime;
use chrono::Datelike;
use chrono::Month;
use chrono::Timelike;
use chrono::Utc;
use chrono::Weekday;

/// Absolute point in time.
pub type Instant = DateTime<Utc>;

/// An instant broken down into calendar fields for some time zone.
///
/// Only constructible from a chrono date-time, so the weekday always
/// agrees with the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarTime {
    year: i32,
    month: Month,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    weekday: Weekday,
}

impl CalendarTime {
    /// Breaks down any chrono value carrying both a date and a time of day.
    ///
    /// A leap second (nanoseconds >= 1e9) is reported as second 60.
    pub fn from_datetime<T>(value: &T) -> Self
    where
        T: Datelike + Timelike,
    {
        let second = if value.nanosecond() >= 1_000_000_000 {
            60
        } else {
            value.second()
        };

        Self {
            year: value.year(),
            month: month_from_number(value.month()),
            day: value.day(),
            hour: value.hour(),
            minute: value.minute(),
            second,
            weekday: value.weekday(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }
}

// chrono guarantees 1..=12 from `Datelike::month`.
fn month_from_number(month: u32) -> Month {
    match month {
        1 => Month::January,
        2 => Month::February,
        3 => Month::March,
        4 => Month::April,
        5 => Month::May,
        6 => Month::June,
        7 => Month::July,
        8 => Month::August,
        9 => Month::September,
        10 => Month::October,
        11 => Month::November,
        _ => Month::December,
    }
}
