//! Pure rendering of a [`CalendarTime`] in the `asctime` layout.

use chrono::Month;
use chrono::Weekday;

use crate::calendar::CalendarTime;

/// Renders `Www Mmm dd HH:MM:SS yyyy\n`.
///
/// The day is space-padded to two columns, the clock fields are zero-padded
/// and the year is zero-padded to four digits.
pub fn format_calendar_time(time: &CalendarTime) -> String {
    format!(
        "{} {} {:>2} {:02}:{:02}:{:02} {:04}\n",
        weekday_abbrev(time.weekday()),
        month_abbrev(time.month()),
        time.day(),
        time.hour(),
        time.minute(),
        time.second(),
        time.year(),
    )
}

pub fn weekday_abbrev(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
