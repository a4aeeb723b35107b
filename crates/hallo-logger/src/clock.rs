use chrono::{DateTime, Local};

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Formats a timestamp as `HH:MM:SS`, or `YYYY-MM-DD HH:MM:SS` with the date
pub fn format_time(time: &DateTime<Local>, with_date: bool) -> String {
    let pattern = if with_date {
        DATE_TIME_FORMAT
    } else {
        TIME_FORMAT
    };
    time.format(pattern).to_string()
}

/// Whole milliseconds between `start` and `now`
pub fn elapsed_millis(start: &DateTime<Local>, now: &DateTime<Local>) -> i64 {
    now.signed_duration_since(*start).num_milliseconds()
}
