// Calendar month windows for dashboard period queries
//
// All boundaries are computed at UTC midnight so the same instant always
// falls in the same reporting month regardless of where the service runs.
use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

/// Half-open interval `[start, end)` covering one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// The calendar month containing `at`.
    pub fn containing(at: DateTime<Utc>) -> Self {
        Self {
            start: start_of_month(at),
            end: start_of_next_month(at),
        }
    }

    /// "YYYY-MM" label used on the dashboard chart axis.
    pub fn label(&self) -> String {
        self.start.format("%Y-%m").to_string()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// First instant of the month containing `at`.
pub fn start_of_month(at: DateTime<Utc>) -> DateTime<Utc> {
    let date = at.date_naive();
    let first = date - Duration::days(i64::from(date.day0()));
    first.and_time(NaiveTime::MIN).and_utc()
}

/// First instant of the month before the one containing `at`, across
/// month-length and year boundaries.
pub fn start_of_previous_month(at: DateTime<Utc>) -> DateTime<Utc> {
    start_of_month(start_of_month(at) - Duration::days(1))
}

fn start_of_next_month(at: DateTime<Utc>) -> DateTime<Utc> {
    // 32 days past the 1st always lands in the following month
    start_of_month(start_of_month(at) + Duration::days(32))
}

/// The `n` calendar months ending with the month containing `at`, oldest
/// first. Consecutive windows share a boundary instant, so the sequence
/// tiles the whole span with no gaps or overlaps.
pub fn last_months(at: DateTime<Utc>, n: usize) -> impl Iterator<Item = MonthWindow> {
    let mut window = MonthWindow::containing(at);
    for _ in 1..n {
        window = MonthWindow::containing(window.start - Duration::days(1));
    }
    std::iter::successors(Some(window), |w| Some(MonthWindow::containing(w.end))).take(n)
}
