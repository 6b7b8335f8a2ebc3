//! Football seasons run August to July, so the season year only moves on in August.

use chrono::{Datelike, Local, NaiveDate};

/// Month in which a new season starts.
pub const SEASON_START_MONTH: u32 = 8;

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn season_year(date: NaiveDate) -> String {
    let year = if date.month() < SEASON_START_MONTH {
        date.year() - 1
    } else {
        date.year()
    };
    year.to_string()
}

pub fn current_season_year<C: Clock + ?Sized>(clock: &C) -> String {
    season_year(clock.today())
}
