use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Palette key for a time frame. Resolved to a concrete color by the active
/// theme at render time so the engine stays theme-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentKey {
    #[default]
    Work,
    Freelance,
    Education,
    Personal,
}

/// One date-ranged entry displayed as a bar on the timeline.
///
/// Invariant: `start_date <= end_date`. Constructors and setters swap the
/// dates when they arrive reversed instead of rejecting them.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeFrameItem {
    pub id: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    pub title: String,
    pub accent: AccentKey,
}

impl TimeFrameItem {
    pub fn new(
        id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        title: impl Into<String>,
        accent: AccentKey,
    ) -> Self {
        let (start_date, end_date) = ordered(start_date, end_date);
        Self {
            id,
            start_date,
            end_date,
            title: title.into(),
            accent,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Replace both dates, swap-correcting reversed input.
    pub fn set_dates(&mut self, start_date: NaiveDate, end_date: NaiveDate) {
        let (start_date, end_date) = ordered(start_date, end_date);
        self.start_date = start_date;
        self.end_date = end_date;
    }
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// Anything that can be positioned on the timeline by a start date.
///
/// The list view paired with the timeline implements this so selection can be
/// synchronized without the engine knowing the concrete entry type.
pub trait DatedEntry {
    fn entry_id(&self) -> Uuid;
    fn start_date(&self) -> NaiveDate;
    fn title(&self) -> &str;
}

/// Flattened snapshot of a [`DatedEntry`], owned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRef {
    pub id: Uuid,
    pub start_date: NaiveDate,
    pub title: String,
}

impl EntryRef {
    pub fn from_entry(entry: &impl DatedEntry) -> Self {
        Self {
            id: entry.entry_id(),
            start_date: entry.start_date(),
            title: entry.title().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reversed_dates_are_swapped() {
        let item = TimeFrameItem::new(
            Uuid::new_v4(),
            date(2021, 6, 1),
            date(2020, 1, 1),
            "A",
            AccentKey::Work,
        );
        assert_eq!(item.start_date(), date(2020, 1, 1));
        assert_eq!(item.end_date(), date(2021, 6, 1));
    }

    #[test]
    fn test_set_dates_preserves_order_invariant() {
        let mut item = TimeFrameItem::new(
            Uuid::new_v4(),
            date(2020, 1, 1),
            date(2020, 2, 1),
            "A",
            AccentKey::Work,
        );
        item.set_dates(date(2022, 5, 5), date(2022, 1, 1));
        assert!(item.start_date() <= item.end_date());
        assert_eq!(item.start_date(), date(2022, 1, 1));
    }
}
