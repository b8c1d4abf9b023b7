use chrono::NaiveDate;
use uuid::Uuid;

use super::item::{EntryRef, TimeFrameItem};

/// Keeps the three selection facets (date, time-frame bar, list entry)
/// mutually consistent without feedback loops.
///
/// Two guards are involved: `syncing` stops synchronous re-entry while a
/// change propagates, and a versioned suppression token temporarily disables
/// the date-to-entry direction after a direct pointer/keyboard interaction. The
/// host schedules the token to clear on its next idle tick; stale clears are
/// no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSync {
    selected_date: NaiveDate,
    selected_frame: Option<Uuid>,
    selected_entry: Option<Uuid>,
    syncing: bool,
    suppress_version: u64,
    suppress_active: bool,
}

impl SelectionSync {
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            selected_date,
            selected_frame: None,
            selected_entry: None,
            syncing: false,
            suppress_version: 0,
            suppress_active: false,
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_frame(&self) -> Option<Uuid> {
        self.selected_frame
    }

    pub fn selected_entry(&self) -> Option<Uuid> {
        self.selected_entry
    }

    /// Set the date facet and propagate to the other two.
    pub fn set_date(&mut self, date: NaiveDate, items: &[TimeFrameItem], entries: &[EntryRef]) {
        if self.syncing {
            return;
        }
        self.syncing = true;
        self.selected_date = date;
        let keep_frame = self
            .selected_frame
            .and_then(|id| items.iter().find(|item| item.id == id))
            .map(|item| item.start_date() == date)
            .unwrap_or(false);
        if !keep_frame {
            self.selected_frame = frame_for_date(items, date);
        }
        if !self.suppress_active {
            self.selected_entry = entry_for_date(entries, date).map(|entry| entry.id);
        }
        self.syncing = false;
    }

    /// Select a time-frame bar; its start date becomes the selected date.
    pub fn select_frame(&mut self, id: Uuid, items: &[TimeFrameItem], entries: &[EntryRef]) {
        if self.syncing {
            return;
        }
        let Some(item) = items.iter().find(|item| item.id == id) else {
            return;
        };
        self.syncing = true;
        self.selected_frame = Some(id);
        self.selected_date = item.start_date();
        if !self.suppress_active {
            self.selected_entry = entry_for_date(entries, self.selected_date).map(|e| e.id);
        }
        self.syncing = false;
    }

    /// Select a list entry; the date and bar follow.
    pub fn select_entry(&mut self, id: Uuid, items: &[TimeFrameItem], entries: &[EntryRef]) {
        if self.syncing {
            return;
        }
        let Some(entry) = entries.iter().find(|entry| entry.id == id) else {
            return;
        };
        self.syncing = true;
        self.selected_entry = Some(id);
        self.selected_date = entry.start_date;
        self.selected_frame = frame_for_date(items, entry.start_date);
        self.syncing = false;
    }

    /// Drop references that no longer resolve after an item/entry rebuild.
    pub fn retain_known(&mut self, items: &[TimeFrameItem], entries: &[EntryRef]) {
        if let Some(id) = self.selected_frame {
            if !items.iter().any(|item| item.id == id) {
                self.selected_frame = None;
            }
        }
        if let Some(id) = self.selected_entry {
            if !entries.iter().any(|entry| entry.id == id) {
                self.selected_entry = None;
            }
        }
    }

    pub fn clamp_date(&mut self, min_date: NaiveDate, max_date: NaiveDate) {
        self.selected_date = self.selected_date.clamp(min_date, max_date);
    }

    /// Begin a suppression window for the date-to-entry direction. Returns the
    /// token the host must pass back to [`Self::clear_suppression`].
    pub fn suppress_entry_sync(&mut self) -> u64 {
        self.suppress_version += 1;
        self.suppress_active = true;
        self.suppress_version
    }

    /// Clear suppression if `token` is still the latest one issued.
    pub fn clear_suppression(&mut self, token: u64) {
        if token == self.suppress_version {
            self.suppress_active = false;
        }
    }

    pub fn is_entry_sync_suppressed(&self) -> bool {
        self.suppress_active
    }
}

/// First time frame starting exactly on `date`, title ascending.
fn frame_for_date(items: &[TimeFrameItem], date: NaiveDate) -> Option<Uuid> {
    items
        .iter()
        .filter(|item| item.start_date() == date)
        .min_by(|a, b| a.title.cmp(&b.title))
        .map(|item| item.id)
}

/// Closest entry starting at or before `date`, else the earliest entry.
/// Ties break by ascending date, then title.
pub fn entry_for_date<'a>(entries: &'a [EntryRef], date: NaiveDate) -> Option<&'a EntryRef> {
    let at_or_before = entries
        .iter()
        .filter(|entry| entry.start_date <= date)
        .max_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| b.title.cmp(&a.title))
        });
    at_or_before.or_else(|| {
        entries.iter().min_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.title.cmp(&b.title))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timeline::item::AccentKey;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(start: NaiveDate, end: NaiveDate, title: &str) -> TimeFrameItem {
        TimeFrameItem::new(Uuid::new_v4(), start, end, title, AccentKey::Work)
    }

    fn entry(start: NaiveDate, title: &str) -> EntryRef {
        EntryRef {
            id: Uuid::new_v4(),
            start_date: start,
            title: title.to_string(),
        }
    }

    fn fixture() -> (Vec<TimeFrameItem>, Vec<EntryRef>) {
        let items = vec![
            item(date(2020, 1, 1), date(2020, 9, 1), "Alpha"),
            item(date(2021, 6, 15), date(2022, 3, 1), "Beta"),
        ];
        let entries = vec![
            entry(date(2020, 1, 1), "Alpha"),
            entry(date(2021, 6, 15), "Beta"),
            entry(date(2023, 2, 1), "Gamma"),
        ];
        (items, entries)
    }

    #[test]
    fn test_selecting_frame_updates_date_and_entry() {
        let (items, entries) = fixture();
        let mut sync = SelectionSync::new(date(2020, 1, 1));
        sync.select_frame(items[1].id, &items, &entries);
        assert_eq!(sync.selected_date(), date(2021, 6, 15));
        assert_eq!(sync.selected_frame(), Some(items[1].id));
        assert_eq!(sync.selected_entry(), Some(entries[1].id));
    }

    #[test]
    fn test_selecting_entry_updates_date_and_frame() {
        let (items, entries) = fixture();
        let mut sync = SelectionSync::new(date(2020, 1, 1));
        sync.select_entry(entries[1].id, &items, &entries);
        assert_eq!(sync.selected_date(), date(2021, 6, 15));
        assert_eq!(sync.selected_frame(), Some(items[1].id));
    }

    #[test]
    fn test_date_invariant_holds_after_every_operation() {
        let (items, entries) = fixture();
        let mut sync = SelectionSync::new(date(2020, 1, 1));
        sync.set_date(date(2021, 6, 15), &items, &entries);
        sync.select_entry(entries[0].id, &items, &entries);
        sync.select_frame(items[0].id, &items, &entries);
        if let Some(frame) = sync.selected_frame() {
            let start = items.iter().find(|i| i.id == frame).unwrap().start_date();
            assert_eq!(sync.selected_date(), start);
        }
    }

    #[test]
    fn test_entry_for_date_prefers_at_or_before() {
        let (_, entries) = fixture();
        let hit = entry_for_date(&entries, date(2022, 1, 1)).unwrap();
        assert_eq!(hit.title, "Beta");
        // Before every entry: fall back to the earliest.
        let hit = entry_for_date(&entries, date(2010, 1, 1)).unwrap();
        assert_eq!(hit.title, "Alpha");
    }

    #[test]
    fn test_suppression_blocks_entry_sync_until_cleared() {
        let (items, entries) = fixture();
        let mut sync = SelectionSync::new(date(2020, 1, 1));
        sync.select_entry(entries[2].id, &items, &entries);
        let token = sync.suppress_entry_sync();
        sync.set_date(date(2020, 1, 1), &items, &entries);
        // Entry untouched while suppressed.
        assert_eq!(sync.selected_entry(), Some(entries[2].id));
        sync.clear_suppression(token);
        sync.set_date(date(2020, 1, 1), &items, &entries);
        assert_eq!(sync.selected_entry(), Some(entries[0].id));
    }

    #[test]
    fn test_stale_suppression_clear_is_a_no_op() {
        let mut sync = SelectionSync::new(date(2020, 1, 1));
        let stale = sync.suppress_entry_sync();
        let fresh = sync.suppress_entry_sync();
        sync.clear_suppression(stale);
        assert!(sync.is_entry_sync_suppressed());
        sync.clear_suppression(fresh);
        assert!(!sync.is_entry_sync_suppressed());
    }

    #[test]
    fn test_retain_known_drops_dangling_ids() {
        let (items, entries) = fixture();
        let mut sync = SelectionSync::new(date(2020, 1, 1));
        sync.select_frame(items[0].id, &items, &entries);
        sync.retain_known(&[], &[]);
        assert_eq!(sync.selected_frame(), None);
        assert_eq!(sync.selected_entry(), None);
    }
}
