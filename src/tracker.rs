/// HabitTracker: the session that owns the current habit snapshot
///
/// The UI layer holds a tracker and sends it intents. Each intent computes the
/// next `HabitStore`, and only if it differs from the current one does the
/// tracker swap it in, save it, and notify subscribers, in that order.

use chrono::NaiveDate;

use crate::analytics::WindowStats;
use crate::domain::{date_window, today, HabitId, HabitStore};
use crate::storage::{HabitPersistence, KeyValueStore};

/// Calendar window used when none is configured
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Largest calendar window a tracker will hold; larger requests are clamped
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&HabitStore)>;

pub struct HabitTracker<S: KeyValueStore> {
    store: HabitStore,
    persistence: HabitPersistence<S>,
    window_days: u32,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> HabitTracker<S> {
    /// Start a session from whatever `persistence` holds
    pub fn open(persistence: HabitPersistence<S>, window_days: u32) -> Self {
        let store = persistence.load();

        Self {
            store,
            persistence,
            window_days: window_days.min(MAX_WINDOW_DAYS),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current snapshot
    pub fn store(&self) -> &HabitStore {
        &self.store
    }

    pub fn persistence(&self) -> &HabitPersistence<S> {
        &self.persistence
    }

    pub fn add_habit(&mut self, name: &str) -> &HabitStore {
        let next = self.store.add_habit(name);
        self.commit(next)
    }

    pub fn delete_habit(&mut self, id: &HabitId) -> &HabitStore {
        let next = self.store.delete_habit(id);
        self.commit(next)
    }

    pub fn toggle_completion(&mut self, id: &HabitId, date: NaiveDate) -> &HabitStore {
        let next = self.store.toggle_completion(id, date);
        self.commit(next)
    }

    /// Toggle the habit for the current local day
    pub fn toggle_today(&mut self, id: &HabitId) -> &HabitStore {
        self.toggle_completion(id, today())
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Resize the calendar window; view state only, nothing is saved
    ///
    /// Sizes above `MAX_WINDOW_DAYS` are clamped to it.
    pub fn change_window(&mut self, days: u32) {
        let days = days.min(MAX_WINDOW_DAYS);
        if days == self.window_days {
            return;
        }
        tracing::debug!("Calendar window changed: {} -> {} days", self.window_days, days);
        self.window_days = days;
        self.notify();
    }

    /// The current window's days, ending at `reference`
    pub fn window_dates(&self, reference: NaiveDate) -> Vec<NaiveDate> {
        date_window(self.window_days, reference)
    }

    pub fn window_stats(&self, reference: NaiveDate) -> WindowStats {
        WindowStats::compute(&self.store, &self.window_dates(reference))
    }

    /// Forget the saved list and start over from the default habits
    pub fn reset(&mut self) -> &HabitStore {
        self.persistence.clear();
        self.store = HabitStore::defaults();
        tracing::info!("Habit data reset to defaults");
        self.notify();
        &self.store
    }

    /// Byte size of the saved list
    pub fn persisted_size(&self) -> usize {
        self.persistence.size_of()
    }

    /// Call `listener` with the new snapshot after every change
    pub fn subscribe(&mut self, listener: impl FnMut(&HabitStore) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, next: HabitStore) -> &HabitStore {
        if next != self.store {
            self.store = next;
            self.persistence.save(&self.store);
            self.notify();
        }
        &self.store
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.store);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::domain::parse_day;
    use crate::storage::{MemoryStore, STORAGE_KEY};

    fn tracker() -> HabitTracker<MemoryStore> {
        HabitTracker::open(HabitPersistence::new(MemoryStore::new()), DEFAULT_WINDOW_DAYS)
    }

    #[test]
    fn test_mutations_are_saved() {
        let mut tracker = tracker();
        assert_eq!(tracker.persisted_size(), 0);

        tracker.add_habit("Meditate");
        assert_eq!(tracker.store().len(), 4);
        assert_eq!(tracker.persistence().load(), *tracker.store());
    }

    #[test]
    fn test_noop_mutations_do_not_save_or_notify() {
        let mut tracker = tracker();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        tracker.subscribe(move |_| *counter.borrow_mut() += 1);

        tracker.add_habit("   ");
        tracker.delete_habit(&HabitId::from("missing"));
        tracker.toggle_completion(&HabitId::from("missing"), parse_day("2024-03-10").unwrap());

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(tracker.persistence().backend().get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_subscribers_see_new_snapshot() {
        let mut tracker = tracker();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = tracker.subscribe(move |store| sink.borrow_mut().push(store.len()));

        let id = tracker.store().habits()[0].id.clone();
        tracker.delete_habit(&id);
        tracker.add_habit("Stretch");
        assert!(tracker.unsubscribe(subscription));
        tracker.add_habit("Floss");

        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert!(!tracker.unsubscribe(subscription));
    }

    #[test]
    fn test_write_failure_keeps_memory_authoritative() {
        let backend = MemoryStore::new();
        backend.set_simulate_write_error(true);
        let mut tracker = HabitTracker::open(HabitPersistence::new(backend), 7);

        tracker.add_habit("Swim");
        assert_eq!(tracker.store().len(), 4);
        assert_eq!(tracker.persisted_size(), 0);
    }

    #[test]
    fn test_window_change_and_dates() {
        let mut tracker = tracker();
        tracker.change_window(30);

        let dates = tracker.window_dates(parse_day("2024-03-10").unwrap());
        assert_eq!(dates.len(), 30);
        assert_eq!(dates[0], parse_day("2024-02-10").unwrap());
        assert_eq!(tracker.persisted_size(), 0);
    }

    #[test]
    fn test_window_is_capped() {
        let mut tracker = tracker();
        tracker.change_window(u32::MAX);
        assert_eq!(tracker.window_days(), MAX_WINDOW_DAYS);

        let dates = tracker.window_dates(parse_day("2024-03-10").unwrap());
        assert_eq!(dates.len(), MAX_WINDOW_DAYS as usize);

        let opened = HabitTracker::open(HabitPersistence::new(MemoryStore::new()), 10_000);
        assert_eq!(opened.window_days(), MAX_WINDOW_DAYS);
    }

    #[test]
    fn test_reset_clears_saved_data() {
        let mut tracker = tracker();
        tracker.add_habit("Swim");
        assert!(tracker.persisted_size() > 0);

        let store = tracker.reset().clone();
        assert_eq!(store.len(), 3);
        assert_eq!(tracker.persisted_size(), 0);
    }
}
