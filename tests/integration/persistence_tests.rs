/// Load/save behavior against real backends
use habit_grid::*;
use tempfile::NamedTempFile;

#[cfg(test)]
mod persistence_integration_tests {
    use super::*;

    fn assert_defaults(store: &HabitStore) {
        let names: Vec<&str> = store.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, DEFAULT_HABIT_NAMES);
        assert!(store.iter().all(|h| h.completed_dates.is_empty()));
    }

    #[test]
    fn test_fresh_database_starts_with_defaults() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let persistence = HabitPersistence::new(SqliteStore::new(temp_file.path()).unwrap());

        assert_defaults(&persistence.load());
        assert_eq!(persistence.size_of(), 0);
    }

    #[test]
    fn test_corrupted_database_value_falls_back() {
        let backend = SqliteStore::open_in_memory().unwrap();
        backend.set(STORAGE_KEY, r#"[{"id":1,"name":"Bad id type"}]"#).unwrap();
        let persistence = HabitPersistence::new(backend);

        assert_defaults(&persistence.load());
    }

    #[test]
    fn test_browser_shaped_data_loads() {
        let backend = SqliteStore::open_in_memory().unwrap();
        backend
            .set(
                STORAGE_KEY,
                r#"[{"id":"1709251200000","name":"Walk","completedDates":["2024-03-01","2024-03-03"]},
                    {"id":"1709251260000","name":"Read"}]"#,
            )
            .unwrap();
        let persistence = HabitPersistence::new(backend);

        let store = persistence.load();
        assert_eq!(store.len(), 2);
        let walk = store.get_habit(&HabitId::from("1709251200000")).unwrap();
        assert_eq!(walk.total_completions(), 2);
        assert!(store.habits()[1].completed_dates.is_empty());
    }

    #[test]
    fn test_sqlite_round_trip_and_size() {
        let persistence = HabitPersistence::new(SqliteStore::open_in_memory().unwrap());
        let store = HabitStore::defaults().add_habit("Floss");
        let id = store.habits()[0].id.clone();
        let store = store.toggle_completion(&id, parse_day("2024-02-29").unwrap());

        assert!(persistence.save(&store));
        assert_eq!(persistence.load(), store);
        assert_eq!(persistence.size_of(), serde_json::to_string(&store).unwrap().len());

        persistence.clear();
        assert_eq!(persistence.size_of(), 0);
    }

    #[test]
    fn test_quota_failure_keeps_session_in_memory() {
        let mut tracker = HabitTracker::open(HabitPersistence::new(MemoryStore::with_quota(64)), 7);

        tracker.add_habit("One more habit with a long name");
        assert_eq!(tracker.store().len(), 4);
        assert_eq!(tracker.persisted_size(), 0);
    }
}
