/// Properties of the habit store operations over a spread of inputs
use habit_grid::*;

#[cfg(test)]
mod store_property_tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    const NAMES: [&str; 6] = ["Run", "  Read  ", "Drink water", "x", "Journal\t", "Stretch before bed"];

    fn sample_days() -> Vec<NaiveDate> {
        let start = parse_day("2023-12-30").unwrap();
        (0..5u64).map(|n| start.checked_add_days(Days::new(n * 17)).unwrap()).collect()
    }

    fn populated_store() -> HabitStore {
        let mut store = HabitStore::new();
        for name in NAMES {
            store = store.add_habit(name);
        }
        let days = sample_days();
        let ids: Vec<HabitId> = store.iter().map(|h| h.id.clone()).collect();
        for (i, id) in ids.iter().enumerate() {
            for day in days.iter().skip(i % 3) {
                store = store.toggle_completion(id, *day);
            }
        }
        store
    }

    #[test]
    fn test_add_grows_by_one_with_empty_completions() {
        let mut store = HabitStore::new();
        for name in NAMES {
            let next = store.add_habit(name);
            assert_eq!(next.len(), store.len() + 1);
            let added = next.habits().last().unwrap();
            assert_eq!(added.name, name.trim());
            assert!(added.completed_dates.is_empty());
            store = next;
        }
    }

    #[test]
    fn test_blank_names_leave_store_unchanged() {
        let store = populated_store();
        for blank in ["", " ", "   ", "\t\n"] {
            assert_eq!(store.add_habit(blank), store);
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let store = populated_store();
        let mut ids: Vec<&HabitId> = store.iter().map(|h| &h.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_delete_each_present_id() {
        let store = populated_store();
        for habit in store.iter() {
            let next = store.delete_habit(&habit.id);
            assert_eq!(next.len(), store.len() - 1);
            assert!(next.get_habit(&habit.id).is_none());
        }
        assert_eq!(store.delete_habit(&HabitId::from("absent")), store);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let store = populated_store();
        for habit in store.iter() {
            for day in sample_days() {
                let twice = store
                    .toggle_completion(&habit.id, day)
                    .toggle_completion(&habit.id, day);
                assert_eq!(twice, store);
            }
        }
    }

    #[test]
    fn test_round_trip_through_persistence() {
        let store = populated_store();
        let persistence = HabitPersistence::new(MemoryStore::new());

        assert!(persistence.save(&store));
        assert_eq!(persistence.load(), store);
    }
}
