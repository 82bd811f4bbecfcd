/// Basic unit tests to verify core functionality
use habit_grid::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn day(s: &str) -> chrono::NaiveDate {
        parse_day(s).expect("valid day")
    }

    #[test]
    fn test_habit_creation() {
        let habit = Habit::new("Test Habit").expect("valid habit");

        assert_eq!(habit.name, "Test Habit");
        assert!(habit.completed_dates.is_empty());
    }

    #[test]
    fn test_date_window_example() {
        let window: Vec<String> = date_window(7, day("2024-03-10")).into_iter().map(day_key).collect();

        assert_eq!(
            window,
            [
                "2024-03-04", "2024-03-05", "2024-03-06", "2024-03-07",
                "2024-03-08", "2024-03-09", "2024-03-10",
            ]
        );
    }

    #[test]
    fn test_weekend_examples() {
        assert!(is_weekend(day("2024-03-09")));
        assert!(!is_weekend(day("2024-03-06")));
    }

    #[test]
    fn test_stats_example() {
        let a = Habit::from_existing(
            HabitId::from("a"),
            "A".to_string(),
            [day("2024-03-08"), day("2024-03-10")],
        );
        let b = Habit::from_existing(HabitId::from("b"), "B".to_string(), Vec::new());
        let store = HabitStore::from_habits(vec![a, b]);
        let window = date_window(3, day("2024-03-10"));

        assert_eq!(total_completions(&store, &window), 2);
        assert_eq!(average_completion_rate(&store, &window), 33.3);
    }

    #[test]
    fn test_empty_store_rate() {
        let window = date_window(7, day("2024-03-10"));
        assert_eq!(average_completion_rate(&HabitStore::new(), &window), 0.0);
    }

    #[test]
    fn test_streak_from_store() {
        let store = HabitStore::new().add_habit("Run");
        let id = store.habits()[0].id.clone();
        let store = store
            .toggle_completion(&id, day("2024-03-09"))
            .toggle_completion(&id, day("2024-03-10"));

        let streak = Streak::calculate(store.get_habit(&id).unwrap(), day("2024-03-10"));
        assert_eq!(streak.current_streak, 2);
    }
}
