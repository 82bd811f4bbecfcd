/// Basic integration tests: the tool server end to end
use habit_grid::*;
use serde_json::{json, Value};
use tempfile::NamedTempFile;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn call(id: u64, tool: &str, arguments: Value) -> String {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": {"name": tool, "arguments": arguments}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_server_basic_workflow() {
        let tracker = HabitTracker::open(HabitPersistence::new(MemoryStore::new()), 7);
        let mut server = McpServer::new(tracker);

        let input = [
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#.to_string(),
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#.to_string(),
            call(2, "habit_add", json!({"name": "Meditate"})),
            call(3, "habit_window", json!({"days": 30})),
            call(4, "habit_checklist", json!({"date": "2024-03-10"})),
        ]
        .join("\n");

        let mut output = Vec::new();
        server
            .serve(input.as_bytes(), &mut output)
            .await
            .expect("server should run to end of input");

        let responses: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        // the notification gets no reply
        assert_eq!(responses.len(), 4);
        assert_eq!(responses[1]["result"]["structuredContent"]["added"], json!(true));
        assert_eq!(responses[2]["result"]["structuredContent"]["window_days"], json!(30));
        assert_eq!(
            responses[3]["result"]["structuredContent"]["rows"].as_array().unwrap().len(),
            4
        );
        assert_eq!(server.tracker().window_days(), 30);
    }

    #[test]
    fn test_database_persistence() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let db_path = temp_file.path().to_path_buf();

        let expected = {
            let backend = SqliteStore::new(&db_path).expect("Failed to open database");
            let mut tracker = HabitTracker::open(HabitPersistence::new(backend), 7);
            tracker.add_habit("Practice piano");
            let id = tracker.store().habits()[3].id.clone();
            tracker.toggle_completion(&id, parse_day("2024-03-10").unwrap());
            tracker.store().clone()
        };

        let backend = SqliteStore::new(&db_path).expect("Failed to reopen database");
        let tracker = HabitTracker::open(HabitPersistence::new(backend), 7);
        assert_eq!(*tracker.store(), expected);
    }

    #[test]
    fn test_storage_interface() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let storage = SqliteStore::new(temp_file.path()).expect("Failed to create storage");

        let _: &dyn KeyValueStore = &storage;
        assert_eq!(storage.get(STORAGE_KEY).unwrap(), None);
    }
}
