use crate::models::Task;

// The original board arrives server-rendered with its task cards already in
// the page; the CSR build ships the same data as an embedded seed instead.
const TASK_SEED: &str = include_str!("../../../data/tasks.json");

/// Decode the embedded task seed. Individual records that fail to decode are
/// dropped with a console error rather than taking the whole board down.
pub fn seed_tasks() -> Vec<Task> {
    let raw: Vec<serde_json::Value> = match serde_json::from_str(TASK_SEED) {
        Ok(values) => values,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to parse task seed: {}", e).into());
            return Vec::new();
        }
    };

    raw.into_iter()
        .filter_map(|value| match serde_json::from_value::<Task>(value) {
            Ok(task) => Some(task),
            Err(e) => {
                web_sys::console::error_1(&format!("Skipping malformed seed task: {}", e).into());
                None
            }
        })
        .collect()
}
