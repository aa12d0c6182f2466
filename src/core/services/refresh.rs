use std::cmp::Ordering;

use crate::core::services::selection::{Selection, SortKey};
use crate::models::Task;

/// The computed outcome of one refresh cycle: every column's card list in
/// display order, plus the ids of tasks whose status matched no column.
///
/// The plan is plain data so the whole filter/sort/redistribute step can be
/// exercised without a DOM; the page renders it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardPlan {
    columns: Vec<(String, Vec<Task>)>,
    pub skipped: Vec<String>,
}

impl BoardPlan {
    /// The ordered cards planned for one column, empty when the key received
    /// no tasks (or doesn't exist).
    pub fn column(&self, key: &str) -> &[Task] {
        self.columns
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, tasks)| tasks.as_slice())
            .unwrap_or(&[])
    }
}

/// One full board refresh: filter by the current selections, sort the
/// survivors with a stable sort, then deal them out to the given columns
/// in sequence order.
///
/// Tasks whose normalized status key matches none of `columns` end up in
/// `BoardPlan::skipped` instead of on the board. They are not removed from
/// the task set; the next refresh sees them again.
pub fn refresh(tasks: &[Task], selection: &Selection, columns: &[String]) -> BoardPlan {
    let mut passing: Vec<Task> = tasks
        .iter()
        .filter(|task| {
            selection.status.matches(task.status) && selection.priority.matches(task.priority)
        })
        .cloned()
        .collect();

    // slice::sort_by is stable, so ties keep their incoming relative order
    // and SortKey::Unsorted leaves the sequence untouched.
    passing.sort_by(|a, b| compare(a, b, selection.sort));

    let mut planned: Vec<(String, Vec<Task>)> = columns
        .iter()
        .map(|key| (key.clone(), Vec::new()))
        .collect();
    let mut skipped = Vec::new();

    for task in passing {
        let key = task.status.column_key();
        match planned.iter_mut().find(|(k, _)| *k == key) {
            Some((_, cards)) => cards.push(task),
            None => skipped.push(task.id),
        }
    }

    BoardPlan {
        columns: planned,
        skipped,
    }
}

fn compare(a: &Task, b: &Task, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Unsorted => Ordering::Equal,
        SortKey::DueDateAsc => due_date_order(a, b),
        SortKey::DueDateDesc => due_date_order(b, a),
        SortKey::Priority => b.priority.rank().cmp(&a.priority.rank()),
        SortKey::CreationDateAsc => a.created_at.cmp(&b.created_at),
        SortKey::CreationDateDesc => b.created_at.cmp(&a.created_at),
    }
}

// Tasks without a due date sort after every dated task. Because the desc
// comparator just swaps the operands, the None arms below keep undated
// tasks at the end in both directions.
fn due_date_order(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::selection::{PriorityFilter, StatusFilter};
    use crate::models::{Priority, TaskStatus};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn task(
        id: &str,
        status: TaskStatus,
        priority: Priority,
        due: Option<(i32, u32, u32)>,
        created_day: u32,
    ) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: String::new(),
            status,
            priority,
            due_date: due.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            created_at: Utc.with_ymd_and_hms(2024, 1, created_day, 9, 0, 0).unwrap(),
            assignee: None,
        }
    }

    fn board_columns() -> Vec<String> {
        TaskStatus::all().iter().map(|s| s.column_key()).collect()
    }

    fn selection(status: StatusFilter, priority: PriorityFilter, sort: SortKey) -> Selection {
        Selection {
            status,
            priority,
            sort,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    // Worked example: status filter "To Do", sort by due date ascending.
    #[test]
    fn filters_to_one_status_and_sorts_by_due_date() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::High, Some((2024, 1, 5)), 1),
            task("B", TaskStatus::ToDo, Priority::Low, Some((2024, 1, 1)), 2),
            task("C", TaskStatus::Done, Priority::Medium, Some((2024, 1, 3)), 3),
        ];
        let plan = refresh(
            &tasks,
            &selection(
                StatusFilter::Only(TaskStatus::ToDo),
                PriorityFilter::All,
                SortKey::DueDateAsc,
            ),
            &board_columns(),
        );

        assert_eq!(ids(plan.column("To-Do")), ["B", "A"]);
        assert!(plan.column("Done").is_empty());
        assert!(plan.column("In-Progress").is_empty());
        assert!(plan.skipped.is_empty());
    }

    // Worked example: no filters, priority sort ranks High > Medium > Low.
    #[test]
    fn priority_sort_ignores_dates() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::High, Some((2024, 1, 5)), 1),
            task("B", TaskStatus::ToDo, Priority::Low, Some((2024, 1, 1)), 2),
            task("C", TaskStatus::Done, Priority::Medium, Some((2024, 1, 3)), 3),
        ];
        let plan = refresh(
            &tasks,
            &selection(StatusFilter::All, PriorityFilter::All, SortKey::Priority),
            &board_columns(),
        );

        assert_eq!(ids(plan.column("To-Do")), ["A", "B"]);
        assert_eq!(ids(plan.column("Done")), ["C"]);
    }

    #[test]
    fn both_filters_apply_conjunctively() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::High, None, 1),
            task("B", TaskStatus::ToDo, Priority::Low, None, 2),
            task("C", TaskStatus::Done, Priority::High, None, 3),
            task("D", TaskStatus::InProgress, Priority::High, None, 4),
        ];
        let plan = refresh(
            &tasks,
            &selection(
                StatusFilter::Only(TaskStatus::ToDo),
                PriorityFilter::Only(Priority::High),
                SortKey::Unsorted,
            ),
            &board_columns(),
        );

        assert_eq!(ids(plan.column("To-Do")), ["A"]);
        assert!(plan.column("Done").is_empty());
        assert!(plan.column("In-Progress").is_empty());
    }

    #[test]
    fn unsorted_preserves_input_order() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::Low, Some((2024, 3, 1)), 5),
            task("B", TaskStatus::ToDo, Priority::High, Some((2024, 1, 1)), 1),
            task("C", TaskStatus::ToDo, Priority::Medium, None, 3),
        ];
        let plan = refresh(
            &tasks,
            &selection(StatusFilter::All, PriorityFilter::All, SortKey::Unsorted),
            &board_columns(),
        );

        assert_eq!(ids(plan.column("To-Do")), ["A", "B", "C"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        // Four tasks, two priority ties; relative order within a tie must
        // match the input sequence.
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::Medium, None, 1),
            task("B", TaskStatus::ToDo, Priority::High, None, 2),
            task("C", TaskStatus::ToDo, Priority::Medium, None, 3),
            task("D", TaskStatus::ToDo, Priority::High, None, 4),
        ];
        let plan = refresh(
            &tasks,
            &selection(StatusFilter::All, PriorityFilter::All, SortKey::Priority),
            &board_columns(),
        );

        assert_eq!(ids(plan.column("To-Do")), ["B", "D", "A", "C"]);
    }

    #[test]
    fn due_date_directions_are_mutual_reverses() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::Low, Some((2024, 2, 10)), 1),
            task("B", TaskStatus::ToDo, Priority::Low, Some((2024, 1, 2)), 2),
            task("C", TaskStatus::ToDo, Priority::Low, Some((2024, 6, 30)), 3),
        ];
        let columns = board_columns();

        let asc = refresh(
            &tasks,
            &selection(StatusFilter::All, PriorityFilter::All, SortKey::DueDateAsc),
            &columns,
        );
        let desc = refresh(
            &tasks,
            &selection(StatusFilter::All, PriorityFilter::All, SortKey::DueDateDesc),
            &columns,
        );

        let mut reversed: Vec<&str> = ids(desc.column("To-Do"));
        reversed.reverse();
        assert_eq!(ids(asc.column("To-Do")), reversed);
    }

    #[test]
    fn undated_tasks_sort_last_in_both_directions() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::Low, None, 1),
            task("B", TaskStatus::ToDo, Priority::Low, Some((2024, 1, 2)), 2),
            task("C", TaskStatus::ToDo, Priority::Low, Some((2024, 3, 4)), 3),
        ];
        let columns = board_columns();

        let asc = refresh(
            &tasks,
            &selection(StatusFilter::All, PriorityFilter::All, SortKey::DueDateAsc),
            &columns,
        );
        assert_eq!(ids(asc.column("To-Do")), ["B", "C", "A"]);

        let desc = refresh(
            &tasks,
            &selection(StatusFilter::All, PriorityFilter::All, SortKey::DueDateDesc),
            &columns,
        );
        assert_eq!(ids(desc.column("To-Do")), ["C", "B", "A"]);
    }

    #[test]
    fn creation_date_sorts_both_directions() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::Low, None, 20),
            task("B", TaskStatus::ToDo, Priority::Low, None, 5),
            task("C", TaskStatus::ToDo, Priority::Low, None, 12),
        ];
        let columns = board_columns();

        let asc = refresh(
            &tasks,
            &selection(
                StatusFilter::All,
                PriorityFilter::All,
                SortKey::CreationDateAsc,
            ),
            &columns,
        );
        assert_eq!(ids(asc.column("To-Do")), ["B", "C", "A"]);

        let desc = refresh(
            &tasks,
            &selection(
                StatusFilter::All,
                PriorityFilter::All,
                SortKey::CreationDateDesc,
            ),
            &columns,
        );
        assert_eq!(ids(desc.column("To-Do")), ["A", "C", "B"]);
    }

    #[test]
    fn tasks_without_a_matching_column_are_skipped_not_placed() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::Low, None, 1),
            task("B", TaskStatus::Done, Priority::Low, None, 2),
        ];
        // Board rendered without a Done column.
        let columns = vec!["To-Do".to_string(), "In-Progress".to_string()];
        let plan = refresh(
            &tasks,
            &selection(StatusFilter::All, PriorityFilter::All, SortKey::Unsorted),
            &columns,
        );

        assert_eq!(ids(plan.column("To-Do")), ["A"]);
        assert_eq!(plan.skipped, ["B"]);
        assert!(plan.column("Done").is_empty());
    }

    #[test]
    fn refresh_is_idempotent_for_identical_inputs() {
        let tasks = vec![
            task("A", TaskStatus::ToDo, Priority::High, Some((2024, 1, 5)), 1),
            task("B", TaskStatus::InProgress, Priority::Low, None, 2),
            task("C", TaskStatus::Done, Priority::Medium, Some((2024, 1, 3)), 3),
        ];
        let columns = board_columns();
        let sel = selection(StatusFilter::All, PriorityFilter::All, SortKey::DueDateAsc);

        assert_eq!(refresh(&tasks, &sel, &columns), refresh(&tasks, &sel, &columns));
    }

    #[test]
    fn empty_task_set_yields_empty_columns() {
        let plan = refresh(
            &[],
            &Selection::default(),
            &board_columns(),
        );
        for key in board_columns() {
            assert!(plan.column(&key).is_empty());
        }
        assert!(plan.skipped.is_empty());
    }
}
