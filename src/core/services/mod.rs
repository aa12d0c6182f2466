pub mod refresh;
pub mod selection;
pub mod storage;

pub use refresh::{refresh, BoardPlan};
pub use selection::{PriorityFilter, Selection, SortKey, StatusFilter};
pub use storage::seed_tasks;
