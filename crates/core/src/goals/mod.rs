//! Goals module - record models, column access, and record sources.

mod goals_columns;
mod goals_model;
mod goals_source;
mod goals_traits;


pub use goals_model::{GoalActivityRecord, GoalStatusRecord, ProgressStatus};
pub use goals_source::{CsvGoalSource, InMemoryGoalSource};
pub use goals_traits::GoalRecordSourceTrait;
