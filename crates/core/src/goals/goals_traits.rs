use crate::errors::Result;
use crate::goals::goals_model::{GoalActivityRecord, GoalStatusRecord};

/// Supplies goal records wholesale at query time.
///
/// Implementations may read mock data, a file, or a live source; the
/// reporting layer treats them identically.
pub trait GoalRecordSourceTrait: Send + Sync {
    fn load_status_records(&self) -> Result<Vec<GoalStatusRecord>>;
    fn load_activity_records(&self) -> Result<Vec<GoalActivityRecord>>;
}
