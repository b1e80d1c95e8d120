use crate::utils::time_utils::format_day_first_date;

use super::notifications_model::{
    GoalEditSnapshot, GoalField, GoalFieldChange, NotificationPreview,
};

/// Builds the message shown to a child after a parent edits their goal.
///
/// Only changed fields get a line, in the order name, target amount, end
/// date. With no changes the message is the heading alone.
pub fn preview_goal_change(
    previous: &GoalEditSnapshot,
    current: &GoalEditSnapshot,
) -> NotificationPreview {
    let mut changes = Vec::new();
    if previous.goal_name != current.goal_name {
        changes.push(GoalFieldChange {
            field: GoalField::GoalName,
            previous: previous.goal_name.clone(),
            current: current.goal_name.clone(),
        });
    }
    if previous.target_amount != current.target_amount {
        changes.push(GoalFieldChange {
            field: GoalField::TargetAmount,
            previous: previous.target_amount.clone(),
            current: current.target_amount.clone(),
        });
    }
    if previous.target_end_date != current.target_end_date {
        changes.push(GoalFieldChange {
            field: GoalField::TargetEndDate,
            previous: format_day_first_date(previous.target_end_date),
            current: format_day_first_date(current.target_end_date),
        });
    }

    let heading = format!(
        "Your parent has made some changes to your goal {}! 😊",
        current.goal_name
    );
    let message = if changes.is_empty() {
        heading
    } else {
        let lines: Vec<String> = changes
            .iter()
            .map(|change| {
                format!(
                    "• The {} has been changed from {} to {}.",
                    change.field.description(),
                    change.previous,
                    change.current
                )
            })
            .collect();
        format!("{}\n\n{}", heading, lines.join("\n"))
    };

    NotificationPreview { message, changes }
}
