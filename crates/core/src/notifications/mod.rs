//! Notifications module - goal-change message previews.

mod notifications_model;
mod notifications_service;

pub use notifications_model::{
    GoalEditSnapshot, GoalField, GoalFieldChange, NotificationPreview,
};
pub use notifications_service::preview_goal_change;
