mod budget;
mod category;
mod goal;
mod kind;
mod transaction;

pub use budget::{Budget, BudgetStatus, Standing};
pub use category::{title_case, Category};
pub use goal::{Goal, GoalProgress, Milestone};
pub use kind::Kind;
pub use transaction::{checked_sum, group_by_category, total, Transaction};
