//! Data models shared across services.

pub mod nutrition;
pub mod task;
pub mod user;

pub use nutrition::{ActivityLevel, Gender, Goal, NutritionInput, NutritionResult};
pub use task::Task;
pub use user::{AuthState, Role, User};
