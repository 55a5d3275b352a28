//! Persistent key-value storage layer.

pub mod kv;

pub use kv::Store;

/// Storage keys as constants.
pub mod keys {
    pub const CURRENT_USER: &str = "currentUser";
    pub const NUTRITION_DATA: &str = "nutritionData";
    pub const NUTRITION_RESULT: &str = "nutritionResult";
    pub const TASKS: &str = "tasks";
}
