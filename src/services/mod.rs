//! Business logic services.

pub mod guard;
pub mod login;
pub mod nutrition;
pub mod session;
pub mod stopwatch;
pub mod tasks;

pub use guard::{GuardDecision, RouteGuard};
pub use login::LoginForm;
pub use nutrition::NutritionService;
pub use session::SessionManager;
pub use stopwatch::{spawn_ticker, Stopwatch, TickerHandle};
pub use tasks::TaskService;
