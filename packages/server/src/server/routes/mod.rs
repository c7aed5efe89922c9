// HTTP routes
pub mod dashboard;
pub mod health;
pub mod jobs;

pub use dashboard::*;
pub use health::*;
pub use jobs::*;
