pub mod dashboard;
pub mod external;
pub mod project;
pub mod task;
