pub mod answers;
pub mod cost;
pub mod scenario;
pub mod timeline;
pub mod visa;
