// Profile store: the student profile model, its completion bookkeeping, and the
// in-memory sessions that hold one profile each.

pub mod completeness;
pub mod handlers;
pub mod models;
pub mod session;
