pub mod exists;
pub mod remove;
pub mod retrieve;
pub mod store;
