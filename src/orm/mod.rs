pub mod answers;
pub mod politicians;
pub mod projects;
pub mod questions;
