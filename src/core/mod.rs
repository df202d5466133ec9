//! Pure logic for sentinel commands.

pub mod branch;
pub mod rules;
