//! Domain models exchanged with the backend

pub mod official;
pub mod problem;

pub use official::Department;
pub use problem::{Problem, ProblemStatus};
