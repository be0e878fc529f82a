pub mod engine;
pub mod logging;

pub use engine::{complete_line, Candidate, EditDescriptor, Outcome};
