pub mod memory;

pub use memory::{Memory, RecallRequest, RecallResult, RememberRequest};
