pub mod branch;
pub mod ticket;

pub use branch::{BranchName, SanitizeMode};
pub use ticket::Ticket;
