pub mod lookup;

pub use lookup::branch_for_ticket;
