pub mod conversations;
pub mod history;
pub mod stats;
