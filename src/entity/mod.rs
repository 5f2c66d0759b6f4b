pub mod equipment;
pub mod history;
