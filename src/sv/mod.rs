pub mod equipment;
pub mod history;
pub mod qr;

pub use equipment::{Equipment, NewEquipment};
pub use history::{History, NewHistory};
pub use qr::Qr;
