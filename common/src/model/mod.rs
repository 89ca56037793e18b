pub mod battery;
pub mod device;
