pub mod batteries;
pub mod devices;
