pub mod os;
pub mod tokio_sleeper;
