pub mod dispatch;
pub mod sample;

pub use dispatch::dispatch;
