pub mod diff;
mod dispatch;

pub use dispatch::dispatch;
