pub mod collector;

pub use collector::EnvCollector;
