pub mod domain;

pub use domain::{EngineError, RuleKind};
