pub mod context;
pub mod cost;
pub mod dispatcher;

pub use context::{Fidelity, IterationContext};
pub use cost::EvalCounters;
pub use dispatcher::{ForceDispatcher, SwitchPolicy};
