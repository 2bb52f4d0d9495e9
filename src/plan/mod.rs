pub mod compare;
pub mod datatype;
pub mod engine;
pub mod error;
pub mod ordering;
pub mod sample_data;
pub mod validate;

pub use compare::{compare_strategies, StrategyComparison};
pub use datatype::*;
pub use engine::simulate;
pub use error::{PlanError, Result};
pub use validate::{build_snapshots, validate_extra_payment, DebtInput};
