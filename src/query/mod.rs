pub mod cost;

pub use cost::{CostEstimate, CostFormula, FormulaQueryCoster, QueryCoster, QueryType};
