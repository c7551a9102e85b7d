// Models module
pub mod inputs;
pub mod results;

pub use inputs::{HumanCostMode, InputField, InputSet};
pub use results::ResultSet;
