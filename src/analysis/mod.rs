// Analysis module
pub mod roi;

pub use roi::compute;
