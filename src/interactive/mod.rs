// Interactive calculator form
pub mod dashboard;
pub mod state;

pub use dashboard::{Dashboard, DisplaySettings};
pub use state::{EditMode, FormState};
