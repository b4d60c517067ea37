pub mod form_action;
pub mod form_flow;
pub mod form_state;

pub use form_action::{reduce, FormAction};
pub use form_flow::{ExportedReport, FormAggregator};
pub use form_state::{FormState, Outcome};
