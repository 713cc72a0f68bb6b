pub mod correction_flow;
pub mod correction_form;
pub mod presenter;

pub use correction_flow::{CorrectionFlow, RunOutcome};
pub use correction_form::CorrectionForm;
pub use presenter::{PanelKind, Presenter};
