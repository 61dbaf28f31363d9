//! Applying and presenting optimization results

pub mod applier;
pub mod presenter;

pub use applier::{render_content, ResultApplier, OUTPUT_DIR};
pub use presenter::{
    ResultPresenter, ACTIONS_TAKEN_TITLE, ALREADY_OPTIMIZED, RECOMMENDATIONS_TITLE,
};
