//! Terminal rendering of actions taken and recommendations

use console::style;
use std::fmt::Write;

use crate::api::{Action, OptimizationResponse};
use crate::fmt::{banner, DIVIDER};

/// Printed when the service had nothing to change or suggest
pub const ALREADY_OPTIMIZED: &str =
    "Docker image is already optimized, no further actions were taken by dockershrink.";

/// Banner title of the actions-taken section
pub const ACTIONS_TAKEN_TITLE: &str = "Actions Taken";

/// Banner title of the recommendations section
pub const RECOMMENDATIONS_TITLE: &str = "Recommendations";

/// Formats and displays optimization results
pub struct ResultPresenter;

impl ResultPresenter {
    /// Render the result summary
    ///
    /// # Examples
    ///
    /// ```
    /// use dockershrink::api::OptimizationResponse;
    /// use dockershrink::output::{ResultPresenter, ALREADY_OPTIMIZED};
    ///
    /// let text = ResultPresenter::render(&OptimizationResponse::default());
    /// assert_eq!(text.trim_end(), ALREADY_OPTIMIZED);
    /// ```
    pub fn render(response: &OptimizationResponse) -> String {
        let mut out = String::new();

        if response.is_already_optimized() {
            out.push_str(ALREADY_OPTIMIZED);
            out.push('\n');
            return out;
        }

        render_section(&mut out, ACTIONS_TAKEN_TITLE, &response.actions_taken);
        render_section(&mut out, RECOMMENDATIONS_TITLE, &response.recommendations);
        out
    }

    /// Print the result summary to stdout
    pub fn print(response: &OptimizationResponse) {
        print!("{}", Self::render(response));
    }
}

fn render_section(out: &mut String, title: &str, actions: &[Action]) {
    if actions.is_empty() {
        return;
    }

    // Writing into a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", banner(title));
    for action in actions {
        let _ = writeln!(out, "File: {}", style(&action.filename).cyan());
        let _ = writeln!(out, "Title: {}", style(&action.title).green());
        let _ = writeln!(out, "Description: {}", action.description);
        if let Some(rule) = action.rule() {
            let _ = writeln!(out, "Rule: {}", style(rule).yellow());
        }
        let _ = writeln!(out, "{}", DIVIDER);
    }
}
