use serde::{Deserialize, Serialize};

/// Interactive visibility changes applied to a figure.
///
/// The reference map layer is never affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityCommand {
    ShowAll,
    HideAll,
    /// Flip one year in every region
    ToggleYear(i32),
    /// Show one year and hide every other. When that year is already the
    /// only one shown, every year is shown again.
    IsolateYear(i32),
}
