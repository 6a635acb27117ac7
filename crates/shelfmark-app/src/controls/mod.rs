//! Control synchronization protocol.
//!
//! Two explicit control variants are modelled instead of one overloaded
//! toggler: [`ToggleControl`] flips favorited ⇄ not-favorited in place,
//! while [`RemoveControl`] performs the one-way present → absent transition
//! and drops the rendered element. The home grid wires the former, the
//! favorites page wires the latter on top of its own card removal.

mod remove;
mod toggle;

pub use remove::RemoveControl;
pub use toggle::{hydrate_toggle_controls, ToggleControl};

use shelfmark_core::ports::RenderedControlPort;

/// Label shown while the bound book is favorited.
pub const LABEL_FAVORITED: &str = "Added to Favorites";

/// Label shown while it is not.
pub const LABEL_NOT_FAVORITED: &str = "Add to Favorites";

/// Paint a control for the target membership state.
///
/// Context-agnostic: the same highlight and label treatment applies
/// wherever the control is mounted. Callers that need different semantics
/// wire a different control variant instead of branching here.
pub fn apply_favorite_visual(control: &dyn RenderedControlPort, favorited: bool) {
    control.set_highlighted(favorited);
    control.set_label(if favorited {
        LABEL_FAVORITED
    } else {
        LABEL_NOT_FAVORITED
    });
}
