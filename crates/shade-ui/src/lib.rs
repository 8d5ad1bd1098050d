//! Stateless UI actions over a document surface.
//!
//! Every action takes an explicit [`DocumentSurface`] handle, mutates at most
//! the nodes it names, and reports whether the primary lookup resolved. A
//! miss is a guarded no-op, never a fault; callers that want a hard failure
//! convert the outcome with [`ActionOutcome::ok_or_missing`].

use shade_core::ShadeError;
use shade_core::ShadeResult;
use shade_dom::Display;
use shade_dom::DocumentSurface;

/// Class consulted by styling rules to suppress rendering.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class consulted by styling rules to render as a block.
pub const BLOCK_CLASS: &str = "block";

/// Recorded miss entries are capped; the total is still counted.
const MAX_MISSED_RECORDS: usize = 32;

/// Result of a single action against the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    MissingNode,
}

impl ActionOutcome {
    pub fn applied(self) -> bool {
        self == Self::Applied
    }

    /// Converts a miss into an error for callers that treat it as fatal.
    pub fn ok_or_missing(self, element_id: &str) -> ShadeResult<()> {
        match self {
            Self::Applied => Ok(()),
            Self::MissingNode => Err(ShadeError::node_missing(element_id)),
        }
    }
}

/// Suppresses rendering of the named node by setting `display: none`.
/// Idempotent; a lookup miss leaves the document untouched.
pub fn hide_element(surface: &mut impl DocumentSurface, element_id: &str) -> ActionOutcome {
    if surface.set_display(element_id, Display::None) {
        ActionOutcome::Applied
    } else {
        ActionOutcome::MissingNode
    }
}

/// Removes `class_name` from the named node if present, else adds it.
/// Involutive: applying it twice restores the original membership.
pub fn toggle_class(
    surface: &mut impl DocumentSurface,
    element_id: &str,
    class_name: &str,
) -> ActionOutcome {
    if !surface.contains(element_id) {
        return ActionOutcome::MissingNode;
    }

    if surface.has_class(element_id, class_name) {
        surface.remove_class(element_id, class_name);
    } else {
        surface.add_class(element_id, class_name);
    }

    ActionOutcome::Applied
}

/// Toggles the well-known [`HIDDEN_CLASS`] on the named node.
pub fn toggle_hidden(surface: &mut impl DocumentSurface, element_id: &str) -> ActionOutcome {
    toggle_class(surface, element_id, HIDDEN_CLASS)
}

/// Reveals a spinner and, optionally, hides the icon it replaces.
///
/// A missing spinner makes the whole call a no-op. An icon identifier that is
/// absent, empty, or unresolved is ignored; the spinner mutation stands.
pub fn show_spinner(
    surface: &mut impl DocumentSurface,
    spinner_id: &str,
    icon_id: Option<&str>,
) -> ActionOutcome {
    if !surface.contains(spinner_id) {
        return ActionOutcome::MissingNode;
    }

    surface.remove_class(spinner_id, HIDDEN_CLASS);
    surface.add_class(spinner_id, BLOCK_CLASS);

    if let Some(icon_id) = icon_id.filter(|id| !id.is_empty()) {
        surface.add_class(icon_id, HIDDEN_CLASS);
    }

    ActionOutcome::Applied
}

/// Which action produced a recorded observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    HideElement,
    ToggleClass,
    ShowSpinner,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HideElement => "hide_element",
            Self::ToggleClass => "toggle_class",
            Self::ShowSpinner => "show_spinner",
        }
    }
}

/// A primary lookup that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissedLookup {
    pub action: ActionKind,
    pub element_id: String,
}

/// Outcome summary accumulated by [`ActionRecorder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionReport {
    pub applied: usize,
    pub missed_total: usize,
    pub missed: Vec<MissedLookup>,
}

/// Wraps a surface and records the outcome of every action driven through
/// it, standing in for the console diagnostics a live page would get.
#[derive(Debug, Default)]
pub struct ActionRecorder<S> {
    surface: S,
    report: ActionReport,
}

impl<S: DocumentSurface> ActionRecorder<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            report: ActionReport::default(),
        }
    }

    pub fn hide_element(&mut self, element_id: &str) -> ActionOutcome {
        let outcome = hide_element(&mut self.surface, element_id);
        self.record(ActionKind::HideElement, element_id, outcome);
        outcome
    }

    pub fn toggle_class(&mut self, element_id: &str, class_name: &str) -> ActionOutcome {
        let outcome = toggle_class(&mut self.surface, element_id, class_name);
        self.record(ActionKind::ToggleClass, element_id, outcome);
        outcome
    }

    pub fn toggle_hidden(&mut self, element_id: &str) -> ActionOutcome {
        self.toggle_class(element_id, HIDDEN_CLASS)
    }

    pub fn show_spinner(&mut self, spinner_id: &str, icon_id: Option<&str>) -> ActionOutcome {
        let outcome = show_spinner(&mut self.surface, spinner_id, icon_id);
        self.record(ActionKind::ShowSpinner, spinner_id, outcome);
        outcome
    }

    pub fn report(&self) -> &ActionReport {
        &self.report
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    fn record(&mut self, action: ActionKind, element_id: &str, outcome: ActionOutcome) {
        match outcome {
            ActionOutcome::Applied => {
                self.report.applied = self.report.applied.saturating_add(1);
            }
            ActionOutcome::MissingNode => {
                self.report.missed_total = self.report.missed_total.saturating_add(1);
                if self.report.missed.len() < MAX_MISSED_RECORDS {
                    self.report.missed.push(MissedLookup {
                        action,
                        element_id: element_id.to_owned(),
                    });
                }
            }
        }
    }
}
