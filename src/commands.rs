//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host runtime performs after an update.

use crate::surface::SurfaceId;
use crate::suggestions::SuggestionView;

#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Send `Msg::RefreshSuggestions` on the next event-loop turn, after the
    /// platform applied the current keystroke
    ScheduleRefresh { surface: SurfaceId },
    /// Draw the list into its overlay element
    RenderSuggestions(SuggestionView),
    /// Hide the overlay element
    HideSuggestions,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Combine two optional commands
    pub fn join(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (Some(a), Some(b)) => Some(Cmd::batch(vec![a, b])),
            (a, b) => a.or(b),
        }
    }

    /// Flatten nested batches into execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
