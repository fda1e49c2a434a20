//! Update functions for the Elm-style architecture
//!
//! All capture state transitions flow through these functions. Keystrokes go
//! through [`handle_key`]; everything else arrives as a [`Msg`].

mod keys;
mod pointer;
mod refresh;

use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::Msg;
use crate::model::CaptureModel;
use crate::store::TagStore;
use crate::suggestions::Accepted;
use crate::surface::{Surface, SurfaceId};

pub use keys::handle_key;
pub use pointer::update_pointer;
pub use refresh::refresh_suggestions;

/// Main update function - dispatches to sub-handlers
pub fn update(
    model: &mut CaptureModel,
    host: &mut dyn Host,
    store: &mut dyn TagStore,
    msg: Msg,
) -> Option<Cmd> {
    match msg {
        Msg::RefreshSuggestions { surface } => refresh_suggestions(model, host, store, surface),
        Msg::FocusChanged(focus) => update_focus(model, focus),
        Msg::Pointer(m) => update_pointer(model, host, store, m),
    }
}

/// Leaving the captured surface abandons the tag
fn update_focus(model: &mut CaptureModel, focus: Option<SurfaceId>) -> Option<Cmd> {
    let captured = model.session()?.surface;
    if focus == Some(captured) {
        return None;
    }
    tracing::debug!(?captured, ?focus, "focus left captured surface, cancelling");
    reset(model)
}

/// Return to idle, hiding the list if it was open
pub(crate) fn reset(model: &mut CaptureModel) -> Option<Cmd> {
    model.reset().then_some(Cmd::HideSuggestions)
}

/// Replace the typed token on `surface` with the canonical tag text and record
/// the tag. Runs for dropdown acceptance and for a separator with no list.
pub(crate) fn apply_selection(
    model: &mut CaptureModel,
    surface: &mut Surface,
    store: &mut dyn TagStore,
    tag: &str,
) -> Option<Cmd> {
    let Some(session) = model.session() else {
        return reset(model);
    };
    let token = session.token();
    let replacement = format!("{}{} ", model.config.trigger, tag);

    let outcome = surface.replace_token(&token, &replacement);
    tracing::debug!(?outcome, tag, surface = ?surface.id(), "applied tag selection");

    store.add(tag);
    reset(model)
}

/// Apply a candidate picked from the list, if its surface is still active
pub(crate) fn apply_accepted(
    model: &mut CaptureModel,
    host: &mut dyn Host,
    store: &mut dyn TagStore,
    accepted: Accepted,
) -> Option<Cmd> {
    match host.active_surface() {
        Some(surface) if surface.id() == accepted.surface => {
            apply_selection(model, surface, store, &accepted.tag)
        }
        _ => {
            tracing::debug!(surface = ?accepted.surface, "accepted surface no longer active");
            reset(model)
        }
    }
}
