//! Deferred suggestion refresh
//!
//! Scheduled by keystrokes and run on the next event-loop turn, once the
//! platform has applied the key to the surface. A refresh that arrives after
//! the session ended, or for another surface, does nothing.

use super::reset;
use crate::commands::Cmd;
use crate::host::Host;
use crate::model::CaptureModel;
use crate::store::TagStore;
use crate::suggestions::{matching_candidates, place};
use crate::surface::SurfaceId;

pub fn refresh_suggestions(
    model: &mut CaptureModel,
    host: &mut dyn Host,
    store: &dyn TagStore,
    surface_id: SurfaceId,
) -> Option<Cmd> {
    let Some(session) = model.session() else {
        tracing::trace!("stale refresh after session ended");
        return None;
    };
    if session.surface != surface_id {
        tracing::trace!(?surface_id, "stale refresh for another surface");
        return None;
    }

    let viewport = host.viewport();
    let surface = match host.active_surface() {
        Some(surface) if surface.id() == surface_id => surface,
        _ => {
            tracing::debug!(?surface_id, "captured surface lost focus before refresh");
            return reset(model);
        }
    };

    let tags = store.list();
    let candidates = matching_candidates(&tags, &session.buffer, model.config.max_suggestions);
    if candidates.is_empty() {
        let was_visible = model.suggestions.is_visible();
        model.suggestions.hide();
        return was_visible.then_some(Cmd::HideSuggestions);
    }

    let bounds = place(
        surface.caret_anchor(),
        candidates.len(),
        viewport,
        &model.config.list,
    );
    model.suggestions.show(candidates, bounds, surface_id);
    model.suggestions.view().map(Cmd::RenderSuggestions)
}
