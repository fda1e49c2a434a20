//! Keyboard handling for tag capture
//!
//! Runs before the host surface sees the key. Only keys that end a tag or
//! drive the open list are consumed; the trigger and tag characters reach the
//! surface normally and are read back through the deferred refresh.

use super::{apply_accepted, apply_selection, reset};
use crate::commands::Cmd;
use crate::host::Host;
use crate::keymap::{classify, KeyRole};
use crate::messages::KeyEvent;
use crate::model::{CaptureModel, CaptureState, Session};
use crate::store::TagStore;

pub fn handle_key(
    model: &mut CaptureModel,
    host: &mut dyn Host,
    store: &mut dyn TagStore,
    event: &mut KeyEvent,
) -> Option<Cmd> {
    if event.handled {
        return None;
    }
    event.handled = true;

    let role = classify(&event.keystroke, &model.config);

    if model.suggestions.is_visible() {
        match role {
            KeyRole::HighlightUp | KeyRole::HighlightDown => {
                event.consume();
                let delta = if role == KeyRole::HighlightDown { 1 } else { -1 };
                model.suggestions.move_highlight(delta);
                return model.suggestions.view().map(Cmd::RenderSuggestions);
            }
            r if r.accepts_suggestion() => {
                event.consume();
                let accepted = model.suggestions.accept_highlighted()?;
                return apply_accepted(model, host, store, accepted);
            }
            KeyRole::Cancel => {
                event.consume();
                tracing::debug!("escape with list open, cancelling");
                return reset(model);
            }
            _ => {}
        }
    }

    let Some(surface) = host.active_surface() else {
        if model.is_composing() {
            tracing::debug!("no active surface, cancelling");
        }
        return if model.is_composing() { reset(model) } else { None };
    };
    let id = surface.id();

    let mut prior = None;
    if model.session().is_some_and(|s| s.surface != id) {
        tracing::debug!(?id, "keystroke on a different surface, cancelling");
        prior = reset(model);
    }

    if role == KeyRole::Trigger {
        model.state = CaptureState::Composing(Session::new(id, surface.trigger_offset()));
        tracing::debug!(?id, "trigger typed, composing");
        return Cmd::join(prior, Some(Cmd::ScheduleRefresh { surface: id }));
    }

    let list_visible = model.suggestions.is_visible();
    let Some(session) = model.session_mut() else {
        return prior;
    };

    let cmd = match role {
        KeyRole::Cancel => {
            tracing::debug!(buffer = %session.buffer, "escape, cancelling");
            reset(model)
        }
        r if r.is_terminator() => {
            event.consume();
            let tag = session.buffer.trim().to_string();
            if tag.is_empty() {
                reset(model)
            } else if role == KeyRole::Separator && !list_visible {
                apply_selection(model, surface, store, &tag)
            } else {
                tracing::debug!(tag, "tag finished without replacement");
                store.add(&tag);
                reset(model)
            }
        }
        KeyRole::Delete => {
            if session.buffer.pop().is_some() {
                Some(Cmd::ScheduleRefresh { surface: id })
            } else {
                tracing::debug!("backspace over trigger, cancelling");
                reset(model)
            }
        }
        KeyRole::Printable(c) => {
            session.buffer.push(c);
            Some(Cmd::ScheduleRefresh { surface: id })
        }
        _ => None,
    };
    Cmd::join(prior, cmd)
}
