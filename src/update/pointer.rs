//! Pointer interaction with the suggestion list

use super::apply_accepted;
use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::{ClickTarget, PointerMsg};
use crate::model::CaptureModel;
use crate::store::TagStore;

pub fn update_pointer(
    model: &mut CaptureModel,
    host: &mut dyn Host,
    store: &mut dyn TagStore,
    msg: PointerMsg,
) -> Option<Cmd> {
    match msg {
        PointerMsg::Hover(index) => {
            model.suggestions.hover(index);
            model.suggestions.view().map(Cmd::RenderSuggestions)
        }
        // Press rather than click so the surface keeps focus
        PointerMsg::Press(index) => {
            let accepted = model.suggestions.press(index)?;
            apply_accepted(model, host, store, accepted)
        }
        PointerMsg::Click(ClickTarget::SuggestionList | ClickTarget::TriggerButton) => None,
        PointerMsg::Click(ClickTarget::Elsewhere) => {
            if !model.suggestions.is_visible() {
                return None;
            }
            // Composing continues; the next keystroke brings the list back
            model.suggestions.hide();
            Some(Cmd::HideSuggestions)
        }
    }
}
