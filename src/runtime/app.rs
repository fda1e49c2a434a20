//! Event loop driving the capture engine against a page
//!
//! Input is delivered the way a browser-like platform would: the engine sees
//! each key first, then the key's native effect is applied to the focused
//! surface unless the engine prevented it. Messages scheduled by commands run
//! on the following turn via [`Runtime::run_pending`].

use std::collections::{HashMap, VecDeque};

use crate::commands::Cmd;
use crate::config::HelperConfig;
use crate::host::{Host, Page};
use crate::keymap::{parse_key_script, KeymapError, Keystroke};
use crate::messages::{KeyEvent, Msg, PointerMsg};
use crate::model::CaptureModel;
use crate::store::TagStore;
use crate::suggestions::{SuggestionView, SUGGESTIONS_ELEMENT_ID};
use crate::surface::SurfaceId;
use crate::update::{handle_key, update};

use super::input::apply_native_key;

/// An overlay element owned by the page, created on first render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub visible: bool,
    pub view: Option<SuggestionView>,
}

#[derive(Debug)]
pub struct Runtime<S: TagStore> {
    pub model: CaptureModel,
    pub page: Page,
    pub store: S,
    pending: VecDeque<Msg>,
    overlays: HashMap<&'static str, Overlay>,
}

impl<S: TagStore> Runtime<S> {
    pub fn new(config: HelperConfig, page: Page, store: S) -> Self {
        Self {
            model: CaptureModel::new(config),
            page,
            store,
            pending: VecDeque::new(),
            overlays: HashMap::new(),
        }
    }

    /// Deliver one keystroke without running deferred work
    pub fn key(&mut self, stroke: Keystroke) -> KeyEvent {
        let mut event = KeyEvent::new(stroke);
        let cmd = handle_key(&mut self.model, &mut self.page, &mut self.store, &mut event);
        if !event.default_prevented {
            if let Some(surface) = self.page.active_surface() {
                apply_native_key(surface, &stroke);
            }
        }
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }
        event
    }

    /// Deliver a keystroke and let the event loop settle
    pub fn press(&mut self, stroke: Keystroke) -> KeyEvent {
        let event = self.key(stroke);
        self.run_pending();
        event
    }

    pub fn type_keys(&mut self, strokes: &[Keystroke]) {
        for stroke in strokes {
            self.press(*stroke);
        }
    }

    /// Type a key script such as `#proj{Down}{Enter}`
    pub fn type_script(&mut self, script: &str) -> Result<(), KeymapError> {
        let strokes = parse_key_script(script)?;
        self.type_keys(&strokes);
        Ok(())
    }

    /// Move platform focus and notify the engine
    pub fn focus(&mut self, id: Option<SurfaceId>) {
        self.page.focus(id);
        let focus = self.page.focused();
        self.send(Msg::FocusChanged(focus));
    }

    pub fn pointer(&mut self, msg: PointerMsg) {
        self.send(Msg::Pointer(msg));
        self.run_pending();
    }

    /// Run a message through `update` immediately
    pub fn send(&mut self, msg: Msg) {
        let cmd = update(&mut self.model, &mut self.page, &mut self.store, msg);
        if let Some(cmd) = cmd {
            self.process_cmd(cmd);
        }
    }

    /// Drain deferred messages, including any they schedule
    pub fn run_pending(&mut self) {
        while let Some(msg) = self.pending.pop_front() {
            self.send(msg);
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn overlay(&self, element_id: &str) -> Option<&Overlay> {
        self.overlays.get(element_id)
    }

    /// The suggestion list as currently shown, if visible
    pub fn suggestions(&self) -> Option<&SuggestionView> {
        self.overlay(SUGGESTIONS_ELEMENT_ID)
            .filter(|o| o.visible)
            .and_then(|o| o.view.as_ref())
    }

    /// The page rebuilt its document and dropped every overlay element
    pub fn teardown_overlays(&mut self) {
        self.overlays.clear();
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::ScheduleRefresh { surface } => {
                    self.pending.push_back(Msg::RefreshSuggestions { surface });
                }
                Cmd::RenderSuggestions(view) => {
                    let overlay = self.overlays.entry(view.element_id).or_default();
                    overlay.visible = true;
                    overlay.view = Some(view);
                }
                Cmd::HideSuggestions => {
                    if let Some(overlay) = self.overlays.get_mut(SUGGESTIONS_ELEMENT_ID) {
                        overlay.visible = false;
                    }
                }
                Cmd::Batch(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TagSet;
    use crate::surface::FlatSurface;

    fn runtime(tags: &[&str]) -> Runtime<TagSet> {
        let mut page = Page::default();
        let id = page.add_surface(FlatSurface::line(SurfaceId(1), ""));
        page.focus(Some(id));
        let store = tags.iter().collect();
        Runtime::new(HelperConfig::default(), page, store)
    }

    #[test]
    fn test_refresh_is_deferred_to_next_turn() {
        let mut rt = runtime(&["xray"]);
        rt.key(Keystroke::char('#'));
        rt.key(Keystroke::char('x'));
        assert_eq!(rt.pending(), 2);
        assert!(rt.suggestions().is_none());

        rt.run_pending();
        assert_eq!(rt.pending(), 0);
        assert_eq!(rt.suggestions().map(|v| v.items.clone()), Some(vec!["xray".to_string()]));
    }

    #[test]
    fn test_overlay_recreated_after_teardown() {
        let mut rt = runtime(&["xray", "xenon"]);
        rt.type_script("#x").unwrap();
        rt.teardown_overlays();
        assert!(rt.suggestions().is_none());

        rt.press(Keystroke::char('e'));
        assert_eq!(
            rt.suggestions().map(|v| v.items.clone()),
            Some(vec!["xenon".to_string()])
        );
    }
}
