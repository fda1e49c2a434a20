//! End-to-end tag capture tests
//!
//! Keys go through the runtime the way a browser delivers them: the engine
//! sees the key first, the surface applies it natively unless prevented, and
//! deferred refreshes run on the next turn.

mod common;

use common::*;
use taghelper::keymap::{KeyCode, Keystroke};
use taghelper::messages::{ClickTarget, KeyEvent, Msg, PointerMsg};
use taghelper::store::{TagSet, TagStore};
use taghelper::surface::{Caret, EditKind, EventLog, InputPhase, VetoEdits};

// ========================================================================
// Commit paths
// ========================================================================

#[test]
fn test_space_with_empty_store_inserts_tag_on_input() {
    let mut rt = runtime(input(""), TagSet::new());
    rt.type_script("#proj ").unwrap();

    assert_eq!(surface_text(&rt, INPUT), "#proj ");
    assert_eq!(rt.store.list(), vec!["proj"]);
    assert!(!rt.model.is_composing());
}

#[test]
fn test_space_with_empty_store_inserts_tag_on_editor() {
    let mut rt = runtime(editor("see "), TagSet::new());
    rt.type_script("#proj ").unwrap();

    assert_eq!(surface_text(&rt, EDITOR), "see #proj ");
    assert_eq!(rt.store.list(), vec!["proj"]);
}

#[test]
fn test_down_then_enter_picks_second_candidate() {
    let mut rt = runtime(input(""), OrderedStore::new(&["xray", "xenon"]));
    rt.type_script("#x").unwrap();
    assert_eq!(
        shown(&rt),
        Some(vec!["xray".to_string(), "xenon".to_string()])
    );

    rt.type_script("{Down}{Enter}").unwrap();
    assert_eq!(surface_text(&rt, INPUT), "#xenon ");
    assert!(rt.suggestions().is_none());
}

#[test]
fn test_down_then_enter_on_editor() {
    let mut rt = runtime(editor(""), OrderedStore::new(&["xray", "xenon"]));
    rt.type_script("#x{Down}{Enter}").unwrap();
    assert_eq!(surface_text(&rt, EDITOR), "#xenon ");
}

#[test]
fn test_sorted_store_orders_candidates() {
    let mut rt = runtime(input(""), tag_set(&["xray", "xenon"]));
    rt.type_script("#x").unwrap();
    assert_eq!(
        shown(&rt),
        Some(vec!["xenon".to_string(), "xray".to_string()])
    );

    rt.type_script("{Down}{Enter}").unwrap();
    assert_eq!(surface_text(&rt, INPUT), "#xray ");
}

#[test]
fn test_highlight_wraps_around() {
    let mut rt = runtime(input(""), OrderedStore::new(&["xray", "xenon"]));
    rt.type_script("#x{Up}").unwrap();
    assert_eq!(rt.suggestions().and_then(|v| v.highlighted), Some(1));
    rt.type_script("{Down}").unwrap();
    assert_eq!(rt.suggestions().and_then(|v| v.highlighted), Some(0));
}

#[test]
fn test_space_with_list_open_accepts_highlighted() {
    let mut rt = runtime(input("a "), tag_set(&["project"]));
    rt.type_script("#pr ").unwrap();

    assert_eq!(surface_text(&rt, INPUT), "a #project ");
    assert!(!rt.store.contains("pr"));
}

#[test]
fn test_enter_without_list_records_without_replacing() {
    let mut rt = runtime(input(""), TagSet::new());
    let event = {
        rt.type_script("#new").unwrap();
        rt.press(Keystroke::key(KeyCode::Enter))
    };

    assert!(event.is_consumed());
    assert_eq!(surface_text(&rt, INPUT), "#new");
    assert!(rt.store.contains("new"));
}

#[test]
fn test_punctuation_ends_tag() {
    let mut rt = runtime(input(""), TagSet::new());
    let event = {
        rt.type_script("#done").unwrap();
        rt.press(Keystroke::char('.'))
    };

    assert!(event.is_consumed());
    assert!(rt.store.contains("done"));
    assert!(!rt.model.is_composing());
}

#[test]
fn test_terminator_on_bare_trigger_records_nothing() {
    let mut rt = runtime(input(""), TagSet::new());
    rt.type_script("# ").unwrap();
    assert!(rt.store.list().is_empty());
    assert!(!rt.model.is_composing());
}

// ========================================================================
// Cancellation
// ========================================================================

#[test]
fn test_escape_leaves_text_and_store_untouched() {
    let mut rt = runtime(input(""), TagSet::new());
    rt.type_script("#wo").unwrap();
    let event = rt.press(Keystroke::key(KeyCode::Escape));

    assert!(!event.is_consumed());
    assert_eq!(surface_text(&rt, INPUT), "#wo");
    assert!(!rt.store.contains("wo"));
    assert!(!rt.model.is_composing());
}

#[test]
fn test_escape_with_list_open_is_consumed_and_hides() {
    let mut rt = runtime(editor(""), tag_set(&["work"]));
    rt.type_script("#wo").unwrap();
    assert!(rt.suggestions().is_some());

    let event = rt.press(Keystroke::key(KeyCode::Escape));
    assert!(event.is_consumed());
    assert!(rt.suggestions().is_none());
    assert_eq!(surface_text(&rt, EDITOR), "#wo");
    assert_eq!(rt.store.list(), vec!["work"]);
}

#[test]
fn test_backspace_past_trigger_cancels() {
    let mut rt = runtime(input(""), TagSet::new());
    rt.type_script("#a{Backspace}{Backspace}").unwrap();
    assert!(!rt.model.is_composing());
    assert_eq!(surface_text(&rt, INPUT), "");

    rt.press(Keystroke::char(' '));
    assert!(rt.store.list().is_empty());
}

#[test]
fn test_focus_loss_cancels_session() {
    let mut rt = runtime(input(""), tag_set(&["alpha"]));
    let other = rt.page.add_surface(taghelper::surface::FlatSurface::line(
        taghelper::surface::SurfaceId(9),
        "",
    ));
    rt.type_script("#al").unwrap();
    assert!(rt.suggestions().is_some());

    rt.focus(Some(other));
    assert!(!rt.model.is_composing());
    assert!(rt.suggestions().is_none());

    rt.type_script("x ").unwrap();
    assert_eq!(surface_text(&rt, other), "x ");
    assert_eq!(surface_text(&rt, INPUT), "#al");
}

// ========================================================================
// Structured surfaces
// ========================================================================

#[test]
fn test_tag_split_across_fragments_is_replaced_whole() {
    let mut rt = runtime(editor("x "), TagSet::new());
    rt.type_script("#ab").unwrap();

    let surface = structured(&mut rt, EDITOR);
    let region = surface.region();
    let first = surface.doc().text_fragments(region)[0];
    let tail = surface.doc_mut().split_text(first, 4).unwrap();
    surface.set_selection(Some(Caret::new(tail, 1)));
    assert_eq!(surface.doc().text_fragments(region).len(), 2);

    rt.press(Keystroke::char(' '));
    assert_eq!(surface_text(&rt, EDITOR), "x #ab ");
    assert!(rt.store.contains("ab"));
}

#[test]
fn test_host_veto_keeps_text_and_records_tag() {
    let mut rt = runtime(editor(""), TagSet::new());
    let log = EventLog::new();
    {
        let surface = structured(&mut rt, EDITOR);
        let region = surface.region();
        surface.add_listener(region, VetoEdits);
        surface.add_listener(region, log.clone());
    }

    rt.type_script("#ab ").unwrap();

    assert_eq!(surface_text(&rt, EDITOR), "#ab");
    assert!(rt.store.contains("ab"));
    let events = log.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].phase, InputPhase::BeforeInput);
    assert_eq!(events[0].kind, EditKind::InsertReplacementText);
    assert_eq!(events[0].data, "#ab ");
}

#[test]
fn test_replacement_announced_in_two_phases() {
    let mut rt = runtime(editor(""), TagSet::new());
    let log = EventLog::new();
    {
        let surface = structured(&mut rt, EDITOR);
        let region = surface.region();
        surface.add_listener(region, log.clone());
    }

    rt.type_script("#ab ").unwrap();

    let phases: Vec<_> = log.events().iter().map(|e| e.phase).collect();
    assert_eq!(phases, vec![InputPhase::BeforeInput, InputPhase::Input]);
    assert_eq!(surface_text(&rt, EDITOR), "#ab ");
}

#[test]
fn test_lost_caret_falls_back_to_insertion() {
    let mut rt = runtime(editor(""), TagSet::new());
    rt.type_script("#ab").unwrap();
    {
        let surface = structured(&mut rt, EDITOR);
        let region = surface.region();
        let text = surface.doc().text_fragments(region)[0];
        surface.doc_mut().detach(text);
        surface.set_selection(Some(Caret::new(region, 0)));
    }

    rt.press(Keystroke::char(' '));
    assert_eq!(surface_text(&rt, EDITOR), "#ab ");
    assert!(rt.store.contains("ab"));
}

// ========================================================================
// Event loop
// ========================================================================

#[test]
fn test_stale_refresh_after_cancel_is_ignored() {
    let mut rt = runtime(input(""), tag_set(&["alpha"]));
    rt.key(Keystroke::char('#'));
    rt.key(Keystroke::char('a'));
    rt.key(Keystroke::key(KeyCode::Escape));
    assert_eq!(rt.pending(), 2);

    rt.run_pending();
    assert!(rt.suggestions().is_none());
    assert!(!rt.model.is_composing());
}

#[test]
fn test_refresh_sees_native_effect_of_key() {
    let mut rt = runtime(input("ab"), tag_set(&["alpha"]));
    rt.key(Keystroke::char('#'));
    rt.key(Keystroke::char('a'));
    rt.run_pending();

    let view = rt.suggestions().cloned().unwrap();
    // Two chars before the trigger plus "#a", 8px per column after 2px padding
    assert_eq!(view.bounds.x, 100.0 + 2.0 + 4.0 * 8.0);
}

#[test]
fn test_handled_event_is_not_processed_twice() {
    let mut rt = runtime(input(""), TagSet::new());
    let mut event = KeyEvent::new(Keystroke::char('#'));
    event.handled = true;

    let cmd = taghelper::update::handle_key(&mut rt.model, &mut rt.page, &mut rt.store, &mut event);
    assert!(cmd.is_none());
    assert!(!rt.model.is_composing());
}

#[test]
fn test_list_recreated_after_page_rebuild() {
    let mut rt = runtime(input(""), tag_set(&["alpha", "alps"]));
    rt.type_script("#al").unwrap();
    rt.teardown_overlays();

    rt.type_script("ps").unwrap();
    assert_eq!(shown(&rt), Some(vec!["alps".to_string()]));
}

// ========================================================================
// Pointer
// ========================================================================

#[test]
fn test_press_on_entry_selects_it() {
    let mut rt = runtime(input(""), OrderedStore::new(&["xray", "xenon"]));
    rt.type_script("#x").unwrap();
    rt.pointer(PointerMsg::Hover(1));
    assert_eq!(rt.suggestions().and_then(|v| v.highlighted), Some(1));

    rt.pointer(PointerMsg::Press(0));
    assert_eq!(surface_text(&rt, INPUT), "#xray ");
    assert!(!rt.model.is_composing());
}

#[test]
fn test_click_outside_hides_list() {
    let mut rt = runtime(input(""), tag_set(&["xray"]));
    rt.type_script("#x").unwrap();

    rt.pointer(PointerMsg::Click(ClickTarget::TriggerButton));
    assert!(rt.suggestions().is_some());

    rt.pointer(PointerMsg::Click(ClickTarget::Elsewhere));
    assert!(rt.suggestions().is_none());
    assert!(rt.model.is_composing());
}

#[test]
fn test_refresh_message_for_unknown_surface() {
    let mut rt = runtime(input(""), tag_set(&["xray"]));
    rt.type_script("#x").unwrap();
    rt.send(Msg::RefreshSuggestions {
        surface: taghelper::surface::SurfaceId(42),
    });
    assert!(rt.suggestions().is_some());
}
