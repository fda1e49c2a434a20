//! Native keyboard effects
//!
//! What the platform does with a key the engine did not consume. Only the
//! keys that matter to tag capture are modelled.

use crate::keymap::{KeyCode, Keystroke};
use crate::surface::{FlatBuffer, Surface};

pub fn apply_native_key(surface: &mut Surface, stroke: &Keystroke) {
    if let Some(c) = stroke.text() {
        let mut buf = [0u8; 4];
        surface.type_text(c.encode_utf8(&mut buf));
        return;
    }

    match stroke.key {
        KeyCode::Backspace => surface.delete_backward(),
        KeyCode::Enter | KeyCode::NumpadEnter => {
            if let Surface::Flat(flat) = surface {
                if matches!(flat.buffer(), FlatBuffer::Area(_)) {
                    flat.type_text("\n");
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Modifiers;
    use crate::surface::{FlatSurface, SurfaceId};

    #[test]
    fn test_typing_and_backspace() {
        let mut surface = Surface::from(FlatSurface::line(SurfaceId(1), ""));
        apply_native_key(&mut surface, &Keystroke::char('a'));
        apply_native_key(&mut surface, &Keystroke::char(' '));
        apply_native_key(&mut surface, &Keystroke::char('b'));
        apply_native_key(&mut surface, &Keystroke::key(KeyCode::Backspace));
        assert_eq!(surface.text(), "a ");
    }

    #[test]
    fn test_chords_insert_nothing() {
        let mut surface = Surface::from(FlatSurface::line(SurfaceId(1), ""));
        apply_native_key(
            &mut surface,
            &Keystroke::new(KeyCode::Char('c'), Modifiers::CTRL),
        );
        assert_eq!(surface.text(), "");
    }

    #[test]
    fn test_enter_only_breaks_lines_in_areas() {
        let mut line = Surface::from(FlatSurface::line(SurfaceId(1), "a"));
        let mut area = Surface::from(FlatSurface::area(SurfaceId(2), "a"));
        apply_native_key(&mut line, &Keystroke::key(KeyCode::Enter));
        apply_native_key(&mut area, &Keystroke::key(KeyCode::Enter));
        assert_eq!(line.text(), "a");
        assert_eq!(area.text(), "a\n");
    }
}
