//! Key scripts: compact keystroke sequences for replays and tests
//!
//! Literal characters type themselves; named keys go in braces with optional
//! modifiers, e.g. `#proj{Down}{Enter}` or `{Ctrl+v}`. `{{` and `}}` escape
//! literal braces.

use super::types::{KeyCode, Keystroke, Modifiers};

/// Errors from key script parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    InvalidKey(String),
    UnterminatedKey(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::UnterminatedKey(k) => write!(f, "Unterminated key name: {{{}", k),
        }
    }
}

impl std::error::Error for KeymapError {}

/// Parse a key string like `Ctrl+Shift+Down` or `ArrowUp`
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key = None;

    for part in key_str.split('+') {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "cmd" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                if key.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in {}",
                        key_str
                    )));
                }
                key = Some(
                    KeyCode::from_key_name(part)
                        .ok_or_else(|| KeymapError::InvalidKey(part.to_string()))?,
                );
            }
        }
    }

    let key = key.ok_or_else(|| KeymapError::InvalidKey(key_str.to_string()))?;
    Ok(Keystroke::new(key, mods))
}

/// Parse a whole key script into keystrokes
pub fn parse_key_script(script: &str) -> Result<Vec<Keystroke>, KeymapError> {
    let mut strokes = Vec::new();
    let mut chars = script.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                strokes.push(Keystroke::char('{'));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                strokes.push(Keystroke::char('}'));
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    return Err(KeymapError::UnterminatedKey(name));
                }
                strokes.push(parse_key_string(&name)?);
            }
            '\n' => strokes.push(Keystroke::key(KeyCode::Enter)),
            '\t' => strokes.push(Keystroke::key(KeyCode::Tab)),
            c => strokes.push(Keystroke::char(c)),
        }
    }

    Ok(strokes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_and_named_keys() {
        let strokes = parse_key_script("#x{Down}{Enter}").unwrap();
        assert_eq!(
            strokes,
            vec![
                Keystroke::char('#'),
                Keystroke::char('x'),
                Keystroke::key(KeyCode::Down),
                Keystroke::key(KeyCode::Enter),
            ]
        );
    }

    #[test]
    fn test_modifiers_in_braces() {
        let strokes = parse_key_script("{Ctrl+v}").unwrap();
        assert_eq!(
            strokes,
            vec![Keystroke::new(KeyCode::Char('v'), Modifiers::CTRL)]
        );
    }

    #[test]
    fn test_escaped_braces() {
        let strokes = parse_key_script("{{a}}").unwrap();
        assert_eq!(
            strokes,
            vec![
                Keystroke::char('{'),
                Keystroke::char('a'),
                Keystroke::char('}')
            ]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_key_script("{Down"),
            Err(KeymapError::UnterminatedKey("Down".to_string()))
        );
        assert!(matches!(
            parse_key_script("{Hyper}"),
            Err(KeymapError::InvalidKey(_))
        ));
        assert!(matches!(
            parse_key_string("a+b"),
            Err(KeymapError::InvalidKey(_))
        ));
    }
}
