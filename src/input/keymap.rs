//! Character key bindings
//!
//! Digits are always bound to themselves. Every other action has a default
//! set of characters that the `[keys]` table of the config file can replace:
//!
//! ```toml
//! [keys]
//! clear = "cC"
//! multiply = "*x"
//! ```
//!
//! Each character of the string becomes one binding. `q` and `Q` are kept
//! for quitting and cannot be bound.

use crate::engine::operator::Operator;
use crate::input::{Digit, Input};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

/// Characters the application reserves for itself
pub const RESERVED_KEYS: [char; 2] = ['q', 'Q'];

const DEFAULT_BINDINGS: &[(char, Input)] = &[
    ('.', Input::Decimal),
    (',', Input::Decimal),
    ('+', Input::Operator(Operator::Add)),
    ('-', Input::Operator(Operator::Subtract)),
    ('*', Input::Operator(Operator::Multiply)),
    ('x', Input::Operator(Operator::Multiply)),
    ('X', Input::Operator(Operator::Multiply)),
    ('/', Input::Operator(Operator::Divide)),
    ('=', Input::Equals),
    ('c', Input::Clear),
    ('C', Input::Clear),
    ('h', Input::ClearHistory),
    ('H', Input::ClearHistory),
];

/// Problems with user-supplied bindings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeymapError {
    #[error("key '{key}' is bound to both {existing} and {requested}")]
    Conflict {
        key: char,
        existing: Input,
        requested: Input,
    },

    #[error("key '{key}' is reserved and cannot be bound to {requested}")]
    Reserved { key: char, requested: Input },

    #[error("no keys given for {action}")]
    Empty { action: Input },
}

/// Per-action overrides as read from the `[keys]` config table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub decimal: Option<String>,
    pub add: Option<String>,
    pub subtract: Option<String>,
    pub multiply: Option<String>,
    pub divide: Option<String>,
    pub equals: Option<String>,
    pub clear: Option<String>,
    pub clear_history: Option<String>,
}

impl KeyBindings {
    fn overrides(&self) -> Vec<(Input, &str)> {
        [
            (Input::Decimal, &self.decimal),
            (Input::Operator(Operator::Add), &self.add),
            (Input::Operator(Operator::Subtract), &self.subtract),
            (Input::Operator(Operator::Multiply), &self.multiply),
            (Input::Operator(Operator::Divide), &self.divide),
            (Input::Equals, &self.equals),
            (Input::Clear, &self.clear),
            (Input::ClearHistory, &self.clear_history),
        ]
        .into_iter()
        .filter_map(|(input, keys)| keys.as_deref().map(|keys| (input, keys)))
        .collect()
    }
}

/// Maps typed characters to calculator inputs
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: FxHashMap<char, Input>,
}

impl Keymap {
    /// The default bindings
    pub fn new() -> Self {
        let mut bindings = FxHashMap::default();
        for digit in Digit::ALL {
            bindings.insert(digit.as_char(), Input::Digit(digit));
        }
        for &(key, input) in DEFAULT_BINDINGS {
            bindings.insert(key, input);
        }
        Keymap { bindings }
    }

    /// Default bindings with the given actions rebound
    pub fn with_overrides(overrides: &KeyBindings) -> Result<Self, KeymapError> {
        let mut keymap = Keymap::new();
        let overrides = overrides.overrides();

        // Drop the defaults of every overridden action before binding, so
        // two actions can trade keys.
        for (input, _) in &overrides {
            keymap.bindings.retain(|_, bound| *bound != *input);
        }

        for (input, keys) in overrides {
            if keys.is_empty() {
                return Err(KeymapError::Empty { action: input });
            }
            for key in keys.chars() {
                keymap.bind(key, input)?;
            }
        }

        Ok(keymap)
    }

    /// Bind `key` to `input`, refusing to steal a key from another action
    pub fn bind(&mut self, key: char, input: Input) -> Result<(), KeymapError> {
        if RESERVED_KEYS.contains(&key) {
            return Err(KeymapError::Reserved {
                key,
                requested: input,
            });
        }
        match self.bindings.get(&key) {
            Some(&existing) if existing != input => Err(KeymapError::Conflict {
                key,
                existing,
                requested: input,
            }),
            _ => {
                self.bindings.insert(key, input);
                Ok(())
            }
        }
    }

    pub fn lookup(&self, key: char) -> Option<Input> {
        self.bindings.get(&key).copied()
    }

    /// All keys bound to `input`, sorted
    pub fn keys_for(&self, input: Input) -> Vec<char> {
        let mut keys: Vec<char> = self
            .bindings
            .iter()
            .filter(|(_, &bound)| bound == input)
            .map(|(&key, _)| key)
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::new();
        assert_eq!(keymap.lookup('5'), Digit::new(5).map(Input::Digit));
        assert_eq!(keymap.lookup('.'), Some(Input::Decimal));
        assert_eq!(
            keymap.lookup('x'),
            Some(Input::Operator(Operator::Multiply))
        );
        assert_eq!(keymap.lookup('='), Some(Input::Equals));
        assert_eq!(keymap.lookup('q'), None);
        assert_eq!(keymap.keys_for(Input::Clear), vec!['C', 'c']);
    }

    #[test]
    fn test_override_replaces_defaults() {
        let overrides = KeyBindings {
            clear: Some("e".to_string()),
            ..KeyBindings::default()
        };
        let keymap = Keymap::with_overrides(&overrides).unwrap();
        assert_eq!(keymap.lookup('e'), Some(Input::Clear));
        assert_eq!(keymap.lookup('c'), None);
        assert_eq!(keymap.lookup('C'), None);
    }

    #[test]
    fn test_actions_can_trade_keys() {
        let overrides = KeyBindings {
            clear: Some("h".to_string()),
            clear_history: Some("c".to_string()),
            ..KeyBindings::default()
        };
        let keymap = Keymap::with_overrides(&overrides).unwrap();
        assert_eq!(keymap.lookup('h'), Some(Input::Clear));
        assert_eq!(keymap.lookup('c'), Some(Input::ClearHistory));
    }

    #[test]
    fn test_conflict_with_default() {
        let overrides = KeyBindings {
            clear: Some("x".to_string()),
            ..KeyBindings::default()
        };
        let err = Keymap::with_overrides(&overrides).unwrap_err();
        assert_eq!(
            err,
            KeymapError::Conflict {
                key: 'x',
                existing: Input::Operator(Operator::Multiply),
                requested: Input::Clear,
            }
        );
        assert_eq!(
            err.to_string(),
            "key 'x' is bound to both multiply and clear"
        );
    }

    #[test]
    fn test_digits_cannot_be_stolen() {
        let overrides = KeyBindings {
            equals: Some("0".to_string()),
            ..KeyBindings::default()
        };
        assert!(matches!(
            Keymap::with_overrides(&overrides),
            Err(KeymapError::Conflict { key: '0', .. })
        ));
    }

    #[test]
    fn test_reserved_and_empty() {
        let reserved = KeyBindings {
            equals: Some("q".to_string()),
            ..KeyBindings::default()
        };
        assert!(matches!(
            Keymap::with_overrides(&reserved),
            Err(KeymapError::Reserved { key: 'q', .. })
        ));

        let empty = KeyBindings {
            divide: Some(String::new()),
            ..KeyBindings::default()
        };
        assert_eq!(
            Keymap::with_overrides(&empty).unwrap_err(),
            KeymapError::Empty {
                action: Input::Operator(Operator::Divide)
            }
        );
    }
}
