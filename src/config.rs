//! Machine configuration and the text formats used to enter it.
//!
//! [`MachineConfig`] is a plain serde-friendly description of a machine's
//! key settings. The parsers accept the shorthand an operator types at a
//! prompt: `"0 0 0"` for rotor positions or ring settings and `"AB CD"`
//! for plugboard cables.

use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::machine::Enigma;

/// Key settings for one machine.
///
/// Rotor ids, positions and ring settings are listed left to right.
/// Plugboard cables are two-letter strings such as `"AB"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    #[serde(default = "default_rotors")]
    pub rotors: Vec<usize>,

    #[serde(default = "default_settings")]
    pub positions: Vec<i32>,

    #[serde(default = "default_settings")]
    pub ring_settings: Vec<i32>,

    #[serde(default)]
    pub plugboard: Vec<String>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            rotors: default_rotors(),
            positions: default_settings(),
            ring_settings: default_settings(),
            plugboard: Vec::new(),
        }
    }
}

fn default_rotors() -> Vec<usize> {
    vec![0, 1, 2]
}

fn default_settings() -> Vec<i32> {
    vec![0, 0, 0]
}

impl MachineConfig {
    /// Builds a config from operator text with rotors I, II, III.
    ///
    /// # Parameters
    /// - `positions`: Whitespace-separated rotor positions, e.g. `"0 0 0"`.
    /// - `rings`: Whitespace-separated ring settings, e.g. `"1 2 3"`.
    /// - `plugboard`: Cable pairs, e.g. `"AB CD"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidSetting`] for a non-integer setting.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::MachineConfig;
    ///
    /// let config = MachineConfig::from_text("0 0 0", "0 0 0", "").unwrap();
    /// let mut machine = config.build().unwrap();
    /// assert_eq!(machine.process("AAAAA"), "BDZGO");
    /// ```
    pub fn from_text(positions: &str, rings: &str, plugboard: &str) -> Result<Self, EnigmaError> {
        Ok(Self {
            rotors: default_rotors(),
            positions: parse_settings(positions)?,
            ring_settings: parse_settings(rings)?,
            plugboard: parse_plugboard(plugboard)
                .into_iter()
                .map(|(a, b)| [a, b].iter().collect())
                .collect(),
        })
    }

    /// Plugboard cables as character pairs.
    ///
    /// # Errors
    /// Returns [`EnigmaError::MalformedPlugPair`] for an entry that is not
    /// exactly two characters long.
    pub fn plugboard_pairs(&self) -> Result<Vec<(char, char)>, EnigmaError> {
        self.plugboard
            .iter()
            .map(|cable| {
                let mut chars = cable.chars();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(a), Some(b), None) => Ok((a, b)),
                    _ => Err(EnigmaError::MalformedPlugPair(cable.clone())),
                }
            })
            .collect()
    }

    /// Builds a machine from this config.
    ///
    /// # Errors
    /// See [`Enigma::from_config`].
    pub fn build(&self) -> Result<Enigma, EnigmaError> {
        Enigma::from_config(self)
    }
}

/// Parses whitespace-separated integer settings such as `"0 12 25"`.
///
/// # Errors
/// Returns [`EnigmaError::InvalidSetting`] naming the first token that is
/// not an integer.
pub fn parse_settings(text: &str) -> Result<Vec<i32>, EnigmaError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| EnigmaError::InvalidSetting(token.to_string()))
        })
        .collect()
}

/// Extracts plugboard pairs from text such as `"AB CD"`.
///
/// The text is uppercased and every non-overlapping pair of adjacent letters
/// becomes a cable; a leftover single letter and anything else is ignored.
/// The result is not validated; [`Plugboard::new`](crate::Plugboard::new)
/// rejects reused letters.
///
/// # Examples
///
/// ```
/// use enigma::config::parse_plugboard;
///
/// assert_eq!(parse_plugboard("ab cd"), vec![('A', 'B'), ('C', 'D')]);
/// assert_eq!(parse_plugboard("ABCDE"), vec![('A', 'B'), ('C', 'D')]);
/// ```
pub fn parse_plugboard(text: &str) -> Vec<(char, char)> {
    let mut pairs = Vec::new();
    let mut pending: Option<char> = None;
    for c in text.to_uppercase().chars() {
        if !c.is_ascii_uppercase() {
            pending = None;
            continue;
        }
        match pending.take() {
            Some(first) => pairs.push((first, c)),
            None => pending = Some(c),
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_settings() {
        assert_eq!(parse_settings("0 0 0").unwrap(), vec![0, 0, 0]);
        assert_eq!(parse_settings("  5\t12  21 ").unwrap(), vec![5, 12, 21]);
        assert_eq!(parse_settings("-1 30").unwrap(), vec![-1, 30]);
        assert_eq!(parse_settings("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_parse_settings_rejects_garbage() {
        assert_eq!(
            parse_settings("0 x 0"),
            Err(EnigmaError::InvalidSetting("x".to_string()))
        );
    }

    #[test]
    fn test_parse_plugboard() {
        assert!(parse_plugboard("").is_empty());
        assert_eq!(parse_plugboard("AB"), vec![('A', 'B')]);
        assert_eq!(parse_plugboard("ab, cd ef"), vec![('A', 'B'), ('C', 'D'), ('E', 'F')]);
        assert!(parse_plugboard("A B").is_empty());
        assert_eq!(parse_plugboard("ABC DE"), vec![('A', 'B'), ('D', 'E')]);
        assert!(parse_plugboard("A1B2").is_empty());
    }

    #[test]
    fn test_from_text() {
        let config = MachineConfig::from_text("5 12 21", "1 2 3", "ab cd").unwrap();
        assert_eq!(config.rotors, vec![0, 1, 2]);
        assert_eq!(config.positions, vec![5, 12, 21]);
        assert_eq!(config.ring_settings, vec![1, 2, 3]);
        assert_eq!(config.plugboard, vec!["AB".to_string(), "CD".to_string()]);
    }

    #[test]
    fn test_plugboard_pairs_rejects_bad_entries() {
        let mut config = MachineConfig {
            plugboard: vec!["ABC".to_string()],
            ..MachineConfig::default()
        };
        assert_eq!(
            config.plugboard_pairs(),
            Err(EnigmaError::MalformedPlugPair("ABC".to_string()))
        );
        config.plugboard = vec![String::new()];
        assert_eq!(
            config.plugboard_pairs(),
            Err(EnigmaError::MalformedPlugPair(String::new()))
        );
        config.plugboard = vec!["AB".to_string(), "C".to_string()];
        assert_eq!(config.build(), Err(EnigmaError::MalformedPlugPair("C".to_string())));
    }

    #[test]
    fn test_default_builds_reference_machine() {
        let mut machine = MachineConfig::default().build().unwrap();
        assert_eq!(machine.process("AAAAA"), "BDZGO");
    }

    #[test]
    fn test_build_reports_slot_count() {
        let config = MachineConfig::from_text("0 0", "0 0 0", "").unwrap();
        assert!(matches!(
            config.build(),
            Err(EnigmaError::SlotCount { found: 2, .. })
        ));
    }
}
