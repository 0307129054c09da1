//! The Force Path mode flag
//!
//! `try`/`catch` and `switch` are gated behind the Sith path, and the gate is
//! enforced twice: once by the parser (whose flag is set by the
//! `Set Force Path` directive in the source) and once by the interpreter
//! (whose flag is set only through [`set_force_path`] on the interpreter or
//! runtime). The two flags are deliberately independent: a program can parse
//! under Sith and still be denied at run time.
//!
//! [`set_force_path`]: crate::interpreter::Interpreter::set_force_path

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Parse-time or run-time mode; `Unset` until a directive or external call
/// chooses a path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForcePath {
    #[default]
    Unset,
    Jedi,
    Sith,
}

impl ForcePath {
    /// True only for the Sith path; `Unset` and `Jedi` are both denied
    pub fn is_sith(&self) -> bool {
        matches!(self, ForcePath::Sith)
    }
}

impl fmt::Display for ForcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForcePath::Unset => "Unset",
            ForcePath::Jedi => "Jedi",
            ForcePath::Sith => "Sith",
        };
        write!(f, "{}", name)
    }
}

/// Error for a string that names no Force Path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid Force Path '{0}', expected 'Sith' or 'Jedi'")]
pub struct InvalidForcePath(pub String);

impl FromStr for ForcePath {
    type Err = InvalidForcePath;

    /// Accepts `Sith` or `Jedi` in any ASCII case (for CLI flags); `Unset`
    /// is not a nameable state
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sith") {
            Ok(ForcePath::Sith)
        } else if s.eq_ignore_ascii_case("jedi") {
            Ok(ForcePath::Jedi)
        } else {
            Err(InvalidForcePath(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unset() {
        assert_eq!(ForcePath::default(), ForcePath::Unset);
    }

    #[test]
    fn test_only_sith_passes_the_gate() {
        assert!(ForcePath::Sith.is_sith());
        assert!(!ForcePath::Jedi.is_sith());
        assert!(!ForcePath::Unset.is_sith());
    }

    #[test]
    fn test_from_str_accepts_both_paths() {
        assert_eq!("Sith".parse::<ForcePath>().unwrap(), ForcePath::Sith);
        assert_eq!("jedi".parse::<ForcePath>().unwrap(), ForcePath::Jedi);
        assert_eq!("SITH".parse::<ForcePath>().unwrap(), ForcePath::Sith);
    }

    #[test]
    fn test_from_str_rejects_everything_else() {
        assert!("Unset".parse::<ForcePath>().is_err());
        assert!("grey".parse::<ForcePath>().is_err());
        assert!("".parse::<ForcePath>().is_err());
    }
}
