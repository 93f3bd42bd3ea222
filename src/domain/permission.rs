//! Notification permission value objects

use std::fmt;

/// Known notification permission state.
///
/// State machine:
///   UNKNOWN -> GRANTED | DENIED (check or request)
///   GRANTED | DENIED -> GRANTED | DENIED (check overwrites)
///
/// Nothing ever transitions back to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PermissionState {
    /// Never asked
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl PermissionState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }

    /// Whether permission is known to be granted
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }

    /// Collapse to a boolean, treating `Unknown` as not permitted
    pub const fn as_bool(&self) -> bool {
        self.is_granted()
    }

    /// Compact encoding for atomic storage
    pub(crate) const fn to_u8(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Granted => 1,
            Self::Denied => 2,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Granted,
            2 => Self::Denied,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<bool> for PermissionState {
    fn from(granted: bool) -> Self {
        if granted {
            Self::Granted
        } else {
            Self::Denied
        }
    }
}

/// Answer from the OS when asked for the current permission status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionQuery {
    Granted,
    Denied,
    /// The user has never been asked
    Unset,
}

impl From<PermissionQuery> for PermissionState {
    fn from(query: PermissionQuery) -> Self {
        match query {
            PermissionQuery::Granted => Self::Granted,
            PermissionQuery::Denied | PermissionQuery::Unset => Self::Denied,
        }
    }
}

/// Answer from the OS permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionPrompt {
    Granted,
    Denied,
}

impl PermissionPrompt {
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl From<PermissionPrompt> for PermissionState {
    fn from(prompt: PermissionPrompt) -> Self {
        Self::from(prompt.is_granted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unknown() {
        assert_eq!(PermissionState::default(), PermissionState::Unknown);
    }

    #[test]
    fn only_granted_is_truthy() {
        assert!(PermissionState::Granted.as_bool());
        assert!(!PermissionState::Denied.as_bool());
        assert!(!PermissionState::Unknown.as_bool());
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", PermissionState::Unknown), "unknown");
        assert_eq!(format!("{}", PermissionState::Granted), "granted");
        assert_eq!(format!("{}", PermissionState::Denied), "denied");
    }

    #[test]
    fn unset_query_maps_to_denied() {
        assert_eq!(
            PermissionState::from(PermissionQuery::Unset),
            PermissionState::Denied
        );
        assert_eq!(
            PermissionState::from(PermissionQuery::Granted),
            PermissionState::Granted
        );
    }

    #[test]
    fn prompt_maps_to_state() {
        assert_eq!(
            PermissionState::from(PermissionPrompt::Granted),
            PermissionState::Granted
        );
        assert_eq!(
            PermissionState::from(PermissionPrompt::Denied),
            PermissionState::Denied
        );
    }

    #[test]
    fn atomic_encoding_is_stable() {
        for state in [
            PermissionState::Unknown,
            PermissionState::Granted,
            PermissionState::Denied,
        ] {
            assert_eq!(PermissionState::from_u8(state.to_u8()), state);
        }
        assert_eq!(PermissionState::from_u8(42), PermissionState::Unknown);
    }
}
