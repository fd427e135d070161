//! Transient user-facing status messages.

use serde::Serialize;
use std::fmt;

/// Classification of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Success,
    Error,
    #[default]
    Info,
}

impl BannerKind {
    /// Returns the lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
            BannerKind::Info => "info",
        }
    }

    /// Accessibility role: errors interrupt, everything else is a status.
    pub fn role(self) -> &'static str {
        match self {
            BannerKind::Error => "alert",
            _ => "status",
        }
    }

    /// Live-region politeness matching [`role`](Self::role).
    pub fn politeness(self) -> &'static str {
        match self {
            BannerKind::Error => "assertive",
            _ => "polite",
        }
    }
}

impl fmt::Display for BannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status message shown after a store action completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    kind: BannerKind,
    message: String,
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(BannerKind::Info, message)
    }

    pub fn kind(&self) -> BannerKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}
