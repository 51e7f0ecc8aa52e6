use serde::Deserialize;

use super::Locator;

/// Fully qualified form some hosts use for the view verb.
const QUALIFIED_VIEW: &str = "android.intent.action.VIEW";

/// Launch verbs the bridge acts on. Everything else is ignored upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
}

impl Action {
    /// Recognize a host verb. Unknown verbs yield `None`.
    pub fn from_host(verb: &str) -> Option<Self> {
        match verb {
            "VIEW" | QUALIFIED_VIEW => Some(Self::View),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "VIEW",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A launch event exactly as delivered by the host environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostEvent {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default, rename = "uri")]
    pub locator: Option<Locator>,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
}

impl HostEvent {
    /// A `VIEW` event for `uri` with no mime type.
    pub fn view(uri: impl Into<String>) -> Self {
        Self {
            action: Some(Action::View.as_str().to_string()),
            locator: Some(Locator::new(uri)),
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// Canonical launch record handed to the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchEvent {
    pub action: Action,
    pub uri: String,
    pub path: String,
    /// Empty when the host supplied none.
    pub mime_type: String,
}
