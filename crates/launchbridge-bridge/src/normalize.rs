//! Host launch event normalization.

use launchbridge_common::{Action, HostEvent, LaunchEvent, Locator};

/// Convert a host event into the canonical record.
///
/// Yields `None` unless the event carries the view verb and a locator.
/// Never fails otherwise: absent optional fields fall back to `""`.
pub fn normalize(event: &HostEvent) -> Option<LaunchEvent> {
    let action = event.action.as_deref().and_then(Action::from_host)?;
    let locator = event.locator.as_ref()?;

    Some(LaunchEvent {
        action,
        uri: locator.as_str().to_string(),
        path: resolve_path(locator),
        mime_type: event.mime_type.clone().unwrap_or_default(),
    })
}

/// `file` locators resolve to their path component; anything else
/// (`content`, `https`, unknown, scheme-less) is passed through whole.
///
/// The scheme is matched exactly as the host spelled it.
pub fn resolve_path(locator: &Locator) -> String {
    match locator.scheme() {
        Some("file") => locator.path().unwrap_or_default(),
        _ => locator.as_str().to_string(),
    }
}
