#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shortcut {
    TogglePanel,
    ToggleTheme,
    ToggleOverlay,
}

pub(crate) fn shortcut_for_key(key: &str) -> Option<Shortcut> {
    match key.to_ascii_lowercase().as_str() {
        "l" => Some(Shortcut::TogglePanel),
        "t" => Some(Shortcut::ToggleTheme),
        "h" => Some(Shortcut::ToggleOverlay),
        _ => None,
    }
}

/// Shortcuts stay inert while the user is typing into a form control.
pub(crate) fn absorbs_shortcuts(tag_name: &str) -> bool {
    matches!(
        tag_name.to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    )
}
