//! Keyboard key classification shared by the interactive views.
//!
//! Values are `KeyboardEvent.key` strings.

/// Enter and Space activate focusable rows and thumbnails like a click.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Keys that dismiss the modal dialog.
#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
