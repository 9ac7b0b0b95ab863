// SPDX-License-Identifier: MPL-2.0
//! Index arithmetic and input mapping for gallery navigation.
//!
//! Everything here is pure so the wrap/bounds policy and the key table can
//! be exercised without a running widget.

use iced::keyboard::{key, Key};

/// Where a navigation key points, relative to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    Previous,
    Next,
    First,
    Last,
    Close,
}

/// Maps a pressed key to its navigation target. Unmapped keys are ignored.
pub fn key_target(key: &Key) -> Option<KeyTarget> {
    let Key::Named(named) = key else {
        return None;
    };

    match named {
        key::Named::ArrowLeft
        | key::Named::ArrowUp
        | key::Named::PageUp
        | key::Named::Backspace => Some(KeyTarget::Previous),

        key::Named::ArrowRight
        | key::Named::ArrowDown
        | key::Named::PageDown
        | key::Named::Enter
        | key::Named::Space => Some(KeyTarget::Next),

        key::Named::Home => Some(KeyTarget::First),
        key::Named::End => Some(KeyTarget::Last),
        key::Named::Escape => Some(KeyTarget::Close),
        _ => None,
    }
}

/// Resolves a requested index against the link count.
///
/// With `wrap` the index is reduced modulo `len` first (Euclidean, so `-1`
/// resolves to the last link). A result outside `[0, len)` is `None`,
/// which callers treat as a strict no-op.
pub fn resolve_index(target: isize, len: usize, wrap: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let target = if wrap {
        target.rem_euclid(len as isize)
    } else {
        target
    };

    (0..len as isize)
        .contains(&target)
        .then_some(target as usize)
}

/// The index a [`KeyTarget`] asks for, or `None` for [`KeyTarget::Close`].
pub fn target_index(target: KeyTarget, current: usize, len: usize) -> Option<isize> {
    match target {
        KeyTarget::Previous => Some(current as isize - 1),
        KeyTarget::Next => Some(current as isize + 1),
        KeyTarget::First => Some(0),
        KeyTarget::Last => Some(len as isize - 1),
        KeyTarget::Close => None,
    }
}

/// Visibility of the previous/next controls: hidden at the respective
/// boundary unless looping.
pub fn controls_visible(index: usize, len: usize, wrap: bool) -> (bool, bool) {
    let prev = wrap || index > 0;
    let next = wrap || index + 1 < len;
    (prev, next)
}
