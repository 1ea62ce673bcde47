//! Lifecycle of a single lazily created window.

/// What [`WindowSlot::show_or_create`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowOutcome {
    /// No usable window existed; a new one was created and shown.
    Created,
    /// A hidden window was shown again.
    Shown,
    /// The window was already on screen; nothing changed.
    AlreadyVisible,
}

/// Holds at most one window instance.
///
/// A window that the user closes is [`Disposed`](Self::Disposed) and is never
/// reused; the next show creates a fresh one.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WindowSlot<W> {
    /// Never created.
    #[default]
    Absent,
    /// Created and not yet closed.
    Open {
        /// The window state.
        window: W,
        /// Whether it is on screen.
        visible: bool,
    },
    /// Closed by the user.
    Disposed,
}

impl<W> WindowSlot<W> {
    /// Show the window, creating it with `make` if there is none to reuse.
    pub fn show_or_create(&mut self, make: impl FnOnce() -> W) -> ShowOutcome {
        match self {
            WindowSlot::Open { visible: true, .. } => ShowOutcome::AlreadyVisible,
            WindowSlot::Open { visible, .. } => {
                *visible = true;
                ShowOutcome::Shown
            }
            WindowSlot::Absent | WindowSlot::Disposed => {
                *self = WindowSlot::Open {
                    window: make(),
                    visible: true,
                };
                ShowOutcome::Created
            }
        }
    }

    /// Take the window off screen without discarding it.
    ///
    /// Returns `false` if there is no open window.
    pub fn hide(&mut self) -> bool {
        match self {
            WindowSlot::Open { visible, .. } => {
                *visible = false;
                true
            }
            _ => false,
        }
    }

    /// Close the window for good, dropping its state.
    ///
    /// Returns `false` if there was no open window.
    pub fn dispose(&mut self) -> bool {
        if matches!(self, WindowSlot::Open { .. }) {
            *self = WindowSlot::Disposed;
            true
        } else {
            false
        }
    }

    /// Whether a window is on screen.
    pub fn is_visible(&self) -> bool {
        matches!(self, WindowSlot::Open { visible: true, .. })
    }

    /// Whether the last window was closed by the user.
    pub fn is_disposed(&self) -> bool {
        matches!(self, WindowSlot::Disposed)
    }

    /// The open window, visible or not.
    pub fn window(&self) -> Option<&W> {
        match self {
            WindowSlot::Open { window, .. } => Some(window),
            _ => None,
        }
    }

    /// Mutable access to the open window, visible or not.
    pub fn window_mut(&mut self) -> Option<&mut W> {
        match self {
            WindowSlot::Open { window, .. } => Some(window),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_slot_creates() {
        let mut slot = WindowSlot::<u32>::default();
        assert_eq!(slot.show_or_create(|| 1), ShowOutcome::Created);
        assert!(slot.is_visible());
        assert_eq!(slot.window(), Some(&1));
    }

    #[test]
    fn visible_window_is_left_alone() {
        let mut slot = WindowSlot::<u32>::default();
        slot.show_or_create(|| 1);
        *slot.window_mut().unwrap() = 7;

        assert_eq!(slot.show_or_create(|| 2), ShowOutcome::AlreadyVisible);
        assert_eq!(slot.window(), Some(&7));
    }

    #[test]
    fn hidden_window_is_reused() {
        let mut slot = WindowSlot::<u32>::default();
        slot.show_or_create(|| 1);
        *slot.window_mut().unwrap() = 7;
        assert!(slot.hide());
        assert!(!slot.is_visible());

        assert_eq!(slot.show_or_create(|| 2), ShowOutcome::Shown);
        assert_eq!(slot.window(), Some(&7));
    }

    #[test]
    fn disposed_window_is_recreated() {
        let mut slot = WindowSlot::<u32>::default();
        slot.show_or_create(|| 1);
        *slot.window_mut().unwrap() = 7;
        assert!(slot.dispose());
        assert!(slot.is_disposed());
        assert!(slot.window().is_none());

        assert_eq!(slot.show_or_create(|| 2), ShowOutcome::Created);
        assert_eq!(slot.window(), Some(&2));
    }

    #[test]
    fn hide_and_dispose_without_window() {
        let mut slot = WindowSlot::<u32>::default();
        assert!(!slot.hide());
        assert!(!slot.dispose());
        assert!(!slot.is_disposed());
    }
}
