/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on an element. `None` means the click hit nothing.
    Click {
        target: Option<String>,
        button: MouseButton,
    },
}

impl Event {
    /// Primary-button click on the element with `target` id.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. } => target.as_deref(),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
