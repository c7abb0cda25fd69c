/// Host-dispatched events with element targeting.
///
/// The host environment owns the event loop; it resolves which element a
/// user interacted with and hands the widget an event carrying that
/// element's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click on an element.
    Click { target: String },
    /// Key released while an input element holds focus.
    KeyUp { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: target.into(),
        }
    }

    pub fn key_up(target: impl Into<String>) -> Self {
        Event::KeyUp {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Event::Click { target } | Event::KeyUp { target } => target,
        }
    }
}
