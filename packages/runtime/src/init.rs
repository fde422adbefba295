//! One-time initialization of generated components.

use tracing::debug;

use crate::scope::Object;

/// Initialization state of a generated component.
///
/// The transition `Uninitialized -> Initialized` happens in [`InitState::begin`]
/// and is terminal. Callers flip the state *before* running injection and the
/// post-initialize hook, so a hook that calls back into the initializer sees
/// `Initialized` and returns immediately.
///
/// There is no synchronization here: one instance is driven from one thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitState {
    #[default]
    Uninitialized,
    Initialized,
}

impl InitState {
    /// Enter the `Initialized` state.
    ///
    /// Returns `true` exactly once: on the call that performed the transition.
    /// The caller must then run injection and the post-initialize hook.
    pub fn begin(&mut self) -> bool {
        match self {
            Self::Uninitialized => {
                *self = Self::Initialized;
                debug!("component initialization started");
                true
            }
            Self::Initialized => false,
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized)
    }
}

/// Injection service: fills an allocated root instance from its markup.
///
/// Implemented by the UI toolkit for every type that can root a document.
pub trait Realize {
    /// Populate `self` from the markup resource at `resource_uri`.
    fn realize(&mut self, resource_uri: &str);
}

/// Structural interface some toolkits expect on loaded components.
///
/// Generated components implement it with an empty body.
pub trait ComponentConnector {
    fn connect(&mut self, connection_id: i32, target: Object);
}
