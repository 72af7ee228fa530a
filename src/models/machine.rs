//! Machine model.

use serde::{Deserialize, Serialize};

/// A machine that processes operations one at a time.
///
/// Identity is the machine's position in the problem's machine list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Machine {
    name: Option<String>,
}

impl Machine {
    /// Creates an unnamed machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the machine name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
