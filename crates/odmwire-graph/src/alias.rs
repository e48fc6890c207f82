use crate::definition::Visibility;
use serde::Serialize;

///
/// Alias
///
/// Named pointer to another id in the same graph. Targets may be
/// definitions or further aliases; resolution chases the chain.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Alias {
    pub id: String,
    pub target: String,
    pub visibility: Visibility,
}

impl Alias {
    /// Start a private alias.
    #[must_use]
    pub fn new(id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            target: target.into(),
            visibility: Visibility::Private,
        }
    }

    #[must_use]
    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    #[must_use]
    pub const fn is_public(&self) -> bool {
        self.visibility.is_public()
    }
}
