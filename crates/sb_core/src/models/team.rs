use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// A football team, independent of any match it may be playing in.
///
/// Teams never change after construction. Share one as `Arc<Team>` so the
/// team store and every match referencing it point at the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl Entity for Team {
    fn id(&self) -> u32 {
        self.id
    }
}
