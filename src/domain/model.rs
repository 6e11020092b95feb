use serde::{Deserialize, Serialize};

/// Someone currently in space and the craft they are aboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub craft: String,
}

/// Snapshot of who is in space at fetch time.
///
/// `number` comes straight from upstream and is not reconciled with
/// `people.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub number: u64,
    pub people: Vec<Person>,
}

impl Occupancy {
    pub fn is_consistent(&self) -> bool {
        self.number == self.people.len() as u64
    }
}
