//! Drug class definitions.

use serde::{Deserialize, Serialize};

/// A named group of medications sharing a pharmacological mechanism.
///
/// Member names are canonical generic names (`"Sertraline"`, not
/// `"Sertraline (Zoloft)"`). Membership tests against caller-supplied names
/// are performed by the registry, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugClass {
    /// Class identifier, e.g. `"SSRI"` or `"ACE Inhibitor"`.
    pub name: String,

    /// Member drugs in authored order.
    pub members: Vec<String>,
}

impl DrugClass {
    pub fn new(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}
