use serde::{Deserialize, Serialize};

use shelfguard_core::Entity;

use crate::metadata::Metadata;

/// Aggregate: a registered student with free-form metadata.
///
/// The metadata is frozen when the student is constructed. Neither the caller's
/// original collection nor anything handed out by [`Student::metadata`] can
/// change it afterwards.
///
/// Holding on to the caller's map is impossible: `Student` borrows nothing, so
/// the source stays freely mutable after construction. The accessor only hands
/// out the read-only [`Metadata`] view:
///
/// ```compile_fail
/// use std::collections::HashMap;
/// use shelfguard_catalog::Student;
///
/// let mut metadata = HashMap::new();
/// metadata.insert("Company".to_string(), "Truesec".to_string());
/// let student = Student::new("Johan", 1234, &metadata);
/// student.metadata().remove("Company");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    reg_no: u32,
    metadata: Metadata,
}

impl Student {
    pub fn new<I, K, V>(name: impl Into<String>, reg_no: u32, metadata: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let metadata = Metadata::freeze(metadata);
        tracing::trace!(reg_no, entries = metadata.len(), "student metadata frozen");

        Self {
            name: name.into(),
            reg_no,
            metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn reg_no(&self) -> u32 {
        self.reg_no
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl Entity for Student {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.reg_no
    }
}
