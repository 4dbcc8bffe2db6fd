//! Virtual groups: co-versioned module families published under several groups.
//!
//! A [`VirtualGroup`] claims records by `(group, module prefix)` pairs and gives
//! them one label for versioning decisions. The literal coordinate is still
//! what gets rendered.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VIRTUAL_GROUPS;
use crate::models::DependencyRecord;

/// One `(group, module prefix)` membership rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VirtualGroupMember {
    pub group: String,
    #[serde(default)]
    pub module_prefix: String,
}

impl VirtualGroupMember {
    pub fn matches(&self, record: &DependencyRecord) -> bool {
        record.group == self.group && record.module.starts_with(&self.module_prefix)
    }
}

/// A labelled set of membership rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualGroup {
    pub label: String,
    pub members: Vec<VirtualGroupMember>,
}

impl VirtualGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            members: Vec::new(),
        }
    }

    #[must_use]
    pub fn member(mut self, group: impl Into<String>, module_prefix: impl Into<String>) -> Self {
        self.members.push(VirtualGroupMember {
            group: group.into(),
            module_prefix: module_prefix.into(),
        });
        self
    }

    pub fn claims(&self, record: &DependencyRecord) -> bool {
        self.members.iter().any(|member| member.matches(record))
    }
}

/// Ordered, read-only collection of virtual groups.
///
/// When several groups claim a record, the first one registered wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VirtualGroupRegistry {
    groups: Vec<VirtualGroup>,
}

impl VirtualGroupRegistry {
    pub fn new(groups: Vec<VirtualGroup>) -> Self {
        Self {
            groups,
        }
    }

    /// Registry holding the kotlinx-coroutines and kotlinx-serialization families.
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_VIRTUAL_GROUPS
                .iter()
                .map(|(label, group, prefix)| VirtualGroup::new(*label).member(*group, *prefix))
                .collect(),
        )
    }

    pub fn groups(&self) -> &[VirtualGroup] {
        &self.groups
    }

    /// Label of the first virtual group claiming `record`, if any.
    pub fn virtual_group(&self, record: &DependencyRecord) -> Option<&str> {
        self.groups.iter().find(|group| group.claims(record)).map(|group| group.label.as_str())
    }

    /// The record's literal group unless a virtual group claims it.
    pub fn group_or_virtual_group<'a>(&'a self, record: &'a DependencyRecord) -> &'a str {
        self.virtual_group(record).unwrap_or(&record.group)
    }
}
