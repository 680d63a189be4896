//! Variant option groups
//!
//! Operator-defined axes of variation ("Color" -> Red, Blue). At most
//! three groups; a group only participates in variant generation once it
//! has a name and at least one value. Value order is insertion order.

use serde::Serialize;
use shared::models::VariantOption;

/// Hard cap on option groups per product.
pub const MAX_OPTION_GROUPS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionGroup {
    pub name: String,
    pub values: Vec<String>,
}

impl OptionGroup {
    /// Participates in variant generation.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.values.is_empty()
    }
}

/// The product's option groups, bounded at [`MAX_OPTION_GROUPS`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptionSet {
    groups: Vec<OptionGroup>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a server snapshot's option list.
    pub fn from_options(options: &[VariantOption]) -> Self {
        let groups = options
            .iter()
            .take(MAX_OPTION_GROUPS)
            .map(|o| OptionGroup {
                name: o.name.clone(),
                values: o.values.clone(),
            })
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Append an empty group. No-op at the cap.
    pub fn add_group(&mut self) -> bool {
        if self.groups.len() >= MAX_OPTION_GROUPS {
            return false;
        }
        self.groups.push(OptionGroup::default());
        true
    }

    pub fn remove_group(&mut self, index: usize) -> bool {
        if index >= self.groups.len() {
            return false;
        }
        self.groups.remove(index);
        true
    }

    pub fn rename_group(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.groups.get_mut(index) {
            Some(group) => {
                group.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Add a value to a group. Input is trimmed; empty and duplicate
    /// values are rejected.
    pub fn add_value(&mut self, index: usize, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        match self.groups.get_mut(index) {
            Some(group) => {
                if group.values.iter().any(|v| v == value) {
                    return false;
                }
                group.values.push(value.to_string());
                true
            }
            None => false,
        }
    }

    pub fn remove_value(&mut self, group_index: usize, value_index: usize) -> bool {
        match self.groups.get_mut(group_index) {
            Some(group) if value_index < group.values.len() => {
                group.values.remove(value_index);
                true
            }
            _ => false,
        }
    }

    /// Wire-shaped options, valid groups only.
    pub fn to_options(&self) -> Vec<VariantOption> {
        self.groups
            .iter()
            .filter(|g| g.is_valid())
            .map(|g| VariantOption {
                name: g.name.clone(),
                values: g.values.clone(),
            })
            .collect()
    }
}
