//! Action-tagged sync payload
//!
//! The catalog API exposes a single process endpoint that applies a whole
//! product edit in one call. Every entity in the payload carries an
//! action tag telling the server what to do with it; entities from the
//! loaded snapshot appear exactly once (kept, updated or deleted), new
//! entities are tagged create.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::product::{GeneralAttribute, VariantOption};

/// Per-entity operation, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Create,
    Update,
    Delete,
    Keep,
}

impl SyncAction {
    /// Whether the server will write anything for this entity.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, SyncAction::Keep)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    pub action: SyncAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePayload {
    pub action: SyncAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariancePayload {
    pub action: SyncAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    pub price: PricePayload,
}

/// Top-level payload for the process-product endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub action: SyncAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub has_variants: bool,
    #[serde(default)]
    pub general_attributes: Vec<GeneralAttribute>,
    #[serde(default)]
    pub variant_options: Vec<VariantOption>,
    pub images: Vec<ImagePayload>,
    pub variances: Vec<VariancePayload>,
}
