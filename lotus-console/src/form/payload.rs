//! Sync payload builder
//!
//! Turns the form state plus the original server snapshot into the
//! action-tagged payload the process endpoint expects. Every entity
//! from the snapshot appears exactly once (keep/update or delete),
//! every entity new to the form is tagged create. Deletion is decided
//! here by diffing against the snapshot, never against an intermediate
//! in-memory generation.

use std::collections::BTreeMap;

use shared::models::{
    ImagePayload, PricePayload, Product, ProductImage, ProductPayload, ProductVariance,
    SyncAction, VariancePayload,
};

use super::ProductForm;
use crate::error::FormError;

/// Name of the synthetic variance emitted while the variant toggle is
/// off.
pub const DEFAULT_VARIANCE_NAME: &str = "Default";

impl ProductForm {
    /// Build the payload for a create/update submit.
    pub fn sync_payload(&self) -> Result<ProductPayload, FormError> {
        self.validate()?;

        let snapshot = self.snapshot();
        let action = match snapshot.and_then(|s| s.id) {
            Some(_) => SyncAction::Update,
            None => SyncAction::Create,
        };

        let variances = if self.has_variants {
            self.variant_payloads(snapshot)
        } else {
            self.default_variance_payloads(snapshot)
        };

        Ok(ProductPayload {
            action,
            id: snapshot.and_then(|s| s.id),
            name: self.core.name.clone(),
            brand: self.core.brand.clone(),
            short_description: self.core.short_description.clone(),
            description: self.core.description.clone(),
            has_variants: self.has_variants,
            general_attributes: self
                .general_attributes
                .iter()
                .filter(|a| !a.name.trim().is_empty() && !a.value.trim().is_empty())
                .cloned()
                .collect(),
            variant_options: if self.has_variants {
                self.options().to_options()
            } else {
                Vec::new()
            },
            images: self.image_payloads(snapshot),
            variances,
        })
    }

    /// Build the payload for a whole-product delete.
    ///
    /// Refused when no server snapshot is loaded; a delete must never be
    /// guessed from form state alone.
    pub fn delete_payload(&self) -> Result<ProductPayload, FormError> {
        let snapshot = self.snapshot().ok_or(FormError::NothingLoaded)?;
        whole_delete_payload(snapshot)
    }

    /// Current images keep/create, snapshot images gone from the current
    /// list delete.
    fn image_payloads(&self, snapshot: Option<&Product>) -> Vec<ImagePayload> {
        let current = self.images();
        let mut out: Vec<ImagePayload> = current
            .iter()
            .map(|img| ImagePayload {
                action: if img.id.is_some() {
                    SyncAction::Keep
                } else {
                    SyncAction::Create
                },
                id: img.id,
                url: img.url.clone(),
            })
            .collect();

        if let Some(snap) = snapshot {
            for img in snap.images.iter().filter(|i| i.id.is_some()) {
                if !current.iter().any(|c| c.id == img.id) {
                    out.push(delete_image(img));
                }
            }
        }
        out
    }

    /// Variant toggle on: every generated variant becomes a variance,
    /// snapshot variances with no surviving combination are deleted.
    fn variant_payloads(&self, snapshot: Option<&Product>) -> Vec<VariancePayload> {
        let mut out: Vec<VariancePayload> = self
            .variants()
            .iter()
            .map(|variant| {
                let prior_price_id = variant.server_id.and_then(|id| {
                    snapshot
                        .and_then(|s| s.variances.iter().find(|v| v.id == Some(id)))
                        .and_then(|v| v.price.id)
                });
                VariancePayload {
                    action: if variant.server_id.is_some() {
                        SyncAction::Update
                    } else {
                        SyncAction::Create
                    },
                    id: variant.server_id,
                    name: variant.display_name.clone(),
                    sku: variant.sku.clone(),
                    stock: variant.stock,
                    attributes: variant.attributes.clone(),
                    price: PricePayload {
                        action: if prior_price_id.is_some() {
                            SyncAction::Update
                        } else {
                            SyncAction::Create
                        },
                        id: prior_price_id,
                        amount: variant.price,
                    },
                }
            })
            .collect();

        if let Some(snap) = snapshot {
            for variance in snap.variances.iter().filter(|v| v.id.is_some()) {
                if !self.variants().iter().any(|cur| cur.server_id == variance.id) {
                    out.push(delete_variance(variance));
                }
            }
        }
        out
    }

    /// Variant toggle off: one synthetic "Default" variance carrying the
    /// base fields. The first original variance's id is reused so the
    /// toggle never orphans a record; every other original variance is
    /// deleted.
    fn default_variance_payloads(&self, snapshot: Option<&Product>) -> Vec<VariancePayload> {
        let reused = snapshot.and_then(|s| s.variances.first());
        let reused_id = reused.and_then(|v| v.id);
        let prior_price_id = reused.and_then(|v| v.price.id);

        let mut out = vec![VariancePayload {
            action: if reused_id.is_some() {
                SyncAction::Update
            } else {
                SyncAction::Create
            },
            id: reused_id,
            name: DEFAULT_VARIANCE_NAME.to_string(),
            sku: self.core.base_sku.clone().unwrap_or_default(),
            stock: self.core.base_stock,
            attributes: BTreeMap::new(),
            price: PricePayload {
                action: if prior_price_id.is_some() {
                    SyncAction::Update
                } else {
                    SyncAction::Create
                },
                id: prior_price_id,
                amount: self.core.base_price,
            },
        }];

        if let Some(snap) = snapshot {
            for variance in snap.variances.iter().skip(1).filter(|v| v.id.is_some()) {
                out.push(delete_variance(variance));
            }
        }
        out
    }
}

/// Delete payload for a full snapshot: the core, every image, every
/// variance and every nested price tagged delete, form state ignored.
pub fn whole_delete_payload(snapshot: &Product) -> Result<ProductPayload, FormError> {
    let id = snapshot.id.ok_or(FormError::NothingLoaded)?;
    Ok(ProductPayload {
        action: SyncAction::Delete,
        id: Some(id),
        name: snapshot.name.clone(),
        brand: snapshot.brand.clone(),
        short_description: snapshot.short_description.clone(),
        description: snapshot.description.clone(),
        has_variants: snapshot.has_variants,
        general_attributes: snapshot.general_attributes.clone(),
        variant_options: snapshot.variant_options.clone(),
        images: snapshot.images.iter().map(delete_image).collect(),
        variances: snapshot.variances.iter().map(delete_variance).collect(),
    })
}

fn delete_image(image: &ProductImage) -> ImagePayload {
    ImagePayload {
        action: SyncAction::Delete,
        id: image.id,
        url: image.url.clone(),
    }
}

fn delete_variance(variance: &ProductVariance) -> VariancePayload {
    VariancePayload {
        action: SyncAction::Delete,
        id: variance.id,
        name: variance.name.clone(),
        sku: variance.sku.clone(),
        stock: variance.stock,
        attributes: variance.attributes.clone(),
        price: PricePayload {
            action: SyncAction::Delete,
            id: variance.price.id,
            amount: variance.price.amount,
        },
    }
}
