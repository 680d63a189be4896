//! Variant generation
//!
//! The variant list is always the Cartesian product of the valid option
//! groups, enumerated with the first group as the outer loop so the
//! ordering is reproducible for identical inputs. Regeneration carries
//! operator-entered price/stock/SKU (and the server id) over to every
//! combination that still exists.
//!
//! Identity across regenerations is the sorted (group, value) tuple, not
//! the joined display string, so a value containing the separator cannot
//! collide; each variant also keeps a synthetic `uid` from its first
//! appearance.

use std::collections::BTreeMap;
use std::collections::HashMap;

use serde::Serialize;
use shared::models::ProductVariance;
use uuid::Uuid;

use super::options::OptionGroup;

/// Join separator for the human-readable variant name (display only).
pub const NAME_SEPARATOR: &str = " - ";

/// Sorted (group, value) pairs; the reconciliation key.
pub type AttributeKey = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    /// Stable synthetic identity, assigned at first generation.
    pub uid: Uuid,
    /// Server-side variance id, if this combination exists server-side.
    pub server_id: Option<i64>,
    /// Values joined by [`NAME_SEPARATOR`], in group order.
    pub display_name: String,
    /// option-group name -> selected value
    pub attributes: BTreeMap<String, String>,
    pub price: f64,
    pub stock: i64,
    pub sku: String,
}

impl Variant {
    /// Reconciliation key: attribute pairs in sorted order.
    pub fn key(&self) -> AttributeKey {
        // BTreeMap iteration is already sorted by group name
        self.attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Seed variants from a server snapshot's variances.
pub fn from_variances(variances: &[ProductVariance]) -> Vec<Variant> {
    variances
        .iter()
        .map(|v| Variant {
            uid: Uuid::new_v4(),
            server_id: v.id,
            display_name: v.name.clone(),
            attributes: v.attributes.clone(),
            price: v.price.amount,
            stock: v.stock,
            sku: v.sku.clone(),
        })
        .collect()
}

/// Compute the full combination set for the given groups, carrying data
/// over from `previous` wherever the attribute combination survived.
pub fn generate(groups: &[OptionGroup], previous: &[Variant]) -> Vec<Variant> {
    let valid: Vec<&OptionGroup> = groups.iter().filter(|g| g.is_valid()).collect();
    if valid.is_empty() {
        return Vec::new();
    }

    // each prior variant may donate its data to at most one combination
    let mut prior: HashMap<AttributeKey, Variant> =
        previous.iter().map(|v| (v.key(), v.clone())).collect();

    // first group is the outer loop, last group the inner loop
    let mut combos: Vec<Vec<String>> = vec![Vec::new()];
    for group in &valid {
        let mut next = Vec::with_capacity(combos.len() * group.values.len());
        for combo in &combos {
            for value in &group.values {
                let mut extended = combo.clone();
                extended.push(value.clone());
                next.push(extended);
            }
        }
        combos = next;
    }

    combos
        .into_iter()
        .map(|combo| {
            let attributes: BTreeMap<String, String> = valid
                .iter()
                .zip(&combo)
                .map(|(group, value)| (group.name.clone(), value.clone()))
                .collect();
            let key: AttributeKey = attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            let display_name = combo.join(NAME_SEPARATOR);

            match prior.remove(&key) {
                Some(prev) => Variant {
                    uid: prev.uid,
                    server_id: prev.server_id,
                    display_name,
                    attributes,
                    price: prev.price,
                    stock: prev.stock,
                    sku: prev.sku,
                },
                None => Variant {
                    uid: Uuid::new_v4(),
                    server_id: None,
                    display_name,
                    attributes,
                    price: 0.0,
                    stock: 0,
                    sku: String::new(),
                },
            }
        })
        .collect()
}

/// Apply a bulk edit across all variants. A `None` field leaves the
/// per-variant value alone; the SKU prefix numbers variants 1-based in
/// display order.
pub fn bulk_apply(
    variants: &mut [Variant],
    price: Option<f64>,
    stock: Option<i64>,
    sku_prefix: Option<&str>,
) {
    for (index, variant) in variants.iter_mut().enumerate() {
        if let Some(price) = price {
            variant.price = price;
        }
        if let Some(stock) = stock {
            variant.stock = stock;
        }
        if let Some(prefix) = sku_prefix {
            variant.sku = format!("{}-{}", prefix, index + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, values: &[&str]) -> OptionGroup {
        OptionGroup {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_cartesian_product_size_and_order() {
        let groups = [
            group("Color", &["Red", "Blue"]),
            group("Size", &["S", "M", "L"]),
        ];
        let variants = generate(&groups, &[]);

        assert_eq!(variants.len(), 6);
        // first group varies slowest
        let names: Vec<&str> = variants.iter().map(|v| v.display_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Red - S", "Red - M", "Red - L", "Blue - S", "Blue - M", "Blue - L"]
        );
    }

    #[test]
    fn test_no_duplicate_combinations() {
        let groups = [
            group("Color", &["Red", "Blue"]),
            group("Size", &["S", "M"]),
            group("Material", &["Silk", "Linen"]),
        ];
        let variants = generate(&groups, &[]);
        assert_eq!(variants.len(), 8);

        let mut keys: Vec<AttributeKey> = variants.iter().map(Variant::key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn test_invalid_groups_are_skipped() {
        let groups = [
            group("Color", &["Red"]),
            group("", &["S", "M"]),      // unnamed
            group("Material", &[]),      // no values
        ];
        let variants = generate(&groups, &[]);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].display_name, "Red");
    }

    #[test]
    fn test_no_valid_groups_means_no_variants() {
        assert!(generate(&[group("", &[])], &[]).is_empty());
        assert!(generate(&[], &[]).is_empty());
    }

    #[test]
    fn test_regeneration_preserves_edits() {
        let mut groups = vec![group("Color", &["Red", "Blue"])];
        let mut variants = generate(&groups, &[]);
        variants[0].price = 12.5;
        variants[0].stock = 3;
        variants[0].sku = "RED-1".to_string();
        variants[0].server_id = Some(77);
        let red_uid = variants[0].uid;

        // unrelated group added: Red survives with its data intact
        groups.push(group("Size", &["S"]));
        let regenerated = generate(&groups, &variants);
        assert_eq!(regenerated.len(), 2);

        // Red-S is a new combination, so fields reset, but Blue edits are
        // a different key; check carryover on the same single-group set
        groups.truncate(1);
        let back = generate(&groups, &variants);
        let red = back.iter().find(|v| v.display_name == "Red").unwrap();
        assert_eq!(red.price, 12.5);
        assert_eq!(red.stock, 3);
        assert_eq!(red.sku, "RED-1");
        assert_eq!(red.server_id, Some(77));
        assert_eq!(red.uid, red_uid);
    }

    #[test]
    fn test_adding_a_value_keeps_existing_combinations() {
        let mut groups = vec![
            group("Color", &["Red", "Blue"]),
            group("Size", &["S"]),
        ];
        let mut variants = generate(&groups, &[]);
        for (i, v) in variants.iter_mut().enumerate() {
            v.price = (i as f64 + 1.0) * 10.0;
            v.sku = format!("SKU-{}", i);
        }

        groups[1].values.push("M".to_string());
        let regenerated = generate(&groups, &variants);
        assert_eq!(regenerated.len(), 4);

        let red_s = regenerated
            .iter()
            .find(|v| v.display_name == "Red - S")
            .unwrap();
        assert_eq!(red_s.price, 10.0);
        assert_eq!(red_s.sku, "SKU-0");

        let red_m = regenerated
            .iter()
            .find(|v| v.display_name == "Red - M")
            .unwrap();
        assert_eq!(red_m.price, 0.0);
        assert_eq!(red_m.sku, "");
        assert!(red_m.server_id.is_none());
    }

    #[test]
    fn test_removing_a_group_drops_its_attribute_key() {
        let groups = vec![
            group("Color", &["Red"]),
            group("Size", &["S", "M"]),
        ];
        let variants = generate(&groups, &[]);

        let remaining = vec![group("Color", &["Red"])];
        let regenerated = generate(&remaining, &variants);
        assert_eq!(regenerated.len(), 1);
        assert!(
            regenerated
                .iter()
                .all(|v| !v.attributes.contains_key("Size"))
        );
    }

    #[test]
    fn test_separator_in_value_cannot_collide() {
        // "A - B" + "C" vs "A" + "B - C" join to the same display string
        let first = generate(
            &[group("Left", &["A - B"]), group("Right", &["C"])],
            &[],
        );
        let mut seeded = first;
        seeded[0].price = 99.0;

        let second = generate(
            &[group("Left", &["A"]), group("Right", &["B - C"])],
            &seeded,
        );
        assert_eq!(second[0].display_name, seeded[0].display_name);
        // same display string, different attribute key: no carryover
        assert_eq!(second[0].price, 0.0);
    }

    #[test]
    fn test_bulk_apply() {
        let groups = [group("Color", &["Red", "Blue", "Green"])];
        let mut variants = generate(&groups, &[]);
        variants[1].price = 5.0;

        bulk_apply(&mut variants, Some(20.0), None, Some("TEA"));
        assert!(variants.iter().all(|v| v.price == 20.0));
        assert_eq!(variants[0].sku, "TEA-1");
        assert_eq!(variants[2].sku, "TEA-3");
        assert_eq!(variants[0].stock, 0, "stock untouched when None");
    }
}
