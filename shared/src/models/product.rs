//! Product Model
//!
//! The product detail endpoint returns the whole aggregate (core fields,
//! images, variances with nested prices). That snapshot is also the diff
//! baseline the sync payload is built against.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form specification entry shown on the product page
/// (e.g. "Material" -> "100% cotton").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralAttribute {
    pub name: String,
    pub value: String,
}

/// Named axis of variation with its enumerated values
/// (e.g. "Color" -> ["Red", "Blue"]). Value order is the operator's
/// insertion order and drives variant enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub name: String,
    pub values: Vec<String>,
}

/// Hosted product image. `id` is absent for images staged client-side
/// that the server has not recorded yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    #[serde(default)]
    pub id: Option<i64>,
    pub url: String,
}

/// Price record nested under a variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPrice {
    #[serde(default)]
    pub id: Option<i64>,
    pub amount: f64,
}

/// Sellable variance: one concrete combination of option values, with
/// its own stock, SKU and nested price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariance {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub stock: i64,
    /// option-group name -> selected value
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    pub price: ProductPrice,
}

/// Product aggregate as served by the catalog API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub has_variants: bool,
    /// Price/stock/SKU used when the product has no variants.
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub base_stock: i64,
    #[serde(default)]
    pub base_sku: Option<String>,
    #[serde(default)]
    pub general_attributes: Vec<GeneralAttribute>,
    #[serde(default)]
    pub variant_options: Vec<VariantOption>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub variances: Vec<ProductVariance>,
}
