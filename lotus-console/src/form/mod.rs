//! Product form engine
//!
//! Holds everything the operator edits on the product page: core fields,
//! general attributes, option groups, the generated variant list, and
//! the staged image list. Every option-group mutation regenerates the
//! variant list; submission turns the whole state plus the original
//! server snapshot into one action-tagged payload.

pub mod images;
pub mod options;
pub mod payload;
pub mod variants;

pub use images::ImageStaging;
pub use options::{MAX_OPTION_GROUPS, OptionGroup, OptionSet};
pub use variants::{NAME_SEPARATOR, Variant};

use lotus_client::{ClientError, HttpClient};
use shared::models::{GeneralAttribute, Product, ProductImage};
use validator::Validate;

use crate::error::FormError;

/// Directly edited product fields.
#[derive(Debug, Clone, Default, Validate)]
pub struct CoreFields {
    #[validate(length(min = 1, message = "product name is required"))]
    pub name: String,
    pub brand: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    /// Price/stock/SKU used while the variant toggle is off.
    pub base_price: f64,
    pub base_stock: i64,
    pub base_sku: Option<String>,
}

/// In-memory state of the product page between load and submit.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    /// Server snapshot this form was seeded from; the diff baseline.
    snapshot: Option<Product>,
    pub core: CoreFields,
    pub has_variants: bool,
    pub general_attributes: Vec<GeneralAttribute>,
    options: OptionSet,
    variants: Vec<Variant>,
    images: ImageStaging,
}

impl ProductForm {
    /// Blank form for product creation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the form from a loaded product.
    pub fn from_snapshot(product: Product) -> Self {
        let core = CoreFields {
            name: product.name.clone(),
            brand: product.brand.clone(),
            short_description: product.short_description.clone(),
            description: product.description.clone(),
            base_price: product.base_price,
            base_stock: product.base_stock,
            base_sku: product.base_sku.clone(),
        };

        Self {
            core,
            has_variants: product.has_variants,
            general_attributes: product.general_attributes.clone(),
            options: OptionSet::from_options(&product.variant_options),
            variants: variants::from_variances(&product.variances),
            images: ImageStaging::from_snapshot(&product.images),
            snapshot: Some(product),
        }
    }

    pub fn snapshot(&self) -> Option<&Product> {
        self.snapshot.as_ref()
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn images(&self) -> &[ProductImage] {
        self.images.images()
    }

    pub fn set_has_variants(&mut self, on: bool) {
        self.has_variants = on;
    }

    /// Check the directly edited fields.
    pub fn validate(&self) -> Result<(), FormError> {
        self.core.validate()?;
        Ok(())
    }

    // ========== Option groups ==========

    /// Add an empty option group. No-op when three groups exist.
    pub fn add_option_group(&mut self) -> bool {
        self.options.add_group()
    }

    pub fn remove_option_group(&mut self, index: usize) -> bool {
        if self.options.remove_group(index) {
            self.regenerate();
            true
        } else {
            false
        }
    }

    /// Rename a group. When the group stays valid and the new name is
    /// unique, in-progress variant edits survive: only the attribute key
    /// is rewritten. Otherwise the variant list is regenerated.
    pub fn rename_option_group(&mut self, index: usize, name: impl Into<String>) -> bool {
        let Some(old) = self.options.groups().get(index).cloned() else {
            return false;
        };
        if !self.options.rename_group(index, name) {
            return false;
        }
        let new = self.options.groups()[index].clone();
        let duplicate = self
            .options
            .groups()
            .iter()
            .enumerate()
            .any(|(i, g)| i != index && g.name == new.name);

        if old.is_valid() && new.is_valid() && !duplicate {
            if old.name != new.name {
                for variant in &mut self.variants {
                    if let Some(value) = variant.attributes.remove(&old.name) {
                        variant.attributes.insert(new.name.clone(), value);
                    }
                }
            }
        } else {
            self.regenerate();
        }
        true
    }

    pub fn add_option_value(&mut self, index: usize, value: &str) -> bool {
        if self.options.add_value(index, value) {
            self.regenerate();
            true
        } else {
            false
        }
    }

    pub fn remove_option_value(&mut self, group_index: usize, value_index: usize) -> bool {
        if self.options.remove_value(group_index, value_index) {
            self.regenerate();
            true
        } else {
            false
        }
    }

    fn regenerate(&mut self) {
        self.variants = variants::generate(self.options.groups(), &self.variants);
    }

    // ========== Variants ==========

    pub fn variant_mut(&mut self, index: usize) -> Option<&mut Variant> {
        self.variants.get_mut(index)
    }

    /// Apply price/stock/SKU-prefix across all variants.
    pub fn bulk_edit(&mut self, price: Option<f64>, stock: Option<i64>, sku_prefix: Option<&str>) {
        variants::bulk_apply(&mut self.variants, price, stock, sku_prefix);
    }

    // ========== Images ==========

    /// Stage an already-hosted image URL.
    pub fn add_image_url(&mut self, url: impl Into<String>) {
        self.images.add_url(url);
    }

    pub fn remove_image(&mut self, index: usize) -> Option<ProductImage> {
        self.images.remove(index)
    }

    /// Upload files and stage their hosted URLs in completion order.
    pub async fn stage_uploads(
        &mut self,
        client: &HttpClient,
        files: Vec<(String, Vec<u8>)>,
    ) -> Result<usize, ClientError> {
        self.images.stage_uploads(client, files).await
    }
}
