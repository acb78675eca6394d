//! Product entity: catalog items identified by a whitespace-insensitive code.

use crate::error::{ValueError, ValueResult};
use crate::field::{Assignment, ValidatedField};
use crate::identity::{CanonicalId, Normalization};
use crate::validation::NonNegative;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog product.
///
/// Products compare by product code with leading and trailing whitespace
/// ignored, so `A001` and ` A001 ` are the same product. Case is significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProductRecord")]
pub struct Product {
    product_code: CanonicalId,
    price: ValidatedField<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    product_code: String,
    price: i64,
}

impl Product {
    pub fn new(product_code: impl Into<String>, price: i64) -> ValueResult<Self> {
        Ok(Self {
            product_code: CanonicalId::new("productCode", product_code, Normalization::Trim)?,
            price: ValidatedField::new("price", NonNegative).with_initial(price)?,
        })
    }

    /// The product code as supplied, padding included.
    pub fn product_code(&self) -> &str {
        self.product_code.as_str()
    }

    pub fn price(&self) -> ValueResult<i64> {
        self.price.get().copied()
    }

    pub fn set_product_code(&mut self, product_code: impl Into<String>) -> ValueResult<()> {
        self.product_code = CanonicalId::new("productCode", product_code, Normalization::Trim)?;
        Ok(())
    }

    pub fn set_price(&mut self, price: i64) -> ValueResult<Assignment> {
        self.price.try_set(price)
    }
}

impl_identity_value!(Product, kind: "product", id: product_code);

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "¥{}(商品コード:{})", self.price, self.product_code)
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = ValueError;

    fn try_from(record: ProductRecord) -> ValueResult<Self> {
        Self::new(record.product_code, record.price)
    }
}
