//! Product entity representing a catalog item.

use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
}

/// Input data for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
}

/// Partial update for an existing product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub category: Option<String>,
}

impl Resource for Product {
    type Create = NewProduct;
    type Patch = ProductPatch;

    const NAME: &'static str = "Product";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category: input.category,
        }
    }

    fn apply_patch(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}
