//! Car entity representing a car listing.

use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

/// A car listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Car {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
}

/// Input data for creating a new car.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
}

/// Partial update for an existing car. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarPatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub price: Option<f64>,
}

impl Resource for Car {
    type Create = NewCar;
    type Patch = CarPatch;

    const NAME: &'static str = "Car";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: NewCar) -> Self {
        Self {
            id,
            brand: input.brand,
            model: input.model,
            year: input.year,
            color: input.color,
            price: input.price,
        }
    }

    fn apply_patch(&mut self, patch: CarPatch) {
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}
