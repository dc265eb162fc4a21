//! Menu catalog records as supplied by the storefront backend.

use crate::{Recommendable, Record, Result, SearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A menu product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Owning category, if any
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Price in the shop currency
    pub price: f64,
    /// Picture shown on the product card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Creates a product with only the required fields set.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            category_id: None,
            price,
            image_url: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }
}

/// Searchable text fields of a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    /// `name`
    Name,
    /// `description`
    Description,
}

impl ProductField {
    /// All searchable product fields.
    pub const ALL: [ProductField; 2] = [ProductField::Name, ProductField::Description];

    /// Field name as it appears in catalog JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(ProductField::Name),
            "description" => Ok(ProductField::Description),
            other => Err(SearchError::InvalidField(other.to_string())),
        }
    }
}

impl Record for Product {
    type Field = ProductField;

    fn text(&self, field: ProductField) -> Option<&str> {
        match field {
            ProductField::Name => Some(&self.name),
            ProductField::Description => self.description.as_deref(),
        }
    }
}

impl Recommendable for Product {
    type Id = i64;
    type Category = i64;

    fn id(&self) -> &i64 {
        &self.id
    }

    fn category(&self) -> Option<&i64> {
        self.category_id.as_ref()
    }

    fn price(&self) -> Option<f64> {
        self.price.is_finite().then_some(self.price)
    }
}

/// A menu category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Searchable text fields of a [`Category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryField {
    /// `name`
    Name,
    /// `description`
    Description,
}

impl CategoryField {
    /// All searchable category fields.
    pub const ALL: [CategoryField; 2] = [CategoryField::Name, CategoryField::Description];

    /// Field name as it appears in catalog JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryField::Name => "name",
            CategoryField::Description => "description",
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(CategoryField::Name),
            "description" => Ok(CategoryField::Description),
            other => Err(SearchError::InvalidField(other.to_string())),
        }
    }
}

impl Record for Category {
    type Field = CategoryField;

    fn text(&self, field: CategoryField) -> Option<&str> {
        match field {
            CategoryField::Name => Some(&self.name),
            CategoryField::Description => self.description.as_deref(),
        }
    }
}

/// Products and categories loaded from a JSON export.
///
/// Accepts either `{"products": [...], "categories": [...]}` or a bare array
/// of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// All products
    #[serde(default)]
    pub products: Vec<Product>,
    /// All categories
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogJson {
    Full(Catalog),
    Products(Vec<Product>),
}

impl Catalog {
    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog = match serde_json::from_str(json)? {
            CatalogJson::Full(catalog) => catalog,
            CatalogJson::Products(products) => Catalog {
                products,
                categories: Vec::new(),
            },
        };
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Find a product by ID.
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find a category by ID.
    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}
