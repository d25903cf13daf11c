use crate::domain::response::product::Product;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use shared::errors::ClientError;
use std::path::Path;
use validator::Validate;

pub const DEFAULT_MIN_PRICE: f64 = 0.0;
pub const DEFAULT_MAX_PRICE: f64 = 10_000.0;

/// Query string for the catalogue listing, passed through as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub params: Vec<(String, String)>,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }
}

/// Client-side narrowing of an already fetched listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub category_id: Option<i64>,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            category_id: None,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        let matches_category = self
            .category_id
            .is_none_or(|id| product.category_id == Some(id));
        let matches_price = product.price >= self.min_price && product.price <= self.max_price;

        matches_category && matches_price
    }

    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl ImageUpload {
    pub async fn from_path(path: &Path) -> Result<Self, ClientError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ClientError::Validation(vec![format!("{}: {e}", path.display())]))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        let mime = match path.extension().and_then(|ext| ext.to_str()) {
            Some("png") => Some("image/png"),
            Some("jpg" | "jpeg") => Some("image/jpeg"),
            Some("webp") => Some("image/webp"),
            Some("gif") => Some("image/gif"),
            _ => None,
        }
        .map(str::to_string);

        Ok(Self {
            file_name,
            bytes,
            mime,
        })
    }
}

/// Product create/update form, sent as multipart.
#[derive(Debug, Clone, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    pub description: String,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i64,

    #[validate(required(message = "Category is required"))]
    pub category_id: Option<i64>,

    pub image: Option<ImageUpload>,
}

impl ProductForm {
    pub fn into_multipart(self) -> Result<Form, ClientError> {
        let mut form = Form::new()
            .text("Name", self.name)
            .text("Description", self.description)
            .text("Price", self.price.to_string())
            .text("Stock", self.stock.to_string())
            .text(
                "CategoryID",
                self.category_id.map(|id| id.to_string()).unwrap_or_default(),
            );

        if let Some(image) = self.image {
            let mut part = Part::bytes(image.bytes).file_name(image.file_name);
            if let Some(mime) = image.mime {
                part = part
                    .mime_str(&mime)
                    .map_err(|e| ClientError::Validation(vec![format!("bad image type: {e}")]))?;
            }
            form = form.part("image", part);
        }

        Ok(form)
    }
}
