use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A restaurant profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: String,
    pub restaurant_name: String,
    pub city: String,
    pub country: String,
    pub delivery_price: f64,
    pub estimated_delivery_time: u32,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

/// Binary attachment carried alongside the restaurant profile.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Typed create/update payload for a restaurant profile.
///
/// The backend accepts multipart form data; `into_multipart` serializes the
/// fields in a fixed order so the wire shape is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RestaurantForm {
    pub restaurant_name: String,
    pub city: String,
    pub country: String,
    pub delivery_price: f64,
    pub estimated_delivery_time: u32,
    pub cuisines: Vec<String>,
    pub menu_items: Vec<MenuItem>,
    pub image: Option<Attachment>,
}

impl RestaurantForm {
    pub(crate) fn into_multipart(self) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new()
            .text("restaurantName", self.restaurant_name)
            .text("city", self.city)
            .text("country", self.country)
            .text("deliveryPrice", self.delivery_price.to_string())
            .text(
                "estimatedDeliveryTime",
                self.estimated_delivery_time.to_string(),
            );
        for (index, cuisine) in self.cuisines.into_iter().enumerate() {
            form = form.text(format!("cuisines[{}]", index), cuisine);
        }
        for (index, item) in self.menu_items.into_iter().enumerate() {
            form = form
                .text(format!("menuItems[{}][name]", index), item.name)
                .text(format!("menuItems[{}][price]", index), item.price.to_string());
        }
        if let Some(image) = self.image {
            let part = reqwest::multipart::Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
            form = form.part("imageFile", part);
        }
        Ok(form)
    }
}
