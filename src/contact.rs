/// Product name used when a card has no usable title.
pub const FALLBACK_PRODUCT: &str = "your product";

pub fn inquiry_message(product: Option<&str>) -> String {
    let product = product
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_PRODUCT);
    format!("Hello, I'd like to learn more about {}.", product)
}

/// WhatsApp click-to-chat link pre-filled with an inquiry about `product`.
pub fn whatsapp_url(phone: &str, product: Option<&str>) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone,
        urlencoding::encode(&inquiry_message(product))
    )
}
