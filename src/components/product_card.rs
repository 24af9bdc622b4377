use log::info;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::config::ProductConfig;
use crate::contact::whatsapp_url;

/// Reads the product name from the card around the clicked button.
/// `None` when the button is not inside a `.product-card` at all.
fn card_title(button: &Element) -> Option<Option<String>> {
    let card = button.closest(".product-card").ok().flatten()?;
    let title = card
        .query_selector("h3")
        .ok()
        .flatten()
        .and_then(|heading| heading.text_content());
    Some(title)
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: ProductConfig,
    pub contact_phone: AttrValue,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    // Yew delegates listeners to the app root, so the event's current target
    // is not the button. Resolve the card through the node ref instead.
    let button_ref = use_node_ref();

    let on_learn_more = {
        let phone = props.contact_phone.clone();
        let button_ref = button_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(button) = button_ref.cast::<Element>() else {
                return;
            };
            let Some(title) = card_title(&button) else {
                return;
            };
            let url = whatsapp_url(&phone, title.as_deref());
            info!("Opening WhatsApp inquiry: {}", url);
            if let Some(window) = window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        })
    };

    html! {
        <article class="product-card">
            {
                match &product.image {
                    Some(src) => html! {
                        <img src={src.clone()} alt={product.title.clone().unwrap_or_default()} loading="lazy" />
                    },
                    None => html! {},
                }
            }
            <div class="product-card__body">
                {
                    match &product.title {
                        Some(title) => html! { <h3>{title.clone()}</h3> },
                        None => html! {},
                    }
                }
                <p>{product.description.clone()}</p>
                {
                    match &product.price {
                        Some(price) => html! { <span class="price">{price.clone()}</span> },
                        None => html! {},
                    }
                }
                <div class="product-card__actions">
                    <a class="btn-primary" href="#contact">{"Order now"}</a>
                    <button type="button" class="btn-secondary" ref={button_ref} onclick={on_learn_more}>
                        {"Learn more"}
                    </button>
                </div>
            </div>
        </article>
    }
}
