use std::sync::Arc;

use leptos::prelude::*;

use shopfront::{
    cart::Cart,
    catalog::Catalog,
    pricing::format_price,
    products::Product,
};

/// UI model for a product row.
#[derive(Debug, Clone)]
pub struct ProductListItem {
    /// Stable fixture key.
    pub fixture_key: String,

    /// Display price.
    pub price: String,

    /// Product added to the cart when the row's button is pressed.
    pub product: Product<'static>,
}

/// Build product rows in catalog order.
pub fn list_items(catalog: &Catalog<'static>) -> Vec<ProductListItem> {
    catalog
        .iter()
        .map(|(fixture_key, product)| ProductListItem {
            fixture_key: fixture_key.to_string(),
            price: format_price(product.price()),
            product: product.clone(),
        })
        .collect()
}

/// Add a product to the cart, returning the message to show the user.
pub fn add_to_cart(cart: &mut Cart<'static>, product: Product<'static>) -> String {
    let title = product.title.clone();

    match cart.add_item(product) {
        Ok(()) => format!("Added {title} to cart."),
        Err(error) => format!("Could not add {title}: {error}"),
    }
}

#[component]
fn ProductRow(
    item: ProductListItem,
    cart: RwSignal<Cart<'static>>,
    status_message: RwSignal<Option<String>>,
) -> impl IntoView {
    let ProductListItem {
        fixture_key,
        price,
        product,
    } = item;

    let title = product.title.clone();
    let alt = product.title.clone();
    let image_url = product.image_url.clone();
    let description = product.description.clone();
    let add_button_label = format!("Add {title} ({price}) to cart");

    view! {
        <li class="product-item" data-product-key=fixture_key>
            <div>
                <img src=image_url alt=alt />
                <div class="product-item__content">
                    <h2>{title}</h2>
                    <h3>{price}</h3>
                    <p>{description}</p>
                    <button
                        type="button"
                        aria-label=add_button_label
                        on:click=move |_| {
                            let mut message = String::new();

                            cart.update(|cart| {
                                message = add_to_cart(cart, product.clone());
                            });

                            status_message.set(Some(message));
                        }
                    >
                        "Add to cart"
                    </button>
                </div>
            </div>
        </li>
    }
}

/// Catalog list.
#[component]
pub fn ProductsPanel(
    products: Arc<Vec<ProductListItem>>,
    cart: RwSignal<Cart<'static>>,
    status_message: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <ul class="product-list" id="prod-list">
            {products
                .iter()
                .cloned()
                .map(|item| {
                    view! {
                        <ProductRow item=item cart=cart status_message=status_message />
                    }
                })
                .collect_view()}
        </ul>
    }
}
