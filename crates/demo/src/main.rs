//! Leptos Shopfront Demo Application

use std::sync::Arc;

use leptos::prelude::*;

use shopfront::{cart::Cart, catalog::Catalog};

mod cart;
mod products;

/// Main demo app shell.
#[component]
fn App() -> impl IntoView {
    match Catalog::demo() {
        Ok(catalog) => {
            let products = Arc::new(products::list_items(&catalog));
            let cart = RwSignal::new(Cart::new(catalog.currency()));
            let status_message = RwSignal::new(None::<String>);

            view! {
                <main class="shop">
                    <cart::CartPanel cart=cart status_message=status_message />
                    <products::ProductsPanel
                        products=products
                        cart=cart
                        status_message=status_message
                    />
                </main>
            }
            .into_any()
        }
        Err(error) => view! {
            <main class="shop">
                <p class="shop-error">{format!("Failed to load catalog: {error}")}</p>
            </main>
        }
        .into_any(),
    }
}

/// Main browser entry point
fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
