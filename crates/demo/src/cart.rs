use leptos::{logging::log, prelude::*};

use shopfront::{cart::Cart, pricing::format_price};

/// Heading shown above the cart, e.g. `Total: $109.98`.
pub(crate) fn total_heading(cart: &Cart<'_>) -> String {
    format!("Total: {}", format_price(&cart.total()))
}

/// Browser console lines describing an order.
pub(crate) fn order_log_lines(cart: &Cart<'_>) -> Vec<String> {
    let placed = cart.order();

    let mut lines = Vec::with_capacity(placed.items.len() + 1);

    lines.push(format!(
        "Ordering {} item(s) for {}...",
        placed.items.len(),
        format_price(&placed.total)
    ));

    lines.extend(
        placed
            .items
            .iter()
            .map(|item| format!("{} {}", item.title, format_price(item.price()))),
    );

    lines
}

#[component]
fn CartLines(cart: RwSignal<Cart<'static>>) -> impl IntoView {
    move || {
        let lines: Vec<(String, String)> = cart.with(|cart| {
            cart.items()
                .iter()
                .map(|item| (item.title.clone(), format_price(item.price())))
                .collect()
        });

        if lines.is_empty() {
            view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any()
        } else {
            view! {
                <ul class="cart-lines">
                    {lines
                        .into_iter()
                        .map(|(title, price)| {
                            view! {
                                <li class="cart-line">
                                    <span>{title}</span>
                                    <span>{price}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any()
        }
    }
}

/// Cart total, contents and order button.
#[component]
pub fn CartPanel(
    cart: RwSignal<Cart<'static>>,
    status_message: RwSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <section class="cart">
            <h2>{move || cart.with(total_heading)}</h2>
            <CartLines cart=cart />
            <button
                type="button"
                on:click=move |_| {
                    for line in cart.with_untracked(order_log_lines) {
                        log!("{line}");
                    }
                }
            >
                "Order Now!"
            </button>
            <p class="cart-status" role="status" aria-live="polite">
                {move || status_message.get().unwrap_or_default()}
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use shopfront::catalog::Catalog;

    use super::*;

    #[test]
    fn total_heading_for_empty_cart_is_zero() -> TestResult {
        let catalog = Catalog::demo()?;
        let cart = Cart::new(catalog.currency());

        assert_eq!(total_heading(&cart), "Total: $0.00");

        Ok(())
    }

    #[test]
    fn total_heading_tracks_added_items() -> TestResult {
        let catalog = Catalog::demo()?;
        let mut cart = Cart::new(catalog.currency());

        cart.add_item(catalog.get("pillow")?.clone())?;
        cart.add_item(catalog.get("carpet")?.clone())?;

        assert_eq!(total_heading(&cart), "Total: $109.98");

        Ok(())
    }

    #[test]
    fn order_log_lines_list_each_item() -> TestResult {
        let catalog = Catalog::demo()?;
        let mut cart = Cart::new(catalog.currency());

        cart.add_item(catalog.get("pillow")?.clone())?;
        cart.add_item(catalog.get("pillow")?.clone())?;

        assert_eq!(
            order_log_lines(&cart),
            [
                "Ordering 2 item(s) for $39.98...",
                "A Pillow $19.99",
                "A Pillow $19.99",
            ]
        );

        Ok(())
    }
}
