//! Menu Catalog Component
//!
//! Product buttons grouped by section. Clicking one adds it to the cart.

use leptos::prelude::*;

use crate::money::format_price;

/// Sections of (product name, price in whole pesos)
pub const MENU: &[(&str, &[(&str, u64)])] = &[
    (
        "Platos",
        &[
            ("Bandeja paisa", 28000),
            ("Ajiaco", 22000),
            ("Hamburguesa", 18000),
            ("Pizza personal", 16000),
            ("Arepa rellena", 9000),
        ],
    ),
    (
        "Bebidas",
        &[
            ("Limonada", 6000),
            ("Jugo natural", 7000),
            ("Gaseosa", 4500),
            ("Café", 3000),
        ],
    ),
    ("Postres", &[("Tres leches", 8000), ("Brownie", 7500)]),
];

#[component]
pub fn MenuCatalog(
    separator: char,
    #[prop(into)] on_add: Callback<(&'static str, u64)>,
) -> impl IntoView {
    view! {
        <section class="menu">
            {MENU.iter().map(|(section, products)| view! {
                <div class="menu-seccion">
                    <h2>{*section}</h2>
                    <div class="menu-productos">
                        {products.iter().map(|(name, price)| {
                            let (name, price) = (*name, *price);
                            view! {
                                <button
                                    type="button"
                                    class="producto"
                                    on:click=move |_| on_add.run((name, price))
                                >
                                    <span class="producto-nombre">{name}</span>
                                    <span class="producto-precio">{format_price(price, separator)}</span>
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
            }).collect_view()}
        </section>
    }
}
