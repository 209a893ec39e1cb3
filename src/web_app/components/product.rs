// web_app/components/product.rs - Product display components
//
// - ProductCard: one showcase entry (image + name)
// - ProductShowcase: the grid, in declaration order

use leptos::prelude::*;

use crate::web_app::model::ProductListing;

/// Product card for the showcase grid
///
/// Pure function of the listing; no state, no handlers.
#[component]
pub fn ProductCard(item: ProductListing) -> impl IntoView {
    view! {
        <div class="bg-gray-100 dark:bg-gray-700 p-4 rounded shadow transition-transform duration-200 hover:scale-[1.02]">
            <img
                src=item.image_path
                alt=item.display_name
                class="w-full h-48 object-cover rounded mb-4"
            />
            <h4 class="text-xl font-semibold">{item.display_name}</h4>
        </div>
    }
}

/// Grid of product cards
#[component]
pub fn ProductShowcase(items: Vec<ProductListing>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-3 gap-6 max-w-6xl mx-auto">
            {items
                .into_iter()
                .map(|item| view! { <ProductCard item=item /> })
                .collect_view()}
        </div>
    }
}
