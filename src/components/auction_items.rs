use leptos::*;

use crate::api::{self, AuctionItem};

/// List of items currently up for auction, loaded once from the backend.
/// Load failures stay inside this widget.
#[component]
pub fn AuctionItems() -> impl IntoView {
    let items = create_local_resource(|| (), |_| async move { api::fetch_items().await });

    view! {
        <section class="mb-8">
            <h2 class="text-2xl font-semibold text-gray-800 mb-4">"Open Auctions"</h2>
            {move || match items.get() {
                None => view! {
                    <p class="text-gray-500">"Loading auctions..."</p>
                }.into_view(),
                Some(Err(err)) => view! {
                    <p class="text-red-600">{format!("Failed to load auctions: {err}")}</p>
                }.into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class="text-gray-500">"No items up for auction yet."</p>
                }.into_view(),
                Some(Ok(list)) => view! {
                    <ul class="space-y-3">
                        <For
                            each=move || list.clone()
                            key=|item| item.id
                            children=move |item: AuctionItem| view! { <ItemCard item=item/> }
                        />
                    </ul>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn ItemCard(item: AuctionItem) -> impl IntoView {
    view! {
        <li class="bg-white border border-gray-200 rounded-lg shadow-sm p-4">
            <div class="flex justify-between items-baseline mb-2">
                <h3 class="text-lg font-bold text-gray-800">{item.title.clone()}</h3>
                <span class="text-sm text-gray-500">{format!("ends {}", item.end_time)}</span>
            </div>
            {item.image.clone().map(|src| view! {
                <img class="w-32 h-32 object-cover rounded mb-2" src=src alt=item.title.clone()/>
            })}
            <p class="text-gray-700 mb-2">{item.description.clone()}</p>
            <p class="font-semibold text-gray-800">
                {format!("Current bid: {:.2}", item.current_bid())}
            </p>
        </li>
    }
}
