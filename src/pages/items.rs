use leptos::*;

use crate::components::{AuctionItems, ChatWindow};

/// The listing page: a title and two independent widgets, stacked. Each widget
/// handles its own failures.
#[component]
pub fn ItemsPage() -> impl IntoView {
    view! {
        <div class="container mx-auto py-8 px-4">
            <h1 class="text-3xl font-bold mb-8">"Current Auctions"</h1>
            <AuctionItems/>
            <ChatWindow/>
        </div>
    }
}
