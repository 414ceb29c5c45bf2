use leptos::*;
use leptos_meta::*;

use crate::pages::{ItemsPage, SubmitPage};

/// Which of the two pages is showing.
#[derive(Clone, Copy, PartialEq)]
enum Page {
    Listing,
    Submit,
}

/// The root component of the application
#[component]
pub fn App() -> impl IntoView {
    // Provides contexts for meta tags (like <Title>)
    provide_meta_context();

    let page = create_rw_signal(Page::Listing);

    view! {
        <Title text="Auction House"/>

        <nav class="bg-white shadow px-8 py-4 flex items-center space-x-6">
            <span class="text-xl font-bold text-gray-800">"Auction House"</span>
            <button class="text-sm text-gray-600 hover:text-gray-900 font-medium"
                on:click=move |_| page.set(Page::Listing)>
                Browse
            </button>
            <button class="text-sm text-gray-600 hover:text-gray-900 font-medium"
                on:click=move |_| page.set(Page::Submit)>
                "Sell an item"
            </button>
        </nav>

        <main class="bg-gray-100 min-h-screen">
            <Show
                when=move || page.get() == Page::Submit
                fallback=|| view! { <ItemsPage/> }
            >
                <SubmitPage/>
            </Show>
        </main>
    }
}
