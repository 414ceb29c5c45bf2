use leptos::*;

use crate::components::ItemSubmissionForm;

/// Page shell around the item submission form.
#[component]
pub fn SubmitPage() -> impl IntoView {
    view! {
        <div class="container mx-auto py-8 px-4 max-w-xl">
            <h1 class="text-3xl font-bold mb-8">"Submit an Item"</h1>
            <ItemSubmissionForm/>
        </div>
    }
}
