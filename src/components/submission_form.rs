use leptos::*;
use web_sys::HtmlInputElement;

use crate::api::{self, ApiError, SubmissionPayload};
use crate::image::read_as_data_url;

/// All current values of the submission form. Numeric fields are kept as
/// numbers even though the inputs deliver text.
#[derive(Clone, Default)]
pub struct FormState {
    pub title: String,
    pub description: String,
    pub starting_price: f64,
    pub end_time: String,
    pub min_increase: f64,
    pub image: Option<web_sys::File>,
}

impl FormState {
    fn to_payload(&self, image: Option<String>) -> SubmissionPayload {
        SubmissionPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            starting_price: self.starting_price,
            end_time: self.end_time.clone(),
            min_increase: self.min_increase,
            image,
        }
    }
}

/// Number inputs hand us text; empty or unparseable text counts as zero, the
/// same as coercing with `Number(value)`.
fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Encode the selected image (if any), then POST the payload.
async fn submit(state: FormState) -> Result<serde_json::Value, ApiError> {
    let image = match &state.image {
        Some(file) => Some(read_as_data_url(file).await?),
        None => None,
    };

    let payload = state.to_payload(image);
    log::info!("Submitting item: {payload:?}");

    api::submit_item(&payload).await
}

fn notify_submission_failed() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Submission failed. Please try again.");
    }
}

/// Form for putting a new item up for auction.
#[component]
pub fn ItemSubmissionForm() -> impl IntoView {
    let form = create_rw_signal(FormState::default());

    // One fire-and-forget attempt per press of the submit button. Errors stop
    // at this boundary: log, notify once, leave the form contents alone.
    let submit_action = create_action(move |state: &FormState| {
        let state = state.clone();
        async move {
            match submit(state).await {
                Ok(created) => {
                    log::info!("Successfully submitted item: {created:?}");
                    form.set(FormState::default());
                }
                Err(err) => {
                    log::error!("Error submitting item: {err}");
                    notify_submission_failed();
                }
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_action.dispatch(form.get());
    };

    let on_image_change = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            form.update(|state| state.image = Some(file));
        }
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label class="block mb-2 text-sm font-medium" for="title">Item Name</label>
                <input class="shadow-sm border rounded-lg w-full py-2 px-3 text-gray-700"
                    type="text" id="title" placeholder="Enter item name" required=true
                    on:input=move |ev| form.update(|state| state.title = event_target_value(&ev))
                    prop:value=move || form.with(|state| state.title.clone()) />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium" for="description">Description</label>
                <textarea class="shadow-sm border rounded-lg w-full py-2 px-3 text-gray-700"
                    id="description" placeholder="Enter item description" required=true
                    on:input=move |ev| form.update(|state| state.description = event_target_value(&ev))
                    prop:value=move || form.with(|state| state.description.clone()) />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium" for="starting_price">Starting Bid Price</label>
                <input class="shadow-sm border rounded-lg w-full py-2 px-3 text-gray-700"
                    type="number" id="starting_price" placeholder="Enter starting bid price"
                    min="0" step="0.01" required=true
                    on:input=move |ev| form.update(|state| {
                        state.starting_price = parse_amount(&event_target_value(&ev))
                    })
                    prop:value=move || form.with(|state| state.starting_price.to_string()) />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium" for="end_time">"End Date & Time"</label>
                <input class="shadow-sm border rounded-lg w-full py-2 px-3 text-gray-700"
                    type="datetime-local" id="end_time" required=true
                    on:input=move |ev| form.update(|state| state.end_time = event_target_value(&ev))
                    prop:value=move || form.with(|state| state.end_time.clone()) />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium" for="min_increase">
                    "Minimum Bid Increase (Optional)"
                </label>
                <input class="shadow-sm border rounded-lg w-full py-2 px-3 text-gray-700"
                    type="number" id="min_increase" placeholder="Enter minimum bid increment"
                    min="0" step="0.01"
                    on:input=move |ev| form.update(|state| {
                        state.min_increase = parse_amount(&event_target_value(&ev))
                    })
                    prop:value=move || form.with(|state| state.min_increase.to_string()) />
            </div>
            <div>
                <label class="block mb-2 text-sm font-medium" for="image">Upload Image</label>
                <input class="block w-full text-sm text-gray-700"
                    type="file" id="image" accept="image/*"
                    on:change=on_image_change />
            </div>
            <button class="bg-gray-800 hover:bg-gray-500 text-white font-bold py-2 px-6 rounded-full transition-colors duration-300"
                type="submit">
                "Submit Item"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_inputs_are_stored_as_numbers() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn invalid_numeric_input_counts_as_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn default_state_matches_reset_values() {
        let state = FormState::default();
        assert_eq!(state.title, "");
        assert_eq!(state.description, "");
        assert_eq!(state.starting_price, 0.0);
        assert_eq!(state.end_time, "");
        assert_eq!(state.min_increase, 0.0);
        assert!(state.image.is_none());
    }

    #[test]
    fn payload_carries_all_fields() {
        let state = FormState {
            title: "Teapot".into(),
            description: "Victorian, slight chip".into(),
            starting_price: 25.0,
            end_time: "2026-09-01T18:00".into(),
            min_increase: 1.5,
            image: None,
        };
        let payload = state.to_payload(Some("data:image/png;base64,AAAA".into()));
        assert_eq!(payload.title, "Teapot");
        assert_eq!(payload.starting_price, 25.0);
        assert_eq!(payload.end_time, "2026-09-01T18:00");
        assert_eq!(payload.min_increase, 1.5);
        assert_eq!(payload.image.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn payload_without_image_is_null() {
        let payload = FormState::default().to_payload(None);
        assert_eq!(payload.image, None);
    }
}
