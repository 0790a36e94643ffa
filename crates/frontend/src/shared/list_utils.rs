/// List helpers shared by the listing views (search input, cell formatting)
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Shorten long cell text with a trailing ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() > max_length {
        let prefix: String = text.chars().take(max_length).collect();
        format!("{prefix}...")
    } else {
        text.to_string()
    }
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Callback to update the filter value
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local state for the input (before debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Replacing the stored timeout drops and cancels the previous one
        let timeout = Timeout::new(300, move || {
            on_change.run(new_value.clone());
        });
        debounce.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_text("The Essence of Elegance", 10), "The Essenc...");
    }

    #[test]
    fn test_truncate_short_text() {
        assert_eq!(truncate_text("Mug", 10), "Mug");
        assert_eq!(truncate_text("Exactly ten", 11), "Exactly ten");
    }
}
