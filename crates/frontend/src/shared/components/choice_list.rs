use leptos::prelude::*;

/// Checkbox group for one filter facet. Emits the full selection after every
/// toggle; the caller decides what an empty selection means.
#[component]
pub fn ChoiceList(
    /// Group title
    #[prop(into)]
    title: String,

    /// Available choices
    #[prop(into)]
    choices: Signal<Vec<String>>,

    /// Currently selected values
    #[prop(into)]
    selected: Signal<Vec<String>>,

    /// Callback with the new selection after a toggle
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="choice-list">
            <div class="choice-list__title">{title}</div>
            {move || {
                choices
                    .get()
                    .into_iter()
                    .map(|choice| {
                        let value = choice.clone();
                        let is_checked = selected.get().contains(&choice);
                        view! {
                            <label class="choice-list__option">
                                <input
                                    type="checkbox"
                                    prop:checked=is_checked
                                    on:change={
                                        let value = value.clone();
                                        move |ev| {
                                            let checked = event_target_checked(&ev);
                                            let mut next = selected.get_untracked();
                                            if checked {
                                                if !next.contains(&value) {
                                                    next.push(value.clone());
                                                }
                                            } else {
                                                next.retain(|v| v != &value);
                                            }
                                            on_change.run(next);
                                        }
                                    }
                                />
                                <span>{choice.clone()}</span>
                            </label>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
