use leptos::prelude::*;

/// Native select with label and placeholder row. The option value doubles
/// as its display text.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Placeholder shown as the disabled empty-value row
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Selected value; empty string means nothing selected yet
    #[prop(into)]
    value: RwSignal<String>,
    /// Option values
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {move || placeholder.get().map(|p| view! {
                    <option value="" disabled=true selected=move || value.get().is_empty()>
                        {p}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|name| name.clone()
                    children=move |name: String| {
                        let option_value = name.clone();
                        let is_selected = move || value.get() == option_value;
                        view! {
                            <option value=name.clone() selected=is_selected>
                                {name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
