use leptos::prelude::*;

/// Button with the tool's `btn` class scheme.
#[component]
pub fn Button(
    /// Visual variant: "primary", "secondary", "success", "info",
    /// "warning" or "error"; plain `btn` styling when omitted.
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref() {
        Some("primary") => "btn-primary",
        Some("secondary") => "btn-secondary",
        Some("success") => "btn-success",
        Some("info") => "btn-info",
        Some("warning") => "btn-warning",
        Some("error") => "btn-error",
        _ => "",
    };

    view! {
        <button
            type="button"
            class=move || format!("btn {}", variant_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
