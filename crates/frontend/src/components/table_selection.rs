use leptos::prelude::*;
use thaw::{Flex, FlexGap, Spinner};

use crate::components::ui::Select;
use crate::shared::view_model::AppViewModel;

/// Table picker fed by the entity catalog cached on the view model.
#[component]
pub fn TableSelection() -> impl IntoView {
    let vm = use_context::<AppViewModel>().expect("AppViewModel not found in context");
    let selected = RwSignal::new(String::new());

    let table_names = Signal::derive(move || {
        vm.metadata
            .get()
            .map(|collection| {
                collection
                    .value
                    .into_iter()
                    .map(|entity| entity.logical_name)
                    .collect()
            })
            .unwrap_or_default()
    });

    view! {
        <div class="card">
            {move || {
                if !vm.metadata_loaded.get() {
                    view! {
                        <Flex gap=FlexGap::Small>
                            <Spinner />
                            <span class="loading">"Loading Metadata"</span>
                        </Flex>
                    }
                        .into_any()
                } else {
                    view! {
                        <Select
                            label="Select a table".to_string()
                            placeholder="Select a table".to_string()
                            value=selected
                            options=table_names
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
