use leptos::prelude::*;

use crate::components::ui::Button;
use crate::shared::event_log::EventLog;

/// Newest-first list of operation outcomes with a clear action.
#[component]
pub fn EventLogPanel() -> impl IntoView {
    let log = use_context::<EventLog>().expect("EventLog not found in context");

    view! {
        <div class="card">
            <h2>"Event Log"</h2>
            <Button variant="secondary".to_string() on_click=Callback::new(move |_| log.clear())>
                "Clear Log"
            </Button>
            <div class="log">
                {move || {
                    let records = log.records().get();
                    if records.is_empty() {
                        view! { <div class="log-empty">"No logs yet..."</div> }.into_any()
                    } else {
                        records
                            .into_iter()
                            .map(|record| {
                                let entry_class = format!("log-entry {}", record.severity.as_str());
                                let timestamp = record.timestamp.format("[%H:%M:%S]").to_string();
                                view! {
                                    <div class=entry_class>
                                        <span class="log-timestamp">{timestamp}</span>
                                        <span>{record.message}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
