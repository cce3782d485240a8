use contracts::shared::Severity;
use leptos::prelude::*;

use crate::components::connection_status::ConnectionStatus;
use crate::components::dataverse_demo::DataverseDemo;
use crate::components::event_log_panel::EventLogPanel;
use crate::components::table_selection::TableSelection;
use crate::components::toolbox_demo::ToolboxDemo;
use crate::shared::connection::ConnectionTracker;
use crate::shared::dispatch::wire_host_events;
use crate::shared::event_log::EventLog;
use crate::shared::view_model::AppViewModel;

#[component]
pub fn App() -> impl IntoView {
    let log = EventLog::new();
    let tracker = ConnectionTracker::new();
    let vm = AppViewModel::new();

    // Shared stores for the whole page via context.
    provide_context(log);
    provide_context(tracker);
    provide_context(vm);

    // Single host subscription for the lifetime of the page, then the
    // initial connection check and the one-shot metadata load.
    wire_host_events(tracker);
    tracker.refresh();
    vm.ensure_metadata();

    log.append("Leptos Sample Tool initialized", Severity::Success);

    view! {
        <header class="header">
            <h1>"Leptos Sample Tool"</h1>
            <p class="subtitle">
                "A complete example of building Power Platform Tool Box tools with Rust & Leptos"
            </p>
        </header>

        <TableSelection />

        <ConnectionStatus />

        <ToolboxDemo />

        <DataverseDemo />

        <EventLogPanel />
    }
}
