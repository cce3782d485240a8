use leptos::prelude::*;
use thaw::{Flex, FlexGap, Spinner};

use crate::shared::connection::ConnectionTracker;

/// Connection card: spinner while the first check is in flight, a warning
/// box when the host has no active connection, the connection details
/// otherwise. A failed check renders the same as "no connection".
#[component]
#[allow(non_snake_case)]
pub fn ConnectionStatus() -> impl IntoView {
    let tracker =
        use_context::<ConnectionTracker>().expect("ConnectionTracker not found in context");

    view! {
        <div class="card">
            <h2>"Connection Status"</h2>
            {move || {
                if tracker.is_loading.get() {
                    view! {
                        <div class="info-box">
                            <Flex gap=FlexGap::Small>
                                <Spinner />
                                <span class="loading">"Checking connection..."</span>
                            </Flex>
                        </div>
                    }
                        .into_any()
                } else if let Some(connection) = tracker.connection.get() {
                    let env_class = format!("env-badge {}", connection.environment.to_lowercase());
                    view! {
                        <div class="info-box success">
                            <div class="connection-details">
                                <div class="connection-item">
                                    <strong>"Name:"</strong>
                                    <span>{connection.name}</span>
                                </div>
                                <div class="connection-item">
                                    <strong>"URL:"</strong>
                                    <span>{connection.url}</span>
                                </div>
                                <div class="connection-item">
                                    <strong>"Environment:"</strong>
                                    <span class=env_class>{connection.environment}</span>
                                </div>
                                <div class="connection-item">
                                    <strong>"ID:"</strong>
                                    <span>{connection.id}</span>
                                </div>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="info-box warning">
                            <p>
                                <strong>"No active connection"</strong>
                                <br />
                                "Please connect to a Dataverse environment to use this tool."
                            </p>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
