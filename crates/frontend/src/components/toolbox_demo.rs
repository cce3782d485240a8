use chrono::Local;
use contracts::host::notifications::NotificationOptions;
use contracts::shared::Severity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Flex, FlexGap};

use crate::components::ui::Button;
use crate::host;
use crate::shared::event_log::EventLog;

/// Fire a host toast and record the outcome in the event log.
async fn notify(log: EventLog, title: &str, body: &str, kind: Severity) {
    let options = NotificationOptions::new(title, body, kind);
    match host::toolbox::show_notification(&options).await {
        Ok(()) => log.append(format!("Notification shown: {title} - {body}"), kind),
        Err(e) => log.append(format!("Error showing notification: {e}"), Severity::Error),
    }
}

/// Buttons exercising the generic Tool Box utility surface: shell toasts,
/// clipboard, theme lookup and the save-file dialog.
#[component]
pub fn ToolboxDemo() -> impl IntoView {
    let log = use_context::<EventLog>().expect("EventLog not found in context");

    let show = move |title: &'static str, body: &'static str, kind: Severity| {
        Callback::new(move |_: leptos::ev::MouseEvent| {
            spawn_local(async move { notify(log, title, body, kind).await })
        })
    };

    let copy_to_clipboard = Callback::new(move |_| {
        spawn_local(async move {
            let data = serde_json::json!({
                "timestamp": Local::now().to_rfc3339(),
                "message": "This data was copied from the Leptos Sample Tool",
            });
            let text = serde_json::to_string_pretty(&data).unwrap_or_default();
            match host::toolbox::copy_to_clipboard(&text).await {
                Ok(()) => {
                    notify(log, "Copied!", "Data copied to clipboard", Severity::Success).await
                }
                Err(e) => log.append(format!("Error copying to clipboard: {e}"), Severity::Error),
            }
        });
    });

    let show_current_theme = Callback::new(move |_| {
        spawn_local(async move {
            match host::toolbox::get_current_theme().await {
                Ok(theme) => {
                    let body = format!("The current theme is: {theme}");
                    notify(log, "Current Theme", &body, Severity::Info).await;
                    log.append(format!("Current theme: {theme}"), Severity::Info);
                }
                Err(e) => log.append(format!("Error getting theme: {e}"), Severity::Error),
            }
        });
    });

    let save_data_to_file = Callback::new(move |_| {
        spawn_local(async move {
            let data = serde_json::json!({
                "timestamp": Local::now().to_rfc3339(),
                "message": "Export from Leptos Sample Tool",
            });
            let content = serde_json::to_string_pretty(&data).unwrap_or_default();
            match host::toolbox::save_file("leptos-export.json", &content).await {
                Ok(Some(path)) => {
                    let body = format!("File saved to: {path}");
                    notify(log, "File Saved", &body, Severity::Success).await;
                    log.append(body, Severity::Success);
                }
                Ok(None) => log.append("File save cancelled", Severity::Info),
                Err(e) => log.append(format!("Error saving file: {e}"), Severity::Error),
            }
        });
    });

    view! {
        <div class="card">
            <h2>"ToolBox API Examples"</h2>

            <div class="example-group">
                <h3>"Notifications"</h3>
                <Flex gap=FlexGap::Small>
                    <Button
                        variant="success".to_string()
                        on_click=show("Success!", "Operation completed successfully", Severity::Success)
                    >
                        "Show Success"
                    </Button>
                    <Button
                        variant="info".to_string()
                        on_click=show("Information", "This is an informational message", Severity::Info)
                    >
                        "Show Info"
                    </Button>
                    <Button
                        variant="warning".to_string()
                        on_click=show("Warning", "Please review this warning", Severity::Warning)
                    >
                        "Show Warning"
                    </Button>
                    <Button
                        variant="error".to_string()
                        on_click=show("Error", "An error has occurred", Severity::Error)
                    >
                        "Show Error"
                    </Button>
                </Flex>
            </div>

            <div class="example-group">
                <h3>"Utilities"</h3>
                <Flex gap=FlexGap::Small>
                    <Button on_click=copy_to_clipboard>"Copy to Clipboard"</Button>
                    <Button on_click=show_current_theme>"Get Theme"</Button>
                    <Button on_click=save_data_to_file>"Save File"</Button>
                </Flex>
            </div>
        </div>
    }
}
