use contracts::host::notifications::NotificationOptions;
use contracts::shared::Severity;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Flex, FlexGap};

use crate::components::ui::{Button, Input};
use crate::host;
use crate::shared::connection::ConnectionTracker;
use crate::shared::event_log::EventLog;

const TOP_ACCOUNTS_FETCH_XML: &str = r#"<fetch top="10">
  <entity name="account">
    <attribute name="name" />
    <attribute name="accountid" />
    <attribute name="emailaddress1" />
    <attribute name="telephone1" />
    <order attribute="name" />
  </entity>
</fetch>"#;

/// Toast helper for this demo; a failing toast only reaches the console.
async fn toast(title: &str, body: &str, kind: Severity) {
    let options = NotificationOptions::new(title, body, kind);
    if let Err(e) = host::toolbox::show_notification(&options).await {
        log::error!("Error showing notification: {e}");
    }
}

fn field<'v>(record: &'v serde_json::Value, key: &str) -> &'v str {
    record.get(key).and_then(|v| v.as_str()).unwrap_or("N/A")
}

/// Query, CRUD and metadata demos against the data-platform surface.
/// Every action needs an active connection; update/delete additionally
/// need the id of a record created earlier in the session.
#[component]
pub fn DataverseDemo() -> impl IntoView {
    let tracker =
        use_context::<ConnectionTracker>().expect("ConnectionTracker not found in context");
    let log = use_context::<EventLog>().expect("EventLog not found in context");

    let account_name = RwSignal::new(String::from("Sample Account"));
    let created_account_id = RwSignal::new(None::<String>);
    let query_output = RwSignal::new(String::new());
    let crud_output = RwSignal::new(String::new());
    let metadata_output = RwSignal::new(String::new());

    let query_accounts = Callback::new(move |_: leptos::ev::MouseEvent| {
        if tracker.connection.get_untracked().is_none() {
            spawn_local(toast(
                "No Connection",
                "Please connect to a Dataverse environment",
                Severity::Warning,
            ));
            return;
        }
        query_output.set("Querying accounts...\n".to_string());
        spawn_local(async move {
            match host::dataverse::fetch_xml_query(TOP_ACCOUNTS_FETCH_XML).await {
                Ok(result) => {
                    let mut output = format!("Found {} account(s):\n\n", result.value.len());
                    for (index, account) in result.value.iter().enumerate() {
                        output.push_str(&format!("{}. {}\n", index + 1, field(account, "name")));
                        output.push_str(&format!("   ID: {}\n", field(account, "accountid")));
                        if let Some(email) = account.get("emailaddress1").and_then(|v| v.as_str()) {
                            output.push_str(&format!("   Email: {email}\n"));
                        }
                        if let Some(phone) = account.get("telephone1").and_then(|v| v.as_str()) {
                            output.push_str(&format!("   Phone: {phone}\n"));
                        }
                        output.push('\n');
                    }
                    query_output.set(output);
                    log.append(
                        format!("Queried {} accounts", result.value.len()),
                        Severity::Success,
                    );
                }
                Err(e) => {
                    query_output.set(format!("Error: {e}"));
                    log.append(format!("Error querying accounts: {e}"), Severity::Error);
                }
            }
        });
    });

    let create_account = Callback::new(move |_: leptos::ev::MouseEvent| {
        if tracker.connection.get_untracked().is_none() {
            spawn_local(toast(
                "No Connection",
                "Please connect to a Dataverse environment",
                Severity::Warning,
            ));
            return;
        }
        crud_output.set("Creating account...\n".to_string());
        let name = account_name.get_untracked();
        spawn_local(async move {
            let payload = serde_json::json!({
                "name": name,
                "emailaddress1": "sample@example.com",
                "telephone1": "555-0100",
                "description": "Created by Leptos Sample Tool",
            });
            match host::dataverse::create_record("account", &payload).await {
                Ok(result) => {
                    created_account_id.set(Some(result.id.clone()));
                    crud_output.set(format!(
                        "Account created successfully!\n\nID: {}\nName: {}\n",
                        result.id, name
                    ));
                    let body = format!("Account \"{name}\" created successfully");
                    toast("Account Created", &body, Severity::Success).await;
                    log.append(format!("Account created: {}", result.id), Severity::Success);
                }
                Err(e) => {
                    crud_output.set(format!("Error: {e}"));
                    log.append(format!("Error creating account: {e}"), Severity::Error);
                }
            }
        });
    });

    let update_account = Callback::new(move |_: leptos::ev::MouseEvent| {
        let Some(id) = created_account_id.get_untracked() else {
            spawn_local(toast(
                "No Account",
                "Please create an account first",
                Severity::Warning,
            ));
            return;
        };
        crud_output.set("Updating account...\n".to_string());
        spawn_local(async move {
            let payload = serde_json::json!({
                "description": format!(
                    "Updated by Leptos Sample Tool at {}",
                    chrono::Local::now().to_rfc3339()
                ),
                "telephone1": "555-0200",
            });
            match host::dataverse::update_record("account", &id, &payload).await {
                Ok(()) => {
                    crud_output.set(format!(
                        "Account updated successfully!\n\nID: {id}\nUpdated fields: description, telephone1\n"
                    ));
                    toast("Account Updated", "Account updated successfully", Severity::Success)
                        .await;
                    log.append(format!("Account updated: {id}"), Severity::Success);
                }
                Err(e) => {
                    crud_output.set(format!("Error: {e}"));
                    log.append(format!("Error updating account: {e}"), Severity::Error);
                }
            }
        });
    });

    let delete_account = Callback::new(move |_: leptos::ev::MouseEvent| {
        let Some(id) = created_account_id.get_untracked() else {
            spawn_local(toast(
                "No Account",
                "Please create an account first",
                Severity::Warning,
            ));
            return;
        };
        crud_output.set("Deleting account...\n".to_string());
        spawn_local(async move {
            match host::dataverse::delete_record("account", &id).await {
                Ok(()) => {
                    crud_output.set(format!("Account deleted successfully!\n\nID: {id}\n"));
                    toast("Account Deleted", "Account deleted successfully", Severity::Success)
                        .await;
                    log.append(format!("Account deleted: {id}"), Severity::Success);
                    created_account_id.set(None);
                }
                Err(e) => {
                    crud_output.set(format!("Error: {e}"));
                    log.append(format!("Error deleting account: {e}"), Severity::Error);
                }
            }
        });
    });

    let get_account_metadata = Callback::new(move |_: leptos::ev::MouseEvent| {
        if tracker.connection.get_untracked().is_none() {
            spawn_local(toast(
                "No Connection",
                "Please connect to a Dataverse environment",
                Severity::Warning,
            ));
            return;
        }
        metadata_output.set("Retrieving metadata...\n".to_string());
        spawn_local(async move {
            match host::dataverse::get_entity_metadata("account", true).await {
                Ok(metadata) => {
                    let mut output = String::from("Account Entity Metadata:\n\n");
                    output.push_str(&format!("Logical Name: {}\n", metadata.logical_name));
                    output.push_str(&format!(
                        "Metadata ID: {}\n",
                        metadata.metadata_id.as_deref().unwrap_or("N/A")
                    ));
                    output.push_str(&format!("Display Name: {}\n", metadata.label()));
                    let attributes = metadata.attributes.clone().unwrap_or_default();
                    output.push_str(&format!("Attributes: {}\n", attributes.len()));
                    if !attributes.is_empty() {
                        output.push_str("\nSample Attributes:\n");
                        for attribute in attributes.iter().take(5) {
                            output.push_str(&format!(
                                "  - {} ({})\n",
                                attribute.logical_name,
                                attribute.attribute_type.as_deref().unwrap_or("unknown")
                            ));
                        }
                    }
                    metadata_output.set(output);
                    log.append("Account metadata retrieved", Severity::Success);
                }
                Err(e) => {
                    metadata_output.set(format!("Error: {e}"));
                    log.append(format!("Error getting metadata: {e}"), Severity::Error);
                }
            }
        });
    });

    view! {
        <div class="card">
            <h2>"Dataverse API Examples"</h2>

            <div class="example-group">
                <h3>"Query Records"</h3>
                <Button variant="primary".to_string() on_click=query_accounts>
                    "Query Top 10 Accounts"
                </Button>
                <div class="output">{move || query_output.get()}</div>
            </div>

            <div class="example-group">
                <h3>"CRUD Operations"</h3>
                <Input
                    label="Account Name:".to_string()
                    value=account_name
                    placeholder="Enter account name".to_string()
                    id="account-name".to_string()
                />
                <Flex gap=FlexGap::Small>
                    <Button variant="primary".to_string() on_click=create_account>
                        "Create Account"
                    </Button>
                    <Button
                        on_click=update_account
                        disabled=Signal::derive(move || created_account_id.get().is_none())
                    >
                        "Update Account"
                    </Button>
                    <Button
                        variant="error".to_string()
                        on_click=delete_account
                        disabled=Signal::derive(move || created_account_id.get().is_none())
                    >
                        "Delete Account"
                    </Button>
                </Flex>
                <div class="output">{move || crud_output.get()}</div>
            </div>

            <div class="example-group">
                <h3>"Metadata"</h3>
                <Button on_click=get_account_metadata>
                    "Get Account Metadata"
                </Button>
                <div class="output">{move || metadata_output.get()}</div>
            </div>
        </div>
    }
}
