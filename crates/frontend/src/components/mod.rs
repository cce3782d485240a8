pub mod ui;

pub mod connection_status;
pub mod dataverse_demo;
pub mod event_log_panel;
pub mod table_selection;
pub mod toolbox_demo;
