pub mod connection;
pub mod dispatch;
pub mod event_log;
pub mod view_model;
