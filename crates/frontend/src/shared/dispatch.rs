use contracts::host::events;
use wasm_bindgen::prelude::*;

use crate::host;
use crate::shared::connection::ConnectionTracker;

/// Route one host event to its UI reaction.
///
/// Connection lifecycle events each trigger a fresh connection fetch, with
/// no payload inspection and no debouncing. Terminal events are delivered
/// on the same subscription but belong to dedicated terminal surfaces.
/// Unrecognized names are ignored so newer hosts can emit events this tool
/// does not know about yet.
pub fn dispatch<F: Fn()>(event: &str, refresh_connection: F) {
    match event {
        events::CONNECTION_CREATED | events::CONNECTION_UPDATED | events::CONNECTION_DELETED => {
            refresh_connection()
        }
        events::TERMINAL_OUTPUT | events::TERMINAL_COMMAND_COMPLETED | events::TERMINAL_ERROR => {}
        _ => {}
    }
}

/// Register the single host event subscription for this page.
///
/// `toolboxAPI.events.on` has no matching unsubscribe, so the handler
/// closure is leaked and stays registered for the lifetime of the page.
/// Call once, from the root component.
pub fn wire_host_events(tracker: ConnectionTracker) {
    let handler = Closure::wrap(Box::new(move |_event: JsValue, payload: JsValue| {
        let Some(name) = host::toolbox::event_name(&payload) else {
            log::warn!("Ignoring host event payload without an event name");
            return;
        };
        dispatch(&name, || tracker.refresh());
    }) as Box<dyn FnMut(JsValue, JsValue)>);

    host::toolbox::subscribe_to_events(&handler);
    handler.forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn refresh_count(event: &str) -> u32 {
        let count = Cell::new(0);
        dispatch(event, || count.set(count.get() + 1));
        count.get()
    }

    #[test]
    fn test_connection_events_trigger_one_refresh_each() {
        assert_eq!(refresh_count("connection:created"), 1);
        assert_eq!(refresh_count("connection:updated"), 1);
        assert_eq!(refresh_count("connection:deleted"), 1);
    }

    #[test]
    fn test_terminal_events_are_not_handled_here() {
        assert_eq!(refresh_count("terminal:output"), 0);
        assert_eq!(refresh_count("terminal:command:completed"), 0);
        assert_eq!(refresh_count("terminal:error"), 0);
    }

    #[test]
    fn test_unrecognized_events_are_ignored() {
        assert_eq!(refresh_count("foo:bar"), 0);
        assert_eq!(refresh_count(""), 0);
        assert_eq!(refresh_count("connection:renamed"), 0);
    }
}
