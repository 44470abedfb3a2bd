/*
 * overlay.rs
 *
 * Browser branch. The page equivalent of "write one line and exit":
 * paint the report over the page, once, and leave the page running -
 * there is no process to end and no stderr anyone reads.
 *
 * The pure parts (style table, text composition) compile on every
 * target so native tests cover them; everything touching the DOM is
 * wasm32-only.
 */

use crate::report;

/// Inline styles applied to the overlay element, in application order.
///
/// A full-viewport red sheet; the point is to be impossible to miss.
pub const STYLES: [(&str, &str); 9] = [
    ("display", "block"),
    ("padding", "15px"),
    ("z-index", "999"),
    ("position", "fixed"),
    ("top", "15px"),
    ("bottom", "15px"),
    ("left", "15px"),
    ("right", "15px"),
    ("background-color", "red"),
];

/// The overlay copy: header, blank line, report body.
#[must_use]
pub fn text(body: &str) -> String {
    format!("{}\n\n{}", report::head(), body)
}

#[cfg(target_arch = "wasm32")]
pub(crate) use web::register;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::PromiseRejectionEvent;

    use super::STYLES;
    use crate::report;
    use crate::sync::OneShot;

    /* one overlay per page load, even if both channels fire in one turn */
    static FIRED: OneShot = OneShot::new();

    thread_local! {
        /* keeps the rejection listener alive until the overlay fires */
        static REJECTION_HOOK: RefCell<Option<Closure<dyn FnMut(PromiseRejectionEvent)>>> =
            const { RefCell::new(None) };
    }

    /// Register both page channels: the panic hook for synchronous
    /// failures and an `unhandledrejection` listener for asynchronous
    /// ones. Only called when a window is known to exist.
    pub(crate) fn register() {
        std::panic::set_hook(Box::new(|info| {
            /* a guarded formatter probe panicked; not page-fatal */
            if report::is_rendering() {
                return;
            }
            show_once(&report::panic_text(info));
        }));
        attach_rejection_listener();
    }

    /* the thread-local slot keeps the closure alive until the overlay
     * fires; if the host refuses the listener the closure drops here
     * and rejections stay on the host's default handling */
    fn attach_rejection_listener() {
        let Some(window) = web_sys::window() else { return };
        let hook = Closure::<dyn FnMut(PromiseRejectionEvent)>::new(
            |event: PromiseRejectionEvent| {
                show_once(&reason_text(&event.reason()));
            },
        );
        if window
            .add_event_listener_with_callback("unhandledrejection", hook.as_ref().unchecked_ref())
            .is_ok()
        {
            REJECTION_HOOK.with(|slot| *slot.borrow_mut() = Some(hook));
        }
    }

    /* both channels funnel here; the one-shot decides who gets the page */
    fn show_once(body: &str) {
        if !FIRED.claim() {
            return;
        }
        detach_rejection_hook();
        /* a reporter that cannot paint has nobody left to tell */
        let _ = show(body);
    }

    fn detach_rejection_hook() {
        REJECTION_HOOK.with(|slot| {
            let Some(hook) = slot.borrow_mut().take() else { return };
            let Some(window) = web_sys::window() else { return };
            let _ = window.remove_event_listener_with_callback(
                "unhandledrejection",
                hook.as_ref().unchecked_ref(),
            );
        });
    }

    fn show(body: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or(JsValue::NULL)?;
        let document = window.document().ok_or(JsValue::NULL)?;

        /* <pre> so the report's own line breaks survive */
        let sheet: web_sys::HtmlElement = document.create_element("pre")?.dyn_into()?;
        let style = sheet.style();
        for (property, value) in STYLES {
            style.set_property(property, value)?;
        }
        sheet.set_text_content(Some(&super::text(body)));
        document.body().ok_or(JsValue::NULL)?.append_child(&sheet)?;
        Ok(())
    }

    /* stack if the engine kept one, else "Name: message", else the
     * plain string, else the structural form - always some text.
     * Property probes rather than instanceof, so an Error minted in
     * another realm (an iframe, a worker port) still renders as an
     * error instead of falling through to the structural form. */
    fn reason_text(reason: &JsValue) -> String {
        if let Some(stack) = string_prop(reason, "stack") {
            return stack;
        }
        if let Some(message) = string_prop(reason, "message") {
            let name = string_prop(reason, "name").unwrap_or_else(|| "Error".to_string());
            return format!("{name}: {message}");
        }
        match reason.as_string() {
            Some(text) => text,
            None => format!("{reason:?}"),
        }
    }

    /* Reflect::get throws on primitives; absent, thrown, and
     * non-string all read as None */
    fn string_prop(value: &JsValue, key: &str) -> Option<String> {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    }

}
