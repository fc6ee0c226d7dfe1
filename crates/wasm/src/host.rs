//! Browser implementations of the core host seams.
//!
//! Both adapters look their APIs up on the JS global at call time so the
//! module loads in hosts that lack them (Node, workers without a clipboard).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use js_sys::{Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use utilidoc_core::{ClipboardHost, CopyCallback, CopyOutcome, Scheduler, TimerId};

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    if !target.is_object() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

fn global_function(name: &str) -> Option<(JsValue, Function)> {
    let global: JsValue = js_sys::global().into();
    let function = property(&global, name)?.dyn_into::<Function>().ok()?;
    Some((global, function))
}

/// `setTimeout` / `clearTimeout` on the JS global.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let Some((global, set_timeout)) = global_function("setTimeout") else {
            log::warn!("setTimeout is not available; timer dropped");
            return TimerId(0);
        };
        // Freed when it fires. A cleared timer leaks its (small) callback.
        let handler = Closure::once_into_js(callback);
        let millis = JsValue::from_f64(delay.as_millis() as f64);
        match set_timeout.call2(&global, &handler, &millis) {
            Ok(id) => TimerId(id.as_f64().unwrap_or_default() as u64),
            Err(err) => {
                log::warn!("setTimeout failed: {:?}", err);
                TimerId(0)
            }
        }
    }

    fn clear_timeout(&self, id: TimerId) {
        if id.0 == 0 {
            return;
        }
        if let Some((global, clear_timeout)) = global_function("clearTimeout") {
            let _ = clear_timeout.call1(&global, &JsValue::from_f64(id.0 as f64));
        }
    }
}

/// `navigator.clipboard.writeText`.
///
/// A missing API completes with [`CopyOutcome::Unsupported`] before
/// `write_text` returns; a rejected promise completes with
/// [`CopyOutcome::Denied`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClipboard;

impl BrowserClipboard {
    fn start_write(text: &str) -> Option<JsValue> {
        let global: JsValue = js_sys::global().into();
        let clipboard = property(&property(&global, "navigator")?, "clipboard")?;
        let write_text = property(&clipboard, "writeText")?.dyn_into::<Function>().ok()?;
        let promise = write_text.call1(&clipboard, &JsValue::from_str(text)).ok()?;
        promise.is_object().then_some(promise)
    }

    /// Calls `done` exactly once with the settled outcome of `promise`.
    fn settle(promise: &JsValue, done: CopyCallback) {
        let then = match property(promise, "then").map(|f| f.dyn_into::<Function>()) {
            Some(Ok(then)) => then,
            _ => {
                done(CopyOutcome::Unsupported);
                return;
            }
        };

        // Whichever path settles first takes `done`; the others find it gone.
        let done = Rc::new(RefCell::new(Some(done)));
        let finish = |done: &Rc<RefCell<Option<CopyCallback>>>, outcome: CopyOutcome| {
            let callback = done.borrow_mut().take();
            if let Some(callback) = callback {
                callback(outcome);
            }
        };
        let on_ok = {
            let done = Rc::clone(&done);
            Closure::once_into_js(move |_: JsValue| finish(&done, CopyOutcome::Ok))
        };
        let on_err = {
            let done = Rc::clone(&done);
            Closure::once_into_js(move |err: JsValue| {
                let name = property(&err, "name").and_then(|name| name.as_string());
                log::debug!("writeText rejected: {}", name.as_deref().unwrap_or("unknown"));
                finish(&done, CopyOutcome::Denied)
            })
        };

        if let Err(err) = then.call2(promise, &on_ok, &on_err) {
            log::warn!("Could not observe clipboard write: {:?}", err);
            finish(&done, CopyOutcome::Unsupported);
        }
    }
}

impl ClipboardHost for BrowserClipboard {
    fn write_text(&self, text: &str, done: CopyCallback) {
        match Self::start_write(text) {
            Some(promise) => Self::settle(&promise, done),
            None => done(CopyOutcome::Unsupported),
        }
    }
}
