//! Fetch plumbing shared by the endpoint wrappers
//!
//! Thin layer over the browser fetch API: build a same-origin request,
//! await the response, decode the JSON body. State-changing requests echo
//! the CSRF token the backend renders into the hosting page's form.

use serde::de::DeserializeOwned;
use serde::Serialize;
use stock_scan_common::{Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Header the backend checks on state-changing requests.
const CSRF_HEADER: &str = "X-CSRFToken";

/// Map a JS-side failure into the transport error bucket.
pub(crate) fn js_error(context: &str, value: JsValue) -> Error {
    Error::Transport(format!("{}: {:?}", context, value))
}

/// Read the CSRF token from the hidden form input the backend renders
/// into every page. Absent outside a served page (e.g. dev harness).
fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector("input[name=csrfmiddlewaretoken]")
        .ok()
        .flatten()?;
    let input: web_sys::HtmlInputElement = element.dyn_into().ok()?;
    Some(input.value())
}

/// Issue a request and decode the JSON body into `T`.
async fn run<T: DeserializeOwned>(request: Request) -> Result<T> {
    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("not a Response", e))?;

    let json_promise = resp.json().map_err(|e| js_error("body is not JSON", e))?;
    let json = JsFuture::from(json_promise)
        .await
        .map_err(|e| js_error("JSON decode failed", e))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Transport(format!("unexpected response shape: {}", e)))
}

/// `GET <path>?value=<partial>` against a suggestion endpoint.
pub(crate) async fn get_suggestions<T: DeserializeOwned>(path: &str, value: &str) -> Result<T> {
    let url = format!(
        "{}?value={}",
        path,
        String::from(js_sys::encode_uri_component(value))
    );

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| js_error("bad request", e))?;
    run(request).await
}

/// `POST <path>` with a JSON body and the CSRF header.
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T> {
    let body = serde_json::to_string(body)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request =
        Request::new_with_str_and_init(path, &opts).map_err(|e| js_error("bad request", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_error("bad header", e))?;
    if let Some(token) = csrf_token() {
        request
            .headers()
            .set(CSRF_HEADER, &token)
            .map_err(|e| js_error("bad header", e))?;
    }

    run(request).await
}
