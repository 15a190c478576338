//! [`FormTransport`] that POSTs with `gloo-net` from a local task.

use futures::channel::mpsc::UnboundedSender;
use web_sys::{Element, FormData};

use crate::app::Message;
use crate::error::Error;
use crate::net::form::{ACCEPT_JSON, FormReply, FormRequest, FormTransport, SubmitOutcome};

pub struct FetchTransport {
    tx: UnboundedSender<Message<Element>>,
}

impl FetchTransport {
    pub fn new(tx: UnboundedSender<Message<Element>>) -> Self {
        Self { tx }
    }
}

impl FormTransport for FetchTransport {
    fn send(&mut self, request: FormRequest) {
        let tx = self.tx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post(request).await;
            if tx.unbounded_send(Message::Submitted(outcome)).is_err() {
                log::debug!("app loop gone; dropping submission outcome");
            }
        });
    }
}

/// Multipart POST of the request's fields. Any HTTP status is a reply; only a
/// request that never got one is an error.
async fn post(request: FormRequest) -> SubmitOutcome {
    let body = FormData::new().map_err(|e| Error::Network(format!("FormData: {e:?}")))?;
    for (name, value) in &request.fields {
        body.append_with_str(name, value).map_err(|e| Error::Network(format!("FormData.append: {e:?}")))?;
    }

    let response = gloo_net::http::Request::post(&request.action)
        .header("Accept", ACCEPT_JSON)
        .body(body)
        .map_err(|e| Error::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Ok(FormReply::from_body(status, &text))
}
