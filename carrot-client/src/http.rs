//! Request dispatch
//!
//! One physical HTTP request per logical operation: no retries, no batching,
//! no timeout beyond whatever reqwest's defaults provide. Failures that never
//! produced an HTTP response are classified into a small set of transport
//! kinds that the normalizer turns into fixed sentences.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};
use thiserror::Error;

use crate::body::{FormPart, PartData, RequestBody};

/// An HTTP response reduced to what the normalizer needs
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// The transport failures the client distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Encountered a connection error.")]
    Connection,
    #[error("Invalid URL.")]
    InvalidUrl,
    #[error("Request timed out.")]
    Timeout,
    #[error("Too many redirects")]
    TooManyRedirects,
}

/// Send one request and collect the response body as text.
pub(crate) async fn dispatch(
    http: &Client,
    method: Method,
    url: &str,
    query: &[(String, String)],
    body: Option<RequestBody>,
) -> Result<RawResponse, TransportError> {
    tracing::debug!(%method, url, ?query, ?body, "sending request");

    let mut request = http.request(method, url);
    if !query.is_empty() {
        request = request.query(query);
    }
    match body {
        Some(RequestBody::Json(map)) => request = request.json(&map),
        Some(RequestBody::Multipart(parts)) => request = request.multipart(into_form(parts)),
        None => {}
    }

    let response = request.send().await.map_err(classify)?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(classify)?;
    tracing::debug!(status, body = %body, "received response");

    Ok(RawResponse { status, body })
}

fn into_form(parts: Vec<FormPart>) -> Form {
    parts.into_iter().fold(Form::new(), |form, part| match part.data {
        PartData::Text(text) => form.text(part.name, text),
        PartData::File { bytes, filename } => {
            form.part(part.name, Part::bytes(bytes).file_name(filename))
        }
    })
}

/// Map a reqwest error onto a transport kind. The full error is logged at
/// debug level; callers only ever see the fixed sentence.
fn classify(err: reqwest::Error) -> TransportError {
    tracing::debug!(error = %err, "request failed");
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_redirect() {
        TransportError::TooManyRedirects
    } else if err.is_builder() {
        TransportError::InvalidUrl
    } else {
        TransportError::Connection
    }
}
