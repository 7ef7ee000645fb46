//! ureq-backed executor for the core's `HttpRequest` values.
//!
//! One attempt per request, no retry, no timeout. ureq's automatic
//! status-code-as-error behavior is disabled so 4xx/5xx responses come back
//! as data and the core decides what they mean; only transport-level
//! failures (refused connection, DNS, broken pipe) surface as `Err`.

use contacts_core::{HttpMethod, HttpRequest, HttpResponse};

pub fn execute(req: HttpRequest) -> Result<HttpResponse, String> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .map_err(|e| e.to_string())?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
