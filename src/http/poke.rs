use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request, StatusCode, Url};

use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::PokeError;

/// Pokes one endpoint: builds the request, attaches resolved headers, sends
/// it, and classifies the response. Success requires exactly status 200; the
/// response body is discarded unread.
///
/// # Errors
///
/// Returns an error for an invalid URL, a request that cannot be built, a
/// transport failure, or a non-200 status.
pub async fn poke_endpoint(client: &Client, endpoint: &Endpoint) -> Result<u16, PokeError> {
    let request = build_poke_request(client, endpoint)?;
    let response = client
        .execute(request)
        .await
        .map_err(|err| PokeError::SendFailed { source: err })?;

    let status = response.status();
    drop(response);

    if status == StatusCode::OK {
        Ok(status.as_u16())
    } else {
        Err(PokeError::BadStatus {
            status: status.as_u16(),
        })
    }
}

fn build_poke_request(client: &Client, endpoint: &Endpoint) -> Result<Request, PokeError> {
    let url = Url::parse(&endpoint.url).map_err(|err| PokeError::InvalidUrl {
        url: endpoint.url.clone(),
        source: err,
    })?;

    let mut request_builder = match endpoint.method {
        HttpMethod::Get => client.get(url),
        // POST pokes send an empty application/json body.
        HttpMethod::Post => client.post(url).header(CONTENT_TYPE, "application/json"),
    };

    for (key, value) in endpoint.resolved_headers() {
        request_builder = request_builder.header(key, value);
    }

    request_builder
        .build()
        .map_err(|err| PokeError::BuildRequestFailed { source: err })
}
