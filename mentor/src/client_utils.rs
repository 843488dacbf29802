use crate::MentorError;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};

/// Create a JSON request, parse the response.
/// Throws error on non OK status code.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<R, MentorError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        Err(MentorError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ))
    } else {
        Ok(response.json::<R>().await?)
    }
}
