use std::fmt;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{config::ApiConfig, types::Envelope, utils};

/// A failed lookup, already classified for the user.
#[derive(Debug)]
pub enum LookupError {
    /// Connection refused, DNS failure, timeout and other transport problems.
    Transport(reqwest::Error),
    Auth,
    NotFound,
    RateLimited,
    Status { code: u16, body: String },
    /// The envelope carried a non-empty `errors` field.
    Api(String),
    Malformed(String),
}

impl LookupError {
    /// The fixed category shown to the user: auth, not found, rate limit or generic.
    pub fn classification(&self) -> &'static str {
        match self {
            LookupError::Auth => "authentication failure",
            LookupError::NotFound => "not found",
            LookupError::RateLimited => "rate limit",
            _ => "generic",
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Transport(e) if e.is_timeout() => write!(f, "request timed out: {}", e),
            LookupError::Transport(e) if e.is_connect() => write!(f, "connection error: {}", e),
            LookupError::Transport(e) => write!(f, "request failed: {}", e),
            LookupError::Auth => write!(f, "authentication failed, check your API key"),
            LookupError::NotFound => write!(f, "no data found for this query"),
            LookupError::RateLimited => {
                write!(f, "request limit reached, try again later")
            }
            LookupError::Status { code, body } => {
                write!(f, "unexpected API status {}: {}", code, body)
            }
            LookupError::Api(errors) => write!(f, "the API returned errors: {}", errors),
            LookupError::Malformed(e) => write!(f, "could not decode the API response: {}", e),
        }
    }
}

impl std::error::Error for LookupError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Teams,
    Players,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Teams => "teams",
            Resource::Players => "players",
        }
    }

    /// A player looked up by id comes back as one object, not a list.
    pub fn returns_single(&self, params: &[(&str, String)]) -> bool {
        *self == Resource::Players && params.iter().any(|(name, _)| *name == "id")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Normalized<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Normalized::Many(items) => items,
            Normalized::One(item) => vec![item],
        }
    }
}

/// Client for the API-Football service.
pub struct FootballClient {
    client: Client,
    config: ApiConfig,
}

impl FootballClient {
    pub fn new(config: ApiConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LookupError::Transport)?;
        Ok(Self { client, config })
    }

    /// Sends `GET {base_url}/{resource}` and normalizes the envelope.
    ///
    /// Anything other than a 200 with a clean envelope is returned as a
    /// classified [`LookupError`].
    pub async fn query<T: DeserializeOwned>(
        &self,
        resource: Resource,
        params: &[(&str, String)],
    ) -> Result<Normalized<T>, LookupError> {
        let url = format!("{}/{}", self.config.base_url, resource.path());

        let pb = utils::spinner(&format!("Fetching {}...", resource.path()));
        let response = self
            .client
            .get(&url)
            .header("x-rapidapi-host", &self.config.host)
            .header("x-rapidapi-key", &self.config.key)
            .query(params)
            .send()
            .await;

        let response = match response {
            Ok(resp) => resp,
            Err(err) => {
                // network or reqwest error
                pb.finish_and_clear();
                return Err(LookupError::Transport(err));
            }
        };

        let status = response.status();
        let body = response.text().await;
        pb.finish_and_clear();
        let body = body.map_err(LookupError::Transport)?;

        if status != StatusCode::OK {
            return Err(classify_status(status, body));
        }

        normalize(&body, resource.returns_single(params))
    }
}

pub fn classify_status(status: StatusCode, body: String) -> LookupError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LookupError::Auth,
        StatusCode::NOT_FOUND => LookupError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => LookupError::RateLimited,
        other => LookupError::Status {
            code: other.as_u16(),
            body,
        },
    }
}

/// Unwraps the `response` field of an envelope.
///
/// With `single` set, the first element is returned on its own and an empty
/// response is [`LookupError::NotFound`].
pub fn normalize<T: DeserializeOwned>(
    body: &str,
    single: bool,
) -> Result<Normalized<T>, LookupError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    if has_errors(&envelope.errors) {
        return Err(LookupError::Api(envelope.errors.to_string()));
    }

    let items: Vec<T> = match envelope.response {
        Value::Null => Vec::new(),
        response => {
            serde_json::from_value(response).map_err(|e| LookupError::Malformed(e.to_string()))?
        }
    };

    if single {
        items
            .into_iter()
            .next()
            .map(Normalized::One)
            .ok_or(LookupError::NotFound)
    } else {
        Ok(Normalized::Many(items))
    }
}

// The service sends `[]` when all is well and an object keyed by field otherwise.
fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Number(_) => true,
    }
}
