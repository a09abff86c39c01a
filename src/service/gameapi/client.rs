use std::{fmt, time::Duration};

use json::JsonValue;
use reqwest::blocking::Client;

use crate::model::ids::{LevelId, RunId};

const BASE_URL: &str = "https://api.narrowarrow.xyz";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The three upstream lookups, behind a trait so the data manager can run
/// against a fake without network access.
pub trait GameApi {
    fn level_details(&self, level_id: &LevelId) -> Result<JsonValue, RequestError>;
    fn leaderboard(&self, level_id: &LevelId) -> Result<JsonValue, RequestError>;
    fn run_details(&self, run_id: &RunId) -> Result<JsonValue, RequestError>;
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Result<Self, ClientInitError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    fn request(&self, url: String) -> Result<JsonValue, RequestError> {
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            return Err(RequestError::InvalidResponse(
                response.status().as_u16(),
                response.text().unwrap_or_else(|_| "Unknown error".to_string()),
            ));
        }

        let text = response.text()?;
        let json = json::parse(&text)?;
        Ok(json)
    }
}

impl GameApi for ApiClient {
    fn level_details(&self, level_id: &LevelId) -> Result<JsonValue, RequestError> {
        let url = format!(
            "{}/level-details/{}?isCustomLevel=true",
            self.base_url,
            urlencoding::encode(level_id.as_str())
        );
        self.request(url)
    }

    fn leaderboard(&self, level_id: &LevelId) -> Result<JsonValue, RequestError> {
        let url = format!(
            "{}/leaderboard?levelId={}",
            self.base_url,
            urlencoding::encode(level_id.as_str())
        );
        self.request(url)
    }

    fn run_details(&self, run_id: &RunId) -> Result<JsonValue, RequestError> {
        let url = format!("{}/runs/{}", self.base_url, urlencoding::encode(run_id.as_str()));
        self.request(url)
    }
}

#[derive(Debug)]
pub enum ClientInitError {
    HttpClientCreation(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::HttpClientCreation(e) => {
                write!(f, "Failed to create HTTP client: {}", e)
            }
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClientCreation(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    NetworkError(reqwest::Error),
    InvalidResponse(u16, String),
    JsonParseError(json::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::NetworkError(e) => {
                write!(f, "Network error: {}", e)
            }
            RequestError::InvalidResponse(status, body) => {
                write!(f, "Server returned error {}: {}", status, body)
            }
            RequestError::JsonParseError(e) => {
                write!(f, "Failed to parse JSON response: {}", e)
            }
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        Self::JsonParseError(error)
    }
}
