use serde_json::Value;
use tracing::debug;

use crate::utils::{ClientError, Result};

/// Base URL for version 0.1 of the Qaym public API, without a trailing slash.
pub const QAYM_API_URL: &str = "http://api.qaym.com/0.1";

/// QaymClient handles all communication with the Qaym API.
///
/// Every operation is a blocking GET whose URL ends with a literal
/// `key=<api key>` path segment. Responses are small JSON documents and are
/// passed through as decoded [`serde_json::Value`]s; the client does not
/// model the response schema.
///
/// Call methods take `&mut self` because each call overwrites the last-URL
/// and last-response fields, so one instance cannot serve concurrent calls.
pub struct QaymClient {
    /// HTTP client for making requests
    client: reqwest::blocking::Client,
    /// Base URL for the API, stored without a trailing slash
    base_url: String,
    /// API key appended to every request
    api_key: String,
    /// URL of the most recent call
    last_url: Option<String>,
    /// Decoded body of the most recent successful call
    last_response: Option<Value>,
}

impl QaymClient {
    /// Create a new client with the given API key. The key may be empty;
    /// it is not validated.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: QAYM_API_URL.to_string(),
            api_key: api_key.into(),
            last_url: None,
            last_response: None,
        }
    }

    /// Point the client at a different server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replace the API key used by all subsequent calls.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.api_key = key.into();
    }

    /// List all countries
    pub fn list_countries(&mut self) -> Result<Value> {
        let url = self.build_url("countries", None, None);
        self.call(url)
    }

    /// Get the information about the specified country
    pub fn get_country(&mut self, country_id: u64) -> Result<Value> {
        let url = self.build_url("countries", Some(country_id), None);
        self.call(url)
    }

    /// List the cities in the specified country
    pub fn list_country_cities(&mut self, country_id: u64) -> Result<Value> {
        let url = self.build_url("countries", Some(country_id), Some("cities"));
        self.call(url)
    }

    /// List all cities
    pub fn list_cities(&mut self) -> Result<Value> {
        let url = self.build_url("cities", None, None);
        self.call(url)
    }

    /// Get the information about the specified city
    pub fn get_city(&mut self, city_id: u64) -> Result<Value> {
        let url = self.build_url("cities", Some(city_id), None);
        self.call(url)
    }

    /// List the restaurants in the specified city
    pub fn list_city_items(&mut self, city_id: u64) -> Result<Value> {
        let url = self.build_url("cities", Some(city_id), Some("items"));
        self.call(url)
    }

    /// List the top restaurants in the specified city
    pub fn list_city_top_items(&mut self, city_id: u64) -> Result<Value> {
        let url = self.build_url("cities", Some(city_id), Some("items/top"));
        self.call(url)
    }

    /// Get the information about the specified restaurant
    pub fn get_item(&mut self, item_id: u64) -> Result<Value> {
        let url = self.build_url("items", Some(item_id), None);
        self.call(url)
    }

    /// List the branches of the specified restaurant
    pub fn list_item_locations(&mut self, item_id: u64) -> Result<Value> {
        let url = self.build_url("items", Some(item_id), Some("locations"));
        self.call(url)
    }

    /// List the reviews of the specified restaurant
    pub fn list_item_reviews(&mut self, item_id: u64) -> Result<Value> {
        let url = self.build_url("items", Some(item_id), Some("reviews"));
        self.call(url)
    }

    /// List the images of the specified restaurant
    pub fn list_item_images(&mut self, item_id: u64) -> Result<Value> {
        let url = self.build_url("items", Some(item_id), Some("images"));
        self.call(url)
    }

    /// List the votes on the specified restaurant
    pub fn list_item_votes(&mut self, item_id: u64) -> Result<Value> {
        let url = self.build_url("items", Some(item_id), Some("votes"));
        self.call(url)
    }

    /// List all tags
    pub fn list_tags(&mut self) -> Result<Value> {
        let url = self.build_url("tags", None, None);
        self.call(url)
    }

    /// List the restaurants carrying the specified tag
    pub fn list_tag_items(&mut self, tag_id: u64) -> Result<Value> {
        let url = self.build_url("tags", Some(tag_id), Some("items"));
        self.call(url)
    }

    /// URL of the most recent call, recorded as soon as it is built
    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }

    /// Decoded body of the most recent successful call. Cleared whenever a
    /// call fails, so it always mirrors the most recent return value.
    pub fn last_response(&self) -> Option<&Value> {
        self.last_response.as_ref()
    }

    /// Build the full URL for a call and record it as the last URL.
    ///
    /// The key is a literal `key=` path segment at the end of the URL, not
    /// a query string; that is the wire format the Qaym API expects.
    fn build_url(&mut self, origin: &str, id: Option<u64>, request: Option<&str>) -> String {
        let mut url = format!("{}/{}", self.base_url, origin);

        if let Some(id) = id {
            url.push('/');
            url.push_str(&id.to_string());
        }

        if let Some(request) = request {
            url.push('/');
            url.push_str(request);
        }

        url.push_str("/key=");
        url.push_str(&self.api_key);

        self.last_url = Some(url.clone());
        url
    }

    /// Perform the GET and decode the buffered JSON body
    fn call(&mut self, url: String) -> Result<Value> {
        self.last_response = None;
        debug!("GET {url}");

        let response = self.client.get(&url).send().map_err(ClientError::Network)?;

        let status = response.status();
        let body = response.text().map_err(ClientError::Network)?;

        if !status.is_success() {
            debug!("server returned {status} for {url}");
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message: body,
            });
        }

        let value: Value =
            serde_json::from_str(&body).map_err(|e| ClientError::ParseError(e.to_string()))?;

        self.last_response = Some(value.clone());
        Ok(value)
    }
}
