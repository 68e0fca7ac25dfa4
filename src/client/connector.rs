//! HTTP connector for the mountain service.

use reqwest::StatusCode;

use crate::model::Mountain;

use super::errors::ClientResult;

/// What a call to the service came back with: the status code, plus the
/// decoded mountain list for read responses (empty for writes and for
/// bodyless statuses).
#[derive(Debug, Clone)]
pub struct ClientResponse {
    pub status: StatusCode,
    pub mountains: Vec<Mountain>,
}

impl ClientResponse {
    fn bodyless(status: StatusCode) -> Self {
        Self {
            status,
            mountains: Vec::new(),
        }
    }
}

/// Connector for the mountain service.
///
/// Each method issues exactly one request; any retry policy belongs to the
/// caller.
pub struct MountainConnector {
    base_url: String,
    http: reqwest::Client,
}

impl MountainConnector {
    /// Create a connector against a base URL such as `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Upload a batch of mountains.
    pub async fn add_mountains(&self, mountains: &[Mountain]) -> ClientResult<ClientResponse> {
        let response = self.http.post(self.url("")).json(mountains).send().await?;
        Ok(ClientResponse::bodyless(response.status()))
    }

    /// Get all mountains.
    pub async fn get_all(&self) -> ClientResult<ClientResponse> {
        self.get_mountains("").await
    }

    /// Get mountains by country.
    pub async fn get_by_country(&self, country: &str) -> ClientResult<ClientResponse> {
        self.get_mountains(&format!("country/{country}")).await
    }

    /// Get mountains by country and range.
    pub async fn get_by_country_and_range(
        &self,
        country: &str,
        range: &str,
    ) -> ClientResult<ClientResponse> {
        self.get_mountains(&format!("country/{country}/range/{range}"))
            .await
    }

    /// Get mountains by hemisphere.
    pub async fn get_by_hemisphere(&self, is_northern: bool) -> ClientResult<ClientResponse> {
        self.get_mountains(&format!("?northern-hemisphere={is_northern}"))
            .await
    }

    /// Get mountains in a country strictly higher than the given altitude.
    pub async fn get_by_country_altitude(
        &self,
        country: &str,
        altitude: i64,
    ) -> ClientResult<ClientResponse> {
        self.get_mountains(&format!("country/{country}?altitude={altitude}"))
            .await
    }

    /// Get a mountain by country, range and name.
    pub async fn get_by_name(
        &self,
        country: &str,
        range: &str,
        name: &str,
    ) -> ClientResult<ClientResponse> {
        self.get_mountains(&format!("country/{country}/range/{range}/name/{name}"))
            .await
    }

    /// Get a mountain by its id.
    pub async fn get_by_id(&self, id: u64) -> ClientResult<ClientResponse> {
        self.get_mountains(&format!("id/{id}")).await
    }

    /// Issue a GET for the given path-and-query suffix and decode the body.
    pub async fn get_mountains(&self, path_args: &str) -> ClientResult<ClientResponse> {
        let response = self.http.get(self.url(path_args)).send().await?;
        let status = response.status();

        // 204 and error statuses carry no list body.
        if status != StatusCode::OK {
            return Ok(ClientResponse::bodyless(status));
        }

        let mountains = response.json::<Vec<Mountain>>().await?;
        Ok(ClientResponse { status, mountains })
    }

    /// Replace the mountain with the given id.
    pub async fn update_mountain(
        &self,
        id: u64,
        mountain: &Mountain,
    ) -> ClientResult<ClientResponse> {
        let response = self
            .http
            .put(self.url(&format!("update-mountain/{id}")))
            .json(mountain)
            .send()
            .await?;
        Ok(ClientResponse::bodyless(response.status()))
    }

    /// Delete the mountain with the given id.
    pub async fn delete_mountain(&self, id: u64) -> ClientResult<ClientResponse> {
        let response = self
            .http
            .delete(self.url(&format!("delete-mountain/{id}")))
            .send()
            .await?;
        Ok(ClientResponse::bodyless(response.status()))
    }
}
