//! Vehicle registry HTTP client implementation

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use vreg_core::{Vehicle, VehicleData};

use crate::error::{Result, VehicleClientError};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Vehicle registry REST API client
#[derive(Debug, Clone)]
pub struct VehicleClient {
    client: Client,
    base_url: Url,
}

impl VehicleClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the registry server (e.g. "http://localhost:3000")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    ///
    /// Useful for making raw requests (e.g. deliberately malformed bodies in
    /// tests) while reusing the client's connection pool.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Create a vehicle; the server assigns the VIN
    #[instrument(skip(self, data))]
    pub async fn create_vehicle(&self, data: &VehicleData) -> Result<Vehicle> {
        let url = self.base_url.join("/vehicle")?;
        debug!("Creating vehicle at {}", url);

        let response = self.client.post(url).json(data).send().await?;

        if response.status() == StatusCode::CREATED {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// List every registered vehicle
    #[instrument(skip(self))]
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
        let url = self.base_url.join("/vehicle")?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Fetch a single vehicle by VIN
    #[instrument(skip(self))]
    pub async fn get_vehicle(&self, vin: &str) -> Result<Vehicle> {
        let url = self.vehicle_url(vin)?;
        let response = self.client.get(url).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Replace every field of an existing vehicle
    #[instrument(skip(self, data))]
    pub async fn update_vehicle(&self, vin: &str, data: &VehicleData) -> Result<Vehicle> {
        let url = self.vehicle_url(vin)?;
        let response = self.client.put(url).json(data).send().await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Delete a vehicle permanently
    #[instrument(skip(self))]
    pub async fn delete_vehicle(&self, vin: &str) -> Result<()> {
        let url = self.vehicle_url(vin)?;
        let response = self.client.delete(url).send().await?;

        if response.status() == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(self.extract_error(response).await)
        }
    }

    /// Build the URL for a single-record route.
    ///
    /// The VIN is pushed as one path segment so reserved characters in a
    /// caller-supplied VIN (`/`, `?`, spaces) are percent-encoded instead
    /// of splitting or truncating the path.
    fn vehicle_url(&self, vin: &str) -> Result<Url> {
        let mut url = self.base_url.join("/vehicle")?;
        url.path_segments_mut()
            .map_err(|_| VehicleClientError::ParseError("base URL cannot be a base".to_string()))?
            .push(vin);
        Ok(url)
    }

    /// Turn an error response into the matching client error.
    ///
    /// The server answers with `{"error": "<message>"}` for single-message
    /// failures and `{"errors": [...]}` for validation failures.
    async fn extract_error(&self, response: Response) -> VehicleClientError {
        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            let messages = errors
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
            return VehicleClientError::ValidationRejected(messages);
        }

        let message = body
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();

        match status {
            StatusCode::NOT_FOUND => VehicleClientError::NotFound(message),
            StatusCode::BAD_REQUEST => VehicleClientError::Rejected(message),
            _ => VehicleClientError::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_url_appends_the_vin() {
        let client = VehicleClient::new("http://localhost:3000").unwrap();
        let url = client.vehicle_url("ABC123").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/vehicle/ABC123");
    }

    #[test]
    fn reserved_characters_stay_inside_one_segment() {
        let client = VehicleClient::new("http://localhost:3000").unwrap();
        let url = client.vehicle_url("A/B C?D").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/vehicle/A%2FB%20C%3FD");
    }
}
