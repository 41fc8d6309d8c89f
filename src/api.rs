use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::DashboardError;
use crate::models::{
    ApiError, DashboardStats, Envelope, Profile, ProfileDetail, ProgressReport, ProgressStats,
};

/// REST operations the dashboard consumes.
///
/// Every method performs exactly one request.
#[async_trait(?Send)]
pub trait Backend {
    async fn dashboard_stats(&self) -> Result<DashboardStats, DashboardError>;

    async fn list_profiles(&self) -> Result<Vec<Profile>, DashboardError>;

    async fn get_profile(&self, name: &str) -> Result<ProfileDetail, DashboardError>;

    async fn delete_profile(&self, name: &str) -> Result<(), DashboardError>;

    /// Merge `fields` into an existing profile. `NotFound` if there is none.
    async fn update_profile(
        &self,
        name: &str,
        fields: &serde_json::Value,
    ) -> Result<Profile, DashboardError>;

    async fn profile_progress(&self, name: &str) -> Result<ProgressStats, DashboardError>;
}

/// `Backend` over `fetch`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: Url,
}

impl HttpBackend {
    /// `base` must be absolute, e.g. `http://localhost:5000/api`.
    pub fn new(base: &str) -> Result<Self, DashboardError> {
        let base = Url::parse(base)
            .map_err(|e| DashboardError::Config(format!("invalid API base '{}': {}", base, e)))?;
        if base.cannot_be_a_base() {
            return Err(DashboardError::Config(format!(
                "API base '{}' cannot hold a path",
                base
            )));
        }
        Ok(Self { base })
    }

    /// Append `segments` to the base path. Each segment is percent-encoded,
    /// so a profile name always stays a single segment.
    ///
    /// Empty and dot-only segments are rejected: URL parsing resolves `.`
    /// and `..` (encoded or not) against the path, so they can never name a
    /// resource of their own.
    pub fn endpoint(&self, segments: &[&str]) -> Result<String, DashboardError> {
        if let Some(segment) = segments.iter().find(|s| s.chars().all(|c| c == '.')) {
            return Err(DashboardError::Validation(format!(
                "'{}' is not a valid profile name",
                segment
            )));
        }
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url.into())
    }

    async fn get_data<T: DeserializeOwned>(&self, url: String) -> Result<T, DashboardError> {
        debug!("GET {}", url);
        let response = Request::get(&url).send().await.map_err(network)?;
        let response = check_status(response, &url).await?;
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| DashboardError::Parse(e.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn dashboard_stats(&self) -> Result<DashboardStats, DashboardError> {
        self.get_data(self.endpoint(&["stats"])?).await
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, DashboardError> {
        self.get_data(self.endpoint(&["profiles"])?).await
    }

    async fn get_profile(&self, name: &str) -> Result<ProfileDetail, DashboardError> {
        self.get_data(self.endpoint(&["profiles", name])?).await
    }

    async fn delete_profile(&self, name: &str) -> Result<(), DashboardError> {
        let url = self.endpoint(&["profiles", name])?;
        debug!("DELETE {}", url);
        let response = Request::delete(&url).send().await.map_err(network)?;
        check_status(response, &url).await.map(|_| ())
    }

    async fn update_profile(
        &self,
        name: &str,
        fields: &serde_json::Value,
    ) -> Result<Profile, DashboardError> {
        let url = self.endpoint(&["profiles", name])?;
        debug!("PUT {}", url);
        let response = Request::put(&url)
            .json(fields)
            .map_err(|e| DashboardError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(network)?;
        let response = check_status(response, &url).await?;
        let envelope: Envelope<Profile> = response
            .json()
            .await
            .map_err(|e| DashboardError::Parse(e.to_string()))?;
        Ok(envelope.data)
    }

    async fn profile_progress(&self, name: &str) -> Result<ProgressStats, DashboardError> {
        let report: ProgressReport = self
            .get_data(self.endpoint(&["profiles", name, "progress"])?)
            .await?;
        Ok(report.stats)
    }
}

fn network(err: gloo_net::Error) -> DashboardError {
    DashboardError::Network(err.to_string())
}

/// Pass 2xx responses through; turn anything else into an error carrying the
/// backend's `error` message when it sent one.
async fn check_status(response: Response, url: &str) -> Result<Response, DashboardError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ApiError>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", status),
    };
    if status == 404 {
        Err(DashboardError::NotFound(format!("{} ({})", message, url)))
    } else {
        Err(DashboardError::Network(format!("{} (HTTP {})", message, status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> HttpBackend {
        HttpBackend::new("http://localhost:5000/api").unwrap()
    }

    #[test]
    fn test_endpoints() {
        let api = backend();
        assert_eq!(api.endpoint(&["stats"]).unwrap(), "http://localhost:5000/api/stats");
        assert_eq!(
            api.endpoint(&["profiles", "alice", "progress"]).unwrap(),
            "http://localhost:5000/api/profiles/alice/progress"
        );
    }

    #[test]
    fn test_trailing_slash_base() {
        let api = HttpBackend::new("http://localhost:5000/api/").unwrap();
        assert_eq!(
            api.endpoint(&["profiles"]).unwrap(),
            "http://localhost:5000/api/profiles"
        );
    }

    #[test]
    fn test_name_stays_one_segment() {
        let api = backend();
        assert_eq!(
            api.endpoint(&["profiles", "Jane Doe"]).unwrap(),
            "http://localhost:5000/api/profiles/Jane%20Doe"
        );
        assert_eq!(
            api.endpoint(&["profiles", "a/b"]).unwrap(),
            "http://localhost:5000/api/profiles/a%2Fb"
        );
        assert_eq!(
            api.endpoint(&["profiles", "v1.2"]).unwrap(),
            "http://localhost:5000/api/profiles/v1.2"
        );
    }

    #[test]
    fn test_dot_and_empty_names_are_rejected() {
        let api = backend();
        for name in [".", "..", "...", ""] {
            assert!(
                matches!(api.endpoint(&["profiles", name]), Err(DashboardError::Validation(_))),
                "accepted {:?}",
                name
            );
        }
        assert!(matches!(
            api.endpoint(&["profiles", "..", "progress"]),
            Err(DashboardError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_relative_base() {
        assert!(matches!(HttpBackend::new("/api"), Err(DashboardError::Config(_))));
        assert!(matches!(HttpBackend::new("mailto:x@y.z"), Err(DashboardError::Config(_))));
    }
}
