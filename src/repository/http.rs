//! Repository backed by the marketplace REST API.
//!
//! Every endpoint answers with the `{ status, statusCode, result }` envelope;
//! this module unwraps it and maps transport and HTTP failures onto
//! [`RepositoryError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use crate::domain::careers::{ApplicationStatus, JobApplication};
use crate::domain::catalog::Vehicle;
use crate::domain::entity::{EntityKind, Resource};
use crate::domain::listing::{Envelope, ListingQueryState, ListingResponse};
use crate::domain::types::{ApprovalStatus, EntityId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ListingReader, ModerationWriter, RecordReader, RecordWriter};

/// Longest backend error body kept in an error message.
const MAX_ERROR_BODY: usize = 512;

#[derive(Clone, Debug)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

impl HttpRepository {
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::ValidationError(format!(
                "API url cannot be used as a base: {base_url}"
            )));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `kind`'s collection path and the optional identifier to the
    /// base URL. The identifier is percent-encoded as a single segment.
    fn endpoint(&self, kind: EntityKind, tail: &[&str]) -> RepositoryResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                RepositoryError::ValidationError("API url cannot be a base".to_string())
            })?;
            segments.pop_if_empty();
            segments.extend(kind.api_path().split('/'));
            segments.extend(tail);
        }
        Ok(url)
    }

    async fn send<B>(&self, method: Method, url: Url, body: Option<&B>) -> RepositoryResult<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        log::debug!("{method} {url}");
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        ensure_success(response).await
    }

    async fn send_for_result<B, R>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> RepositoryResult<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let response = self.send(method, url, body).await?;
        let bytes = response.bytes().await?;
        let envelope: Envelope<R> = serde_json::from_slice(&bytes)?;
        if !envelope.status.is_success() {
            return Err(RepositoryError::Http {
                status: envelope.status_code,
                message: "backend reported a failed status".to_string(),
            });
        }
        Ok(envelope.result)
    }
}

/// Turns non-2xx responses into errors, keeping a bounded slice of the body.
async fn ensure_success(response: Response) -> RepositoryResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(RepositoryError::NotFound);
    }
    let mut message = response.text().await.unwrap_or_default();
    if message.len() > MAX_ERROR_BODY {
        let mut cut = MAX_ERROR_BODY;
        while !message.is_char_boundary(cut) {
            cut -= 1;
        }
        message.truncate(cut);
    }
    Err(RepositoryError::Http {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl<T: Resource> ListingReader<T> for HttpRepository {
    async fn list_records(
        &self,
        query: &ListingQueryState,
    ) -> RepositoryResult<ListingResponse<T>> {
        let mut url = self.endpoint(T::KIND, &[])?;
        url.query_pairs_mut().extend_pairs(query.query_pairs());

        let listing: ListingResponse<T> = self
            .send_for_result::<(), _>(Method::GET, url, None)
            .await?;
        Ok(listing.normalized(query))
    }
}

#[async_trait]
impl<T: Resource> RecordReader<T> for HttpRepository {
    async fn get_record(&self, id: &EntityId) -> RepositoryResult<Option<T>> {
        let url = self.endpoint(T::KIND, &[id.as_str()])?;
        match self.send_for_result::<(), T>(Method::GET, url, None).await {
            Ok(record) => Ok(Some(record)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl<T: Resource> RecordWriter<T> for HttpRepository {
    async fn create_record(&self, fields: &T::Fields) -> RepositoryResult<T> {
        let url = self.endpoint(T::KIND, &[])?;
        self.send_for_result(Method::POST, url, Some(fields)).await
    }

    async fn update_record(&self, id: &EntityId, fields: &T::Fields) -> RepositoryResult<T> {
        let url = self.endpoint(T::KIND, &[id.as_str()])?;
        self.send_for_result(Method::PUT, url, Some(fields)).await
    }

    async fn delete_record(&self, id: &EntityId) -> RepositoryResult<()> {
        let url = self.endpoint(T::KIND, &[id.as_str()])?;
        self.send::<()>(Method::DELETE, url, None).await?;
        Ok(())
    }
}

#[async_trait]
impl ModerationWriter for HttpRepository {
    async fn set_vehicle_approval(
        &self,
        id: &EntityId,
        status: ApprovalStatus,
    ) -> RepositoryResult<Vehicle> {
        let url = self.endpoint(EntityKind::Vehicle, &[id.as_str(), "approval"])?;
        let body = json!({ "status": status });
        self.send_for_result(Method::PATCH, url, Some(&body)).await
    }

    async fn set_application_status(
        &self,
        id: &EntityId,
        status: ApplicationStatus,
    ) -> RepositoryResult<JobApplication> {
        let url = self.endpoint(EntityKind::JobApplication, &[id.as_str(), "status"])?;
        let body = json!({ "status": status });
        self.send_for_result(Method::PATCH, url, Some(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(base: &str) -> HttpRepository {
        HttpRepository::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoint_appends_collection_and_encoded_id() {
        let repo = repo("http://backend.local/api/v1/");
        let id = EntityId::new("a b/c").unwrap();
        let url = repo.endpoint(EntityKind::SrmTrip, &[id.as_str()]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://backend.local/api/v1/srm/trips/a%20b%2Fc"
        );
    }

    #[test]
    fn endpoint_works_without_trailing_slash() {
        let repo = repo("http://backend.local/api");
        let url = repo.endpoint(EntityKind::Blog, &[]).unwrap();
        assert_eq!(url.as_str(), "http://backend.local/api/blogs");
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(HttpRepository::new("mailto:ops@example.com", Duration::from_secs(1)).is_err());
        assert!(HttpRepository::new("not a url", Duration::from_secs(1)).is_err());
    }
}
