use crate::remote::errors::RemoteError;
use crate::remote::traits::Resource;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// HTTP client bound to one backend collection.
#[derive(Debug, Clone)]
pub struct ResourceClient<E> {
    http: Client,
    base_url: Url,
    _resource: PhantomData<fn() -> E>,
}

impl<E: Resource> ResourceClient<E> {
    pub fn new(base_url: &Url, timeout: Duration) -> Result<Self, RemoteError> {
        let http = Client::builder().timeout(timeout).build()?;
        Self::with_client(http, base_url)
    }

    pub fn with_client(http: Client, base_url: &Url) -> Result<Self, RemoteError> {
        let mut base_url = base_url.clone();
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        // without a trailing slash `join` would drop the last path segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http,
            base_url,
            _resource: PhantomData,
        })
    }

    pub fn collection_url(&self) -> Result<Url, RemoteError> {
        Ok(self.base_url.join(E::COLLECTION)?)
    }

    pub fn item_url(&self, id: i64) -> Result<Url, RemoteError> {
        Ok(self.base_url.join(&format!("{}/{}", E::COLLECTION, id))?)
    }

    pub async fn list_all(&self) -> Result<Vec<E>, RemoteError> {
        let url = self.collection_url()?;
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        read_json(response).await
    }

    pub async fn create(&self, draft: &E::Draft) -> Result<E, RemoteError> {
        let url = self.collection_url()?;
        debug!("POST {url}");
        let response = self.http.post(url).json(draft).send().await?;
        read_json(response).await
    }

    pub async fn update(&self, id: i64, entity: &E) -> Result<E, RemoteError> {
        let url = self.item_url(id)?;
        debug!("PUT {url}");
        let response = self.http.put(url).json(entity).send().await?;
        read_json(response).await
    }

    /// Only a transport failure is an error here, the status is not checked.
    pub async fn remove(&self, id: i64) -> Result<(), RemoteError> {
        let url = self.item_url(id)?;
        debug!("DELETE {url}");
        let response = self.http.delete(url.clone()).send().await?;
        if !response.status().is_success() {
            warn!(
                "DELETE {url} answered {}, treating it as removed",
                response.status()
            );
        }
        Ok(())
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status));
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
