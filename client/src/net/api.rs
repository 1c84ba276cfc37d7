//! HTTP dataset source.
//!
//! Client-side (csr): a real GET via `gloo-net`.
//! Native builds: always [`DatasetError::Unavailable`], which the loader
//! turns into an empty dataset like any other failure.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and body read errors each map to a
//! distinct [`DatasetError`] so the console line says which step failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use atlas::dataset::{DatasetError, DatasetSource};

/// Fetches the dataset document from a URL relative to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<String, DatasetError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url)
                .send()
                .await
                .map_err(|e| DatasetError::Fetch(e.to_string()))?;
            if !resp.ok() {
                return Err(DatasetError::Status(resp.status()));
            }
            resp.text().await.map_err(|e| DatasetError::Fetch(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(DatasetError::Unavailable)
        }
    }
}
