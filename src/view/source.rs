use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::api::{fetch, Endpoint, EndpointClient, EndpointResult};

/// Owned future produced by a [`DataSource`].
pub type SourceFuture<T> = Pin<Box<dyn Future<Output = EndpointResult<T>> + Send + 'static>>;

/// Where a view gets its data from.
///
/// Each call to `fetch` starts one independent attempt.
pub trait DataSource<T>: Send + Sync + 'static {
    fn fetch(&self) -> SourceFuture<T>;
}

/// Fetches a typed endpoint through a shared client.
pub struct EndpointSource<E> {
    client: Arc<dyn EndpointClient>,
    endpoint: E,
}

impl<E: Endpoint + Clone> EndpointSource<E> {
    pub fn new(client: Arc<dyn EndpointClient>, endpoint: E) -> Self {
        Self { client, endpoint }
    }
}

impl<E: Endpoint + Clone> DataSource<E::Output> for EndpointSource<E> {
    fn fetch(&self) -> SourceFuture<E::Output> {
        let client = Arc::clone(&self.client);
        let endpoint = self.endpoint.clone();
        Box::pin(async move { fetch(client.as_ref(), &endpoint).await })
    }
}

/// Resolves immediately with locally generated data.
///
/// Used by views the backend has no endpoint for.
pub struct FixtureSource<T> {
    make: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T> FixtureSource<T> {
    pub fn new(make: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            make: Arc::new(make),
        }
    }
}

impl<T: Send + 'static> DataSource<T> for FixtureSource<T> {
    fn fetch(&self) -> SourceFuture<T> {
        let data = (self.make)();
        Box::pin(async move { Ok(data) })
    }
}
