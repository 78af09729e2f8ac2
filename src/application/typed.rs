/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Namespace-scoped typed clients for the resources of the kops group

use crate::application::interfaces::rest::RestInterface;
use crate::error::AppError;
use crate::model::kops::{Cluster, Federation, InstanceGroup, Keyset, Resource, SshCredential};
use crate::model::meta::{DeleteOptions, ListOptions, ObjectList, PatchType, WatchEvent};
use crate::model::request::Request;
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// Typed client for `Cluster` objects of one namespace
pub type Clusters = ResourceClient<Cluster>;
/// Typed client for `Federation` objects of one namespace
pub type Federations = ResourceClient<Federation>;
/// Typed client for `InstanceGroup` objects of one namespace
pub type InstanceGroups = ResourceClient<InstanceGroup>;
/// Typed client for `Keyset` objects of one namespace
pub type Keysets = ResourceClient<Keyset>;
/// Typed client for `SSHCredential` objects of one namespace
pub type SshCredentials = ResourceClient<SshCredential>;

/// Client for one resource kind, bound to a namespace
pub struct ResourceClient<K> {
    client: Arc<dyn RestInterface>,
    namespace: String,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Clone for ResourceClient<K> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            namespace: self.namespace.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: Resource> ResourceClient<K> {
    /// Binds the transport to `namespace`
    pub fn new(client: Arc<dyn RestInterface>, namespace: &str) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
            _kind: PhantomData,
        }
    }

    /// Namespace this client is bound to
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Creates the object and returns the server's representation
    pub async fn create(&self, object: &K) -> Result<K, AppError> {
        info!("Creating {} {}", K::KIND, object.metadata().name);
        let body = self.encode_object(object)?;
        let request = self.request(Method::POST).body(body);
        self.call(request).await
    }

    /// Replaces the object named in its metadata
    pub async fn update(&self, object: &K) -> Result<K, AppError> {
        let name = object.metadata().name.as_str();
        info!("Updating {} {}", K::KIND, name);
        let body = self.encode_object(object)?;
        let request = self.request(Method::PUT).name(name).body(body);
        self.call(request).await
    }

    /// Deletes the named object
    pub async fn delete(&self, name: &str, options: &DeleteOptions) -> Result<(), AppError> {
        info!("Deleting {} {}", K::KIND, name);
        let body = self.encode(options)?;
        let request = self.request(Method::DELETE).name(name).body(body);
        self.send(request).await?;
        Ok(())
    }

    /// Deletes every object matching the list options
    pub async fn delete_collection(
        &self,
        options: &DeleteOptions,
        list_options: &ListOptions,
    ) -> Result<(), AppError> {
        info!("Deleting collection of {}", K::PLURAL);
        let body = self.encode(options)?;
        let request = self
            .request(Method::DELETE)
            .params(list_options.to_query())
            .body(body);
        self.send(request).await?;
        Ok(())
    }

    /// Fetches the named object
    pub async fn get(&self, name: &str) -> Result<K, AppError> {
        debug!("Getting {} {}", K::KIND, name);
        let request = self.request(Method::GET).name(name);
        self.call(request).await
    }

    /// Lists objects matching the options
    pub async fn list(&self, options: &ListOptions) -> Result<ObjectList<K>, AppError> {
        debug!("Listing {}", K::PLURAL);
        let request = self.request(Method::GET).params(options.to_query());
        self.call(request).await
    }

    /// Opens a watch on objects matching the options
    pub async fn watch(&self, options: &ListOptions) -> Result<WatchStream<K>, AppError> {
        info!("Watching {}", K::PLURAL);
        let request = self
            .request(Method::GET)
            .param("watch", "true")
            .params(options.to_query());
        request.validate()?;
        let response = self.client.stream(request).await?;
        Ok(WatchStream::new(response))
    }

    /// Applies a patch document to the named object
    pub async fn patch(&self, name: &str, patch_type: PatchType, data: &[u8]) -> Result<K, AppError> {
        info!("Patching {} {}", K::KIND, name);
        let request = self
            .request(Method::PATCH)
            .name(name)
            .content_type(patch_type.content_type())
            .body(data.to_vec());
        self.call(request).await
    }

    fn request(&self, verb: Method) -> Request {
        Request::new(verb)
            .namespace(&self.namespace)
            .resource(K::PLURAL)
    }

    /// Encodes an object with `apiVersion` and `kind` filled in
    fn encode_object(&self, object: &K) -> Result<Vec<u8>, AppError> {
        let mut object = object.clone();
        let types = object.types_mut();
        types.api_version = self.client.api_version().to_string();
        types.kind = K::KIND.to_string();
        self.encode(&object)
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, AppError> {
        self.client
            .codecs()
            .encode(self.client.content_type(), value)
    }

    async fn send(&self, request: Request) -> Result<Vec<u8>, AppError> {
        request.validate()?;
        self.client.execute(request).await
    }

    async fn call<T: DeserializeOwned>(&self, request: Request) -> Result<T, AppError> {
        let body = self.send(request).await?;
        self.client
            .codecs()
            .decode(self.client.content_type(), &body)
    }
}

/// Stream of events from a watch call
///
/// The server writes one JSON encoded event per line and keeps the
/// connection open until the watch times out or is closed.
pub struct WatchStream<K> {
    response: Response,
    buffer: Vec<u8>,
    finished: bool,
    _kind: PhantomData<fn() -> K>,
}

impl<K: DeserializeOwned> WatchStream<K> {
    /// Wraps an open watch response
    pub fn new(response: Response) -> Self {
        Self {
            response,
            buffer: Vec::new(),
            finished: false,
            _kind: PhantomData,
        }
    }

    /// Next event, or `None` once the server closed the stream
    pub async fn next(&mut self) -> Option<Result<WatchEvent<K>, AppError>> {
        loop {
            if let Some(line) = self.take_line() {
                if line.iter().all(u8::is_ascii_whitespace) {
                    continue;
                }
                return Some(serde_json::from_slice(&line).map_err(AppError::from));
            }
            if self.finished {
                return None;
            }
            match self.response.chunk().await {
                Ok(Some(chunk)) => self.buffer.extend_from_slice(&chunk),
                Ok(None) => {
                    self.finished = true;
                    // A final event may arrive without a trailing newline.
                    if !self.buffer.is_empty() {
                        self.buffer.push(b'\n');
                    }
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(AppError::from(e)));
                }
            }
        }
    }

    fn take_line(&mut self) -> Option<Vec<u8>> {
        let end = self.buffer.iter().position(|byte| *byte == b'\n')?;
        let mut line: Vec<u8> = self.buffer.drain(..=end).collect();
        line.pop();
        Some(line)
    }
}
