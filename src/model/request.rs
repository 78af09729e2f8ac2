/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Transport-neutral description of one API call

use crate::error::AppError;
use crate::model::scheme::GroupVersion;
use reqwest::Method;

/// Builder for a request against a group-version's resource paths
///
/// Path segments are validated when set; the first invalid segment is kept
/// and reported by [`Request::path`].
#[derive(Debug, Clone)]
pub struct Request {
    verb: Method,
    namespace: Option<String>,
    resource: Option<String>,
    name: Option<String>,
    subresource: Option<String>,
    params: Vec<(String, String)>,
    body: Option<Vec<u8>>,
    content_type: Option<String>,
    error: Option<String>,
}

impl Request {
    /// Starts a request with the given verb
    pub fn new(verb: Method) -> Self {
        Self {
            verb,
            namespace: None,
            resource: None,
            name: None,
            subresource: None,
            params: Vec::new(),
            body: None,
            content_type: None,
            error: None,
        }
    }

    /// Scopes the request to a namespace; an empty namespace leaves it cluster scoped
    pub fn namespace(mut self, namespace: &str) -> Self {
        if !namespace.is_empty() {
            self.namespace = self.segment("namespace", namespace);
        }
        self
    }

    /// Sets the resource collection, e.g. `clusters`
    pub fn resource(mut self, resource: &str) -> Self {
        self.resource = self.segment("resource", resource);
        self
    }

    /// Targets a single named object
    pub fn name(mut self, name: &str) -> Self {
        if name.is_empty() {
            self.fail("resource name may not be empty".to_string());
        } else {
            self.name = self.segment("name", name);
        }
        self
    }

    /// Targets a subresource of the named object, e.g. `status`
    pub fn subresource(mut self, subresource: &str) -> Self {
        self.subresource = self.segment("subresource", subresource);
        self
    }

    /// Appends a query parameter
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends several query parameters
    pub fn params(mut self, params: Vec<(String, String)>) -> Self {
        self.params.extend(params);
        self
    }

    /// Attaches an already encoded body
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Overrides the `Content-Type` of the body
    pub fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = Some(content_type.to_string());
        self
    }

    /// HTTP verb
    pub fn verb(&self) -> &Method {
        &self.verb
    }

    /// Query parameters
    pub fn query(&self) -> &[(String, String)] {
        &self.params
    }

    /// Encoded body, if any
    pub fn payload(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// `Content-Type` override, if any
    pub fn content_type_override(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Checks that the request can be turned into a path
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(error) = &self.error {
            return Err(AppError::InvalidInput(error.clone()));
        }
        if self.resource.is_none() {
            return Err(AppError::InvalidInput("resource must be set".to_string()));
        }
        if self.subresource.is_some() && self.name.is_none() {
            return Err(AppError::InvalidInput(
                "subresource requires a resource name".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the path below the API root
    ///
    /// Layout: `{api_path}/{group}/{version}[/namespaces/{ns}]/{resource}[/{name}[/{subresource}]]`
    pub fn path(&self, api_path: &str, group_version: &GroupVersion) -> Result<String, AppError> {
        self.validate()?;
        let resource = self.resource.as_deref().unwrap_or_default();

        let mut path = api_path.trim_end_matches('/').to_string();
        if !group_version.group.is_empty() {
            path.push('/');
            path.push_str(&group_version.group);
        }
        path.push('/');
        path.push_str(&group_version.version);
        if let Some(namespace) = &self.namespace {
            path.push_str("/namespaces/");
            path.push_str(namespace);
        }
        path.push('/');
        path.push_str(resource);
        if let Some(name) = &self.name {
            path.push('/');
            path.push_str(name);
        }
        if let Some(subresource) = &self.subresource {
            path.push('/');
            path.push_str(subresource);
        }
        Ok(path)
    }

    fn segment(&mut self, what: &str, value: &str) -> Option<String> {
        match validate_path_segment(value) {
            Ok(()) => Some(value.to_string()),
            Err(reason) => {
                self.fail(format!("invalid {what} {value:?}: {reason}"));
                None
            }
        }
    }

    fn fail(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(message);
        }
    }
}

fn validate_path_segment(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("may not be empty");
    }
    if value == "." || value == ".." {
        return Err("may not be '.' or '..'");
    }
    if value.contains('/') {
        return Err("may not contain '/'");
    }
    if value.contains('%') {
        return Err("may not contain '%'");
    }
    Ok(())
}
