//! Rebuildable request description
//!
//! The session pipeline may need to send the same request twice (before and
//! after a token refresh), so a request is kept as plain data and turned into
//! a reqwest builder on every attempt.

use bytes::Bytes;
use carcatalogue_domain::constants::{LOGIN_PATH, REFRESH_PATH, REGISTRATION_PATH};
use carcatalogue_domain::{CatalogueError, FileUpload, QueryPairs};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;

/// One part of a multipart body.
#[derive(Debug, Clone)]
pub enum MultipartPart {
    /// A JSON document sent with `application/json`.
    Json { name: String, value: serde_json::Value },
    /// A binary file.
    File { name: String, file_name: String, content_type: String, bytes: Bytes },
}

impl MultipartPart {
    pub fn json<T: Serialize>(name: impl Into<String>, value: &T) -> Result<Self, CatalogueError> {
        let value = serde_json::to_value(value).map_err(|err| CatalogueError::from(InfraError::from(err)))?;
        Ok(Self::Json { name: name.into(), value })
    }

    pub fn file(name: impl Into<String>, upload: FileUpload) -> Self {
        Self::File {
            name: name.into(),
            file_name: upload.file_name,
            content_type: upload.content_type,
            bytes: Bytes::from(upload.bytes),
        }
    }

    fn to_part(&self) -> Result<(String, Part), reqwest::Error> {
        match self {
            Self::Json { name, value } => {
                let part = Part::text(value.to_string()).mime_str("application/json")?;
                Ok((name.clone(), part))
            }
            Self::File { name, file_name, content_type, bytes } => {
                let part = Part::stream_with_length(bytes.clone(), bytes.len() as u64)
                    .file_name(file_name.clone())
                    .mime_str(content_type)?;
                Ok((name.clone(), part))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<MultipartPart>),
}

/// Method, path, query and body of one remote call.
///
/// `path` is relative to the configured base URL (`api/car/12`).
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: QueryPairs,
    body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: QueryPairs::new(), body: RequestBody::Empty }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append query pairs. Repeated names are sent repeated.
    #[must_use]
    pub fn query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    #[must_use]
    pub fn query_pair(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Serialize `body` as the JSON payload.
    ///
    /// # Errors
    /// Returns `CatalogueError::Decode` when `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, CatalogueError> {
        let value = serde_json::to_value(body).map_err(|err| CatalogueError::from(InfraError::from(err)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    #[must_use]
    pub fn multipart(mut self, parts: Vec<MultipartPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &QueryPairs {
        &self.query
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Login, registration and refresh establish the session themselves and
    /// go out without a bearer header.
    pub fn bypasses_auth(&self) -> bool {
        let path = self.path.trim_matches('/');
        path == LOGIN_PATH || path == REGISTRATION_PATH || path == REFRESH_PATH
    }

    /// Absolute URL of this request under `base_url`.
    ///
    /// # Errors
    /// Returns `CatalogueError::Config` when the joined URL is invalid.
    pub fn url(&self, base_url: &Url) -> Result<Url, CatalogueError> {
        base_url
            .join(self.path.trim_start_matches('/'))
            .map_err(|err| CatalogueError::from(InfraError::from(err)))
    }

    /// Fresh reqwest builder for one attempt, optionally with a bearer token.
    pub(crate) fn to_builder(
        &self,
        http: &HttpClient,
        base_url: &Url,
        bearer: Option<&str>,
    ) -> Result<RequestBuilder, CatalogueError> {
        let mut builder = http.request(self.method.clone(), self.url(base_url)?);
        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match &self.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => {
                let mut form = Form::new();
                for part in parts {
                    let (name, part) =
                        part.to_part().map_err(|err| CatalogueError::from(InfraError::from(err)))?;
                    form = form.part(name, part);
                }
                builder.multipart(form)
            }
        };
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn base() -> Url {
        Url::parse("http://cars.local/").unwrap()
    }

    #[test]
    fn session_endpoints_bypass_auth() {
        assert!(ApiRequest::post("api/auth").bypasses_auth());
        assert!(ApiRequest::post("/api/registration").bypasses_auth());
        assert!(ApiRequest::post("api/refresh").bypasses_auth());
        assert!(!ApiRequest::get("api/auth/extra").bypasses_auth());
        assert!(!ApiRequest::get("api/profile").bypasses_auth());
    }

    #[test]
    fn url_joins_relative_path() {
        let request = ApiRequest::get("/api/car/12");
        assert_eq!(request.url(&base()).unwrap().as_str(), "http://cars.local/api/car/12");
    }

    #[test]
    fn repeated_query_names_are_kept() {
        let http = HttpClient::builder().build().unwrap();
        let request = ApiRequest::get("api/car/catalogue")
            .query_pair("brand", "BMW")
            .query_pair("brand", "Audi")
            .query_pair("page", 0);
        let built = request.to_builder(&http, &base(), None).unwrap().build().unwrap();
        assert_eq!(built.url().query(), Some("brand=BMW&brand=Audi&page=0"));
    }

    #[test]
    fn bearer_and_json_body_are_attached() {
        let http = HttpClient::builder().build().unwrap();
        let request = ApiRequest::post("api/contracts").json(&json!({"carId": 3})).unwrap();
        let built = request.to_builder(&http, &base(), Some("tok")).unwrap().build().unwrap();

        assert_eq!(built.headers()["authorization"], "Bearer tok");
        assert_eq!(built.headers()["content-type"], "application/json");
        let body = built.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(body, br#"{"carId":3}"#);
    }

    #[test]
    fn multipart_request_can_be_built_twice() {
        let http = HttpClient::builder().build().unwrap();
        let request = ApiRequest::post("api/admin/cars").multipart(vec![
            MultipartPart::json("car", &json!({"vin": "X"})).unwrap(),
            MultipartPart::file("image", FileUpload::new("car.jpg", "image/jpeg", vec![1, 2, 3])),
        ]);

        for _ in 0..2 {
            let built = request.to_builder(&http, &base(), None).unwrap().build().unwrap();
            let content_type = built.headers()["content-type"].to_str().unwrap().to_string();
            assert!(content_type.starts_with("multipart/form-data"));
        }
    }
}
