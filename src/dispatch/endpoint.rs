/*
 * Responsibility
 * - Route registration records (EndpointHandler) and their constructors: get/post/put/delete
 * - The handler contract: (request, optional principal) -> response
 *
 * Notes
 * - Any `Fn(Request, Option<Principal>) -> impl Future<Output: IntoResponse>` is a handler,
 *   so plain `async fn`s register directly.
 * - Records are built at startup and never mutated afterwards.
 */
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use axum::routing::MethodFilter;
use thiserror::Error;

use crate::principal::Principal;

pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

pub trait RouteHandler: Send + Sync + 'static {
    fn call(&self, req: Request, principal: Option<Principal>) -> HandlerFuture;
}

impl<F, Fut> RouteHandler for F
where
    F: Fn(Request, Option<Principal>) -> Fut + Send + Sync + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: IntoResponse,
{
    fn call(&self, req: Request, principal: Option<Principal>) -> HandlerFuture {
        let fut = self(req, principal);
        Box::pin(async move { fut.await.into_response() })
    }
}

/// Verbs the dispatch layer knows how to route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported method: {0}")]
pub struct UnsupportedVerb(pub Method);

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    pub(crate) fn method_filter(self) -> MethodFilter {
        match self {
            Self::Get => MethodFilter::GET,
            Self::Post => MethodFilter::POST,
            Self::Put => MethodFilter::PUT,
            Self::Delete => MethodFilter::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&Method> for Verb {
    type Error = UnsupportedVerb;

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        match *method {
            Method::GET => Ok(Self::Get),
            Method::POST => Ok(Self::Post),
            Method::PUT => Ok(Self::Put),
            Method::DELETE => Ok(Self::Delete),
            _ => Err(UnsupportedVerb(method.clone())),
        }
    }
}

#[derive(Clone)]
pub struct EndpointHandler {
    method: Method,
    path: String,
    handler: Arc<dyn RouteHandler>,
}

impl EndpointHandler {
    /// Builds a record for an arbitrary method.
    /// Methods other than GET/POST/PUT/DELETE are refused when the record is registered.
    pub fn new(method: Method, path: impl Into<String>, handler: impl RouteHandler) -> Self {
        Self {
            method,
            path: path.into(),
            handler: Arc::new(handler),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn into_parts(self) -> (Method, String, Arc<dyn RouteHandler>) {
        (self.method, self.path, self.handler)
    }
}

impl fmt::Debug for EndpointHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointHandler")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

pub fn get(path: impl Into<String>, handler: impl RouteHandler) -> EndpointHandler {
    EndpointHandler::new(Method::GET, path, handler)
}

pub fn post(path: impl Into<String>, handler: impl RouteHandler) -> EndpointHandler {
    EndpointHandler::new(Method::POST, path, handler)
}

pub fn put(path: impl Into<String>, handler: impl RouteHandler) -> EndpointHandler {
    EndpointHandler::new(Method::PUT, path, handler)
}

pub fn delete(path: impl Into<String>, handler: impl RouteHandler) -> EndpointHandler {
    EndpointHandler::new(Method::DELETE, path, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn noop(_req: Request, _principal: Option<Principal>) -> StatusCode {
        StatusCode::OK
    }

    #[test]
    fn constructors_set_method_and_path() {
        assert_eq!(get("/a", noop).method(), &Method::GET);
        assert_eq!(post("/b", noop).method(), &Method::POST);
        assert_eq!(put("/c", noop).method(), &Method::PUT);
        assert_eq!(delete("/d", noop).method(), &Method::DELETE);
        assert_eq!(delete("/d", noop).path(), "/d");
    }

    #[test]
    fn verb_resolution() {
        assert_eq!(Verb::try_from(&Method::PUT), Ok(Verb::Put));
        assert_eq!(
            Verb::try_from(&Method::PATCH),
            Err(UnsupportedVerb(Method::PATCH))
        );
        assert_eq!(Verb::Delete.to_string(), "DELETE");
    }

    #[tokio::test]
    async fn closures_are_handlers() {
        let handler = |_req: Request, principal: Option<Principal>| async move {
            if principal.is_some() {
                StatusCode::OK
            } else {
                StatusCode::ACCEPTED
            }
        };
        let endpoint = get("/x", handler);
        let (_, _, handler) = endpoint.into_parts();

        let res = handler.call(Request::new(axum::body::Body::empty()), None).await;
        assert_eq!(res.status(), StatusCode::ACCEPTED);
    }
}
