/*
 * Responsibility
 * - Route registration (public / private) and the per-request identity gate
 * - Turning the registrations into an axum Router and serving it
 *
 * Per request
 * - Received → identity extracted
 *   - principal present → handler(req, Some(principal))
 *   - absent, public route → handler(req, None)
 *   - absent, private route → 204 No Content, empty body; handler never runs
 *
 * Notes
 * - Registration mistakes (unsupported verb, malformed or overlapping path) are logged and the
 *   route is skipped.
 *   They never abort startup and never surface at request time.
 * - `listen*` consumes the manager, so registration is complete before traffic is accepted.
 * - No timeouts here; those belong to the server in front of us.
 */
use std::fmt;
use std::io;
use std::sync::Arc;

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::MethodRouter;
use thiserror::Error;

use super::endpoint::{EndpointHandler, RouteHandler, Verb};
use super::identity;
use crate::middleware;

pub const DEFAULT_LISTEN_ADDR: &str = ":80";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Handler runs with or without a principal.
    Public,
    /// Requests without a principal are answered with 204 before the handler runs.
    Private,
}

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server error")]
    Serve(#[from] io::Error),
}

struct Route {
    verb: Verb,
    path: String,
    access: Access,
    handler: Arc<dyn RouteHandler>,
}

#[derive(Default)]
pub struct DispatchManager {
    routes: Vec<Route>,
    // same matcher axum routes with; a pattern it refuses is never handed to axum
    paths: matchit::Router<()>,
    body_limit: Option<usize>,
}

impl DispatchManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps request bodies for the served router (see `middleware::http`).
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = Some(bytes);
        self
    }

    pub fn register_public_route(&mut self, endpoint: EndpointHandler) {
        self.register(endpoint, Access::Public);
    }

    pub fn register_private_route(&mut self, endpoint: EndpointHandler) {
        self.register(endpoint, Access::Private);
    }

    fn register(&mut self, endpoint: EndpointHandler, access: Access) {
        let (method, path, handler) = endpoint.into_parts();
        tracing::debug!(method = %method, path = %path, ?access, "registering route");

        let verb = match Verb::try_from(&method) {
            Ok(verb) => verb,
            Err(err) => {
                tracing::error!(error = %err, path = %path, "route skipped");
                return;
            }
        };

        if let Err(reason) = check_path(&path) {
            tracing::error!(method = %verb, path = %path, reason, "route skipped");
            return;
        }

        if !self.routes.iter().any(|r| r.path == path) {
            let mut paths = self.paths.clone();
            if let Err(err) = paths.insert(path.as_str(), ()) {
                tracing::error!(method = %verb, path = %path, error = %err, "route skipped");
                return;
            }
            self.paths = paths;
        }

        let route = Route {
            verb,
            path,
            access,
            handler,
        };

        match self
            .routes
            .iter_mut()
            .find(|r| r.verb == route.verb && r.path == route.path)
        {
            Some(existing) => {
                tracing::warn!(method = %verb, path = %route.path, "route replaced");
                *existing = route;
            }
            None => self.routes.push(route),
        }
    }

    /// Registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = (Verb, &str, Access)> + '_ {
        self.routes
            .iter()
            .map(|r| (r.verb, r.path.as_str(), r.access))
    }

    pub fn into_router(self) -> Router {
        let mut by_path: Vec<(String, Vec<Route>)> = Vec::new();
        for route in self.routes {
            match by_path.iter_mut().find(|(path, _)| *path == route.path) {
                Some((_, routes)) => routes.push(route),
                None => by_path.push((route.path.clone(), vec![route])),
            }
        }

        by_path
            .into_iter()
            .fold(Router::new(), |router, (path, routes)| {
                let methods = routes
                    .into_iter()
                    .fold(MethodRouter::new(), |methods, route| {
                        methods.merge(gate(route))
                    });
                router.route(&path, methods)
            })
    }

    pub async fn listen(self) -> Result<(), ServeError> {
        self.listen_on(DEFAULT_LISTEN_ADDR).await
    }

    /// Serves on `addr`. A leading `:` (e.g. `":8080"`) binds all interfaces.
    /// Blocks until the server stops or fails.
    pub async fn listen_on(self, addr: &str) -> Result<(), ServeError> {
        let addr = bind_addr(addr);
        let body_limit = self.body_limit;
        let app = middleware::http::apply(self.into_router(), body_limit);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServeError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!(addr = %addr, "listening");
        axum::serve(listener, app).await?;
        Ok(())
    }
}

impl fmt::Debug for DispatchManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DispatchManager")
            .field(
                "routes",
                &self
                    .routes()
                    .map(|(verb, path, access)| format!("{verb} {path} ({access:?})"))
                    .collect::<Vec<_>>(),
            )
            .field("body_limit", &self.body_limit)
            .finish()
    }
}

fn gate(route: Route) -> MethodRouter {
    let Route {
        verb,
        access,
        handler,
        ..
    } = route;
    axum::routing::on(verb.method_filter(), move |req: Request| {
        dispatch(Arc::clone(&handler), access, req)
    })
}

async fn dispatch(handler: Arc<dyn RouteHandler>, access: Access, req: Request) -> Response {
    let principal = identity::resolve_principal(req.headers());
    match principal {
        Some(principal) => handler.call(req, Some(principal)).await,
        None if access == Access::Private => StatusCode::NO_CONTENT.into_response(),
        None => handler.call(req, None).await,
    }
}

fn check_path(path: &str) -> Result<(), &'static str> {
    if !path.starts_with('/') {
        return Err("path must start with '/'");
    }
    if path
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err("use {name} / {*name} for captures");
    }
    Ok(())
}

fn bind_addr(addr: &str) -> String {
    match addr.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None => addr.to_string(),
    }
}
