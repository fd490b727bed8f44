//! Declarative route tables.
//!
//! Every proxied endpoint is one `RouteDescriptor`: the local verb and path,
//! the remote path template, which query parameters are forwarded, and the
//! message used when the remote call fails without a usable error body.
//! `router()` turns the tables into axum routes served by one generic handler.

use std::collections::{BTreeMap, HashMap};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::Method,
    routing::{MethodFilter, MethodRouter},
    Router,
};

use crate::handlers;
use crate::state::AppState;

pub mod dashboard;
pub mod meetings;
pub mod users;
pub mod webinars;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Patch => Method::PATCH,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
        }
    }

    pub fn filter(self) -> MethodFilter {
        match self {
            Verb::Get => MethodFilter::GET,
            Verb::Post => MethodFilter::POST,
            Verb::Patch => MethodFilter::PATCH,
            Verb::Put => MethodFilter::PUT,
            Verb::Delete => MethodFilter::DELETE,
        }
    }
}

/// A group of routes mounted under `/api/<prefix>`.
#[derive(Debug)]
pub struct RouteGroup {
    pub prefix: &'static str,
    pub routes: &'static [RouteDescriptor],
}

pub static GROUPS: &[RouteGroup] = &[
    RouteGroup { prefix: "users", routes: users::ROUTES },
    RouteGroup { prefix: "meetings", routes: meetings::ROUTES },
    RouteGroup { prefix: "webinars", routes: webinars::ROUTES },
    RouteGroup { prefix: "dashboard", routes: dashboard::ROUTES },
];

#[derive(Debug)]
pub struct RouteDescriptor {
    pub verb: Verb,
    /// Local path relative to the group prefix, `:name` marks a parameter.
    pub path: &'static str,
    /// Remote path, `{name}` is replaced by the matching local parameter.
    pub remote: &'static str,
    /// Query parameters copied from the inbound request when present.
    pub query: &'static [&'static str],
    /// Query parameters always sent to the remote API.
    pub fixed_query: &'static [(&'static str, &'static str)],
    /// Whether the inbound JSON body is forwarded.
    pub body: bool,
    /// Message template for failures without an upstream message.
    pub failure: &'static str,
}

impl RouteDescriptor {
    const fn new(verb: Verb, path: &'static str, remote: &'static str) -> Self {
        Self {
            verb,
            path,
            remote,
            query: &[],
            fixed_query: &[],
            body: false,
            failure: "Error",
        }
    }

    pub const fn get(path: &'static str, remote: &'static str) -> Self {
        Self::new(Verb::Get, path, remote)
    }

    pub const fn post(path: &'static str, remote: &'static str) -> Self {
        Self::new(Verb::Post, path, remote).with_body()
    }

    pub const fn patch(path: &'static str, remote: &'static str) -> Self {
        Self::new(Verb::Patch, path, remote).with_body()
    }

    pub const fn put(path: &'static str, remote: &'static str) -> Self {
        Self::new(Verb::Put, path, remote).with_body()
    }

    pub const fn delete(path: &'static str, remote: &'static str) -> Self {
        Self::new(Verb::Delete, path, remote)
    }

    pub const fn query(mut self, names: &'static [&'static str]) -> Self {
        self.query = names;
        self
    }

    pub const fn fixed_query(mut self, pairs: &'static [(&'static str, &'static str)]) -> Self {
        self.fixed_query = pairs;
        self
    }

    pub const fn failure(mut self, message: &'static str) -> Self {
        self.failure = message;
        self
    }

    const fn with_body(mut self) -> Self {
        self.body = true;
        self
    }

    /// Names of the local path parameters, in path order.
    pub fn param_names(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix(':'))
            .collect()
    }

    /// Render the remote path into segments, one per `/`-separated part.
    ///
    /// Values are kept raw here; the remote client percent-encodes each segment.
    pub fn remote_segments(&self, params: &[(&str, String)]) -> Result<Vec<String>, String> {
        self.remote
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match placeholder(segment) {
                Some(name) => lookup(params, name),
                None => Ok(segment.to_string()),
            })
            .collect()
    }

    /// The failure message with `{name}` placeholders filled in.
    pub fn failure_message(&self, params: &[(&str, String)]) -> String {
        render(self.failure, params)
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

fn lookup(params: &[(&str, String)], name: &str) -> Result<String, String> {
    params
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.clone())
        .ok_or_else(|| name.to_string())
}

fn render(template: &str, params: &[(&str, String)]) -> String {
    params.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{}}}", name), value)
    })
}

/// Full local path with parameters renamed by position (`:p0`, `:p1`, ...).
///
/// Routes like `GET /meetings/:meetingId` and `POST /meetings/:userId` share
/// one axum path this way; each descriptor keeps its own names.
fn axum_path(prefix: &str, path: &str) -> String {
    let mut index = 0;
    let normalized = path
        .split('/')
        .map(|segment| {
            if segment.starts_with(':') {
                let renamed = format!(":p{}", index);
                index += 1;
                renamed
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/");
    format!("/api/{}{}", prefix, normalized)
}

/// Build the proxy routes for every group.
pub fn router() -> Router<AppState> {
    let mut paths: BTreeMap<String, MethodRouter<AppState>> = BTreeMap::new();

    for group in GROUPS {
        for route in group.routes {
            let path = axum_path(group.prefix, route.path);
            let handler = move |state: State<AppState>,
                                params: Option<Path<Vec<(String, String)>>>,
                                query: Query<HashMap<String, String>>,
                                body: Bytes| {
                handlers::proxy(route, state, params, query, body)
            };
            let method_router = paths.remove(&path).unwrap_or_else(MethodRouter::new);
            paths.insert(path, method_router.on(route.verb.filter(), handler));
        }
    }

    paths
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| router.route(&path, method_router))
}
