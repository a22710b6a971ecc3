use std::sync::{Arc, RwLock};

use http::Method;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::handler::{Handler, HandlerThunk, ParamVec, RequestContext};
use crate::pattern::{PathPattern, PatternError};

/// One registered mock endpoint
///
/// Immutable after construction: the matcher and parameter names are
/// compiled once from the template and never recompiled.
#[derive(Clone)]
pub struct Route {
    method: Method,
    pattern: PathPattern,
    handler: Handler,
}

impl Route {
    /// The route's HTTP method
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The original URL template
    #[must_use]
    pub fn template(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Ordered mock route table
///
/// Append-only except for [`clear`](Self::clear). An explicit object with
/// no process-global state: independent registries never see each other's
/// routes. Shared between an engine handle and its wrapped transports via
/// `Arc`.
#[derive(Default)]
pub struct Registry {
    routes: RwLock<Vec<Route>>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(Vec::new()),
        }
    }

    /// Compile `template` and append a route bound to `handler`
    ///
    /// No uniqueness constraint: routes with an identical method and
    /// template coexist, ordered by registration time.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] when the template is malformed; the
    /// registry is left unchanged.
    pub fn register<H>(&self, method: Method, template: &str, handler: H) -> Result<(), PatternError>
    where
        H: Fn(RequestContext) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        let pattern = PathPattern::compile(template)?;
        let route = Route {
            method,
            pattern,
            handler: Arc::new(handler),
        };
        let mut routes = self.routes.write().expect("route table lock poisoned");
        debug!(
            method = %route.method,
            template = %template,
            routes_count = routes.len() + 1,
            "Mock route registered"
        );
        routes.push(route);
        Ok(())
    }

    /// Remove every registered route. Idempotent.
    pub fn clear(&self) {
        let mut routes = self.routes.write().expect("route table lock poisoned");
        let removed = routes.len();
        routes.clear();
        debug!(removed, "Mock route table cleared");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.read().expect("route table lock poisoned").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Print all registered routes to stdout
    ///
    /// Useful for debugging a test suite whose requests pass through when
    /// they were expected to be intercepted.
    pub fn dump_routes(&self) {
        let routes = self.routes.read().expect("route table lock poisoned");
        println!("[routes] count={}", routes.len());
        for route in routes.iter() {
            println!("[route] {} {}", route.method, route.pattern.as_str());
        }
    }

    /// Resolve a request to the first matching route's handler
    ///
    /// Scans in registration order; method equality is checked before the
    /// matcher runs. On a match, returns a one-shot thunk that owns the
    /// handler and a freshly built [`RequestContext`]; invoking the thunk
    /// runs the handler. No match returns `None`, never an error.
    ///
    /// An absent body reaches the handler as an empty JSON object.
    #[must_use]
    pub fn resolve(&self, method: &Method, url: &str, body: Option<&Value>) -> Option<HandlerThunk> {
        let routes = self.routes.read().expect("route table lock poisoned");
        for route in routes.iter() {
            if route.method != *method {
                continue;
            }
            let Some(captures) = route.pattern.captures(url) else {
                continue;
            };

            let params = extract_params(route.pattern.param_names(), captures);
            info!(
                method = %method,
                url = %url,
                template = %route.pattern.as_str(),
                params = ?params,
                "Mock route matched"
            );

            let context = RequestContext {
                url: url.to_string(),
                params,
                body: body.cloned().unwrap_or_else(|| Value::Object(Map::new())),
            };
            let handler = Arc::clone(&route.handler);
            return Some(Box::new(move || handler(context)));
        }

        debug!(method = %method, url = %url, "No mock route matched");
        None
    }
}

/// Zip parameter names with their captured values.
///
/// A present capture upserts its name; a missing (empty) capture is
/// dropped, so it never clobbers a value an earlier capture of the same
/// name already produced. For `/a/:x/:x` against `/a/foo/` the retained
/// `x` is `"foo"`.
fn extract_params(names: &[String], captures: Vec<Option<String>>) -> ParamVec {
    let mut params = ParamVec::new();
    for (name, capture) in names.iter().zip(captures) {
        let Some(value) = capture else { continue };
        match params.iter_mut().find(|entry| entry.0 == *name) {
            Some(entry) => entry.1 = value,
            None => params.push((name.clone(), value)),
        }
    }
    params
}
