use contracts::system::http::{ApiRequest, ApiResponse, Method};
use std::fmt;
use std::sync::Arc;

/// Handler signature: request plus the parameters captured from its path
pub type Handler = Arc<dyn Fn(&ApiRequest, &PathParams) -> ApiResponse + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Literal path with optional `:name` segments, e.g. `/admin/news/delete/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                _ => Segment::Literal(segment.to_string()),
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a request path (query string ignored).
    ///
    /// Segment counts must be equal, literals must be equal, and a parameter
    /// matches exactly one non-empty segment.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let path = path.split('?').next().unwrap_or(path);
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Param(name) if !part.is_empty() => {
                    params.0.push((name.clone(), part.to_string()));
                }
                _ => return None,
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parameters captured by a [`PathPattern`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

struct Route {
    method: Method,
    pattern: PathPattern,
    handler: Handler,
}

/// Ordered route table; the first matching route answers
#[derive(Default, Clone)]
pub struct MockRegistry {
    routes: Vec<Arc<Route>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the handler for `method` + `pattern`
    pub fn route<F>(mut self, method: Method, pattern: &str, handler: F) -> Self
    where
        F: Fn(&ApiRequest, &PathParams) -> ApiResponse + Send + Sync + 'static,
    {
        self.set_handler(method, pattern, handler);
        self
    }

    /// Replace the handler of an existing route, or append a new route.
    ///
    /// Used by tests to turn a canned success into a failure.
    pub fn set_handler<F>(&mut self, method: Method, pattern: &str, handler: F)
    where
        F: Fn(&ApiRequest, &PathParams) -> ApiResponse + Send + Sync + 'static,
    {
        let route = Arc::new(Route {
            method,
            pattern: PathPattern::parse(pattern),
            handler: Arc::new(handler),
        });
        match self
            .routes
            .iter()
            .position(|r| r.method == method && r.pattern.as_str() == pattern)
        {
            Some(index) => self.routes[index] = route,
            None => self.routes.push(route),
        }
    }

    /// Answer `request`, or `None` when no route matches
    pub fn handle(&self, request: &ApiRequest) -> Option<ApiResponse> {
        self.routes.iter().find_map(|route| {
            if route.method != request.method {
                return None;
            }
            let params = route.pattern.matches(&request.path)?;
            Some((route.handler)(request, &params))
        })
    }

    /// Pattern of the route that would answer `method` + `path`
    pub fn matched_pattern(&self, method: Method, path: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route.method == method && route.pattern.matches(path).is_some())
            .map(|route| route.pattern.as_str())
    }

    /// Registered `(method, pattern)` pairs, in matching order
    pub fn routes(&self) -> Vec<(Method, String)> {
        self.routes
            .iter()
            .map(|route| (route.method, route.pattern.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for MockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockRegistry")
            .field("routes", &self.routes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(_: &ApiRequest, _: &PathParams) -> ApiResponse {
        ApiResponse::new(200, "ok")
    }

    #[test]
    fn test_literal_pattern_is_exact() {
        let pattern = PathPattern::parse("/admin/news");
        assert!(pattern.matches("/admin/news").is_some());
        assert!(pattern.matches("/admin/news?page=2").is_some());
        assert!(pattern.matches("/admin/news/").is_none());
        assert!(pattern.matches("/admin/newsx").is_none());
        assert!(pattern.matches("/admin").is_none());
    }

    #[test]
    fn test_trailing_param_captures_one_segment() {
        let pattern = PathPattern::parse("/admin/agendas/updateStatus/:id");
        let params = pattern.matches("/admin/agendas/updateStatus/7").unwrap();
        assert_eq!(params.get("id"), Some("7"));
        assert!(pattern.matches("/admin/agendas/updateStatus/").is_none());
        assert!(pattern.matches("/admin/agendas/updateStatus/7/8").is_none());
        assert!(pattern.matches("/admin/agendas/delete/7").is_none());
    }

    #[test]
    fn test_method_must_match() {
        let registry = MockRegistry::new().route(Method::Post, "/admin/login", ok);
        assert!(registry.handle(&ApiRequest::post("/admin/login")).is_some());
        assert!(registry.handle(&ApiRequest::get("/admin/login")).is_none());
        assert!(registry.handle(&ApiRequest::post("/admin/logout")).is_none());
    }

    #[test]
    fn test_set_handler_replaces_route() {
        let mut registry = MockRegistry::new().route(Method::Get, "/admin/news", ok);
        registry.set_handler(Method::Get, "/admin/news", |_, _| ApiResponse::new(500, "boom"));
        assert_eq!(registry.len(), 1);

        let response = registry.handle(&ApiRequest::get("/admin/news")).unwrap();
        assert_eq!(response.status, 500);
    }

    #[test]
    fn test_matched_pattern() {
        let registry = MockRegistry::new().route(Method::Post, "/admin/news/delete/:id", ok);
        assert_eq!(
            registry.matched_pattern(Method::Post, "/admin/news/delete/3"),
            Some("/admin/news/delete/:id")
        );
        assert_eq!(registry.matched_pattern(Method::Get, "/admin/news/delete/3"), None);
    }
}
