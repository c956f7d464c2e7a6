//! Declarative contributions a domain package hands to the host application.
//!
//! A package builds one [`DomainDescriptor`] and never touches it again; the registry
//! in `gamma-kernel` reads it once during bootstrap.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Metadata key the router reads to decide whether a page needs a session.
pub const META_REQUIRES_AUTH: &str = "requires_auth";
/// Metadata key naming the layout a page renders into.
pub const META_LAYOUT: &str = "layout";

/// Everything one domain package wants merged into the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDescriptor {
    name: String,
    routes: Vec<RouteSpec>,
    component_dirs: Vec<DirectorySpec>,
    import_dirs: Vec<DirectorySpec>,
}

impl DomainDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: Vec::new(),
            component_dirs: Vec::new(),
            import_dirs: Vec::new(),
        }
    }

    /// Appends a route; contribution order is preserved by the registry.
    #[must_use]
    pub fn route(mut self, route: RouteSpec) -> Self {
        self.routes.push(route);
        self
    }

    /// Adds a directory whose components are exposed to every page.
    #[must_use]
    pub fn components(mut self, dir: DirectorySpec) -> Self {
        self.component_dirs.push(dir);
        self
    }

    /// Adds a directory whose exports are auto-imported.
    #[must_use]
    pub fn imports(mut self, dir: DirectorySpec) -> Self {
        self.import_dirs.push(dir);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteSpec] {
        &self.routes
    }

    #[must_use]
    pub fn component_dirs(&self) -> &[DirectorySpec] {
        &self.component_dirs
    }

    #[must_use]
    pub fn import_dirs(&self) -> &[DirectorySpec] {
        &self.import_dirs
    }
}

/// Opaque reference to a renderable unit, resolved by the external renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single page route.
///
/// `path` is kept verbatim: dynamic segments (`:id`, `:slug?`, `[id]`) are the router's
/// business, and malformed patterns are not rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub name: String,
    pub path: String,
    pub component: ComponentRef,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, Value>,
}

impl RouteSpec {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        component: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            component: ComponentRef::new(component),
            meta: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn requires_auth(self) -> Self {
        self.meta(META_REQUIRES_AUTH, true)
    }

    #[must_use]
    pub fn layout(self, layout: &str) -> Self {
        self.meta(META_LAYOUT, layout)
    }

    /// Whether the `requires_auth` flag is set to `true`.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        self.meta.get(META_REQUIRES_AUTH).and_then(Value::as_bool).unwrap_or(false)
    }

    /// The path with every dynamic segment name erased.
    ///
    /// `/blog/:id` and `/blog/[slug]` both become `/blog/:`, so two routes that the router
    /// could not tell apart compare equal.
    #[must_use]
    pub fn path_shape(&self) -> String {
        shape_of(&self.segments())
    }

    /// Every shape the route matches: [`RouteSpec::path_shape`], plus the shape without a
    /// trailing optional segment (`:slug?`, `[[slug]]`) when there is one.
    ///
    /// `/blog/:slug?` yields `/blog/:` and `/blog`.
    #[must_use]
    pub fn path_shapes(&self) -> Vec<String> {
        let segments = self.segments();
        let mut shapes = vec![shape_of(&segments)];
        if segments.last().is_some_and(|segment| is_optional(segment)) {
            shapes.push(shape_of(&segments[..segments.len() - 1]));
        }
        shapes
    }

    fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|segment| !segment.is_empty()).collect()
    }
}

fn is_optional(segment: &str) -> bool {
    (segment.starts_with(':') && segment.ends_with('?'))
        || (segment.starts_with("[[") && segment.ends_with("]]"))
}

fn shape_of(segments: &[&str]) -> String {
    let erased: Vec<&str> = segments
        .iter()
        .map(|segment| {
            let dynamic =
                segment.starts_with(':') || (segment.starts_with('[') && segment.ends_with(']'));
            if dynamic { ":" } else { segment }
        })
        .collect();

    format!("/{}", erased.join("/"))
}

/// A directory whose contents are exposed under an optional name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectorySpec {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
}

impl DirectorySpec {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), prefix: None, global: None }
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub const fn global(mut self, global: bool) -> Self {
        self.global = Some(global);
        self
    }

    /// `true` when contributed names land in the shared namespace without a prefix.
    #[must_use]
    pub fn is_unprefixed(&self) -> bool {
        self.prefix.as_deref().is_none_or(str::is_empty)
    }
}
