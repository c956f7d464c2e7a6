//! Merges the descriptors of every domain package into one [`Manifest`].
//!
//! Registration only accumulates. Collisions between routes are looked at when the
//! registry is validated or finished, where a [`MergePolicy`] decides what survives.

use fxhash::{FxHashMap, FxHashSet};
use gamma_domain::config::MergePolicy;
use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};
use gamma_domain::manifest::Manifest;
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, info, warn};

#[gamma_derive::gamma_error]
pub enum RegistryError {
    /// Two routes share a name.
    #[error(
        "Duplicate route name '{name}' registered by '{first}' and '{second}'{}",
        format_context(.context)
    )]
    DuplicateName { name: String, first: String, second: String, context: Option<Cow<'static, str>> },

    /// Two routes resolve to the same path once parameter names are ignored.
    #[error(
        "Duplicate route path '{path}' registered by '{first}' and '{second}'{}",
        format_context(.context)
    )]
    DuplicatePath { path: String, first: String, second: String, context: Option<Cow<'static, str>> },

    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// What two colliding routes have in common.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Name,
    Path,
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Name => "name",
            Self::Path => "path",
        })
    }
}

/// A pair of routes the router could not tell apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub kind: CollisionKind,
    /// The shared name, or the shared path shape.
    pub key: String,
    /// Domain that registered the earlier route.
    pub first: String,
    /// Domain that registered the later route.
    pub second: String,
}

impl From<Collision> for RegistryError {
    fn from(c: Collision) -> Self {
        match c.kind {
            CollisionKind::Name => {
                Self::DuplicateName { name: c.key, first: c.first, second: c.second, context: None }
            },
            CollisionKind::Path => {
                Self::DuplicatePath { path: c.key, first: c.first, second: c.second, context: None }
            },
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    /// Index into `ModuleRegistry::domains`.
    domain: usize,
    /// Primary shape first, then the shape without a trailing optional segment.
    shapes: Vec<String>,
    route: RouteSpec,
}

/// Accumulates descriptors in registration order.
///
/// * Routes are appended as given; registering a descriptor twice doubles its routes.
/// * Directory specs are sets: an identical spec is kept once, at its first position.
/// * No path is validated; malformed patterns are the router's concern.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    domains: Vec<String>,
    entries: Vec<Entry>,
    components: Vec<DirectorySpec>,
    imports: Vec<DirectorySpec>,
}

impl ModuleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: &DomainDescriptor) -> &mut Self {
        let domain = self.domains.len();
        self.domains.push(descriptor.name().to_owned());

        self.entries.extend(descriptor.routes().iter().map(|route| Entry {
            domain,
            shapes: route.path_shapes(),
            route: route.clone(),
        }));

        let components = insert_unique(&mut self.components, descriptor.component_dirs());
        let imports = insert_unique(&mut self.imports, descriptor.import_dirs());

        debug!(
            domain = descriptor.name(),
            routes = descriptor.routes().len(),
            components,
            imports,
            "Domain registered"
        );
        self
    }

    /// Registers every descriptor in iteration order.
    pub fn register_all<'a, I>(&mut self, descriptors: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a DomainDescriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor);
        }
        self
    }

    /// Names of registered domains, one per `register` call.
    #[must_use]
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Accumulated routes before any collision handling.
    pub fn routes(&self) -> impl ExactSizeIterator<Item = &RouteSpec> {
        self.entries.iter().map(|entry| &entry.route)
    }

    #[must_use]
    pub fn component_dirs(&self) -> &[DirectorySpec] {
        &self.components
    }

    #[must_use]
    pub fn import_dirs(&self) -> &[DirectorySpec] {
        &self.imports
    }

    /// Every colliding pair, in the order the later route was registered.
    ///
    /// Each later route is reported against the first route it collides with; a route
    /// clashing on both name and path is reported twice. A route with a trailing optional
    /// segment also claims the path without it, so `/blog/:slug?` collides with `/blog`.
    #[must_use]
    pub fn collisions(&self) -> Vec<Collision> {
        let mut names: FxHashMap<&str, usize> = FxHashMap::default();
        let mut shapes: FxHashMap<&str, usize> = FxHashMap::default();
        let mut found = Vec::new();

        for entry in &self.entries {
            if let Some(&first) = names.get(entry.route.name.as_str()) {
                found.push(self.collision(CollisionKind::Name, &entry.route.name, first, entry.domain));
            } else {
                names.insert(&entry.route.name, entry.domain);
            }

            let taken = entry
                .shapes
                .iter()
                .find_map(|shape| shapes.get(shape.as_str()).map(|&first| (shape, first)));
            match taken {
                Some((shape, first)) => {
                    found.push(self.collision(CollisionKind::Path, shape, first, entry.domain));
                },
                None => {
                    for shape in &entry.shapes {
                        shapes.insert(shape.as_str(), entry.domain);
                    }
                },
            }
        }

        found
    }

    /// Fails on the first route whose name or path shape was already taken.
    ///
    /// # Errors
    /// [`RegistryError::DuplicateName`] or [`RegistryError::DuplicatePath`].
    pub fn validate(&self) -> Result<(), RegistryError> {
        match self.collisions().into_iter().next() {
            Some(collision) => Err(collision.into()),
            None => Ok(()),
        }
    }

    /// Resolves collisions with `policy` and produces the merged manifest.
    ///
    /// The manifest's GraphQL endpoints are left empty for the caller to fill in.
    ///
    /// # Errors
    /// Under [`MergePolicy::Strict`], the same errors as [`ModuleRegistry::validate`].
    pub fn finish(self, policy: MergePolicy) -> Result<Manifest, RegistryError> {
        let routes = match policy {
            MergePolicy::Strict => {
                self.validate()?;
                self.entries.into_iter().map(|entry| entry.route).collect()
            },
            MergePolicy::FirstWins => keep_first(self.entries, &self.domains),
            MergePolicy::LastWins => {
                let mut kept = keep_first(self.entries.into_iter().rev().collect(), &self.domains);
                kept.reverse();
                kept
            },
        };

        info!(
            domains = self.domains.len(),
            routes = routes.len(),
            components = self.components.len(),
            imports = self.imports.len(),
            ?policy,
            "Module registry finished"
        );

        Ok(Manifest {
            domains: self.domains,
            routes,
            components: self.components,
            imports: self.imports,
            ..Manifest::default()
        })
    }

    fn collision(&self, kind: CollisionKind, key: &str, first: usize, second: usize) -> Collision {
        Collision {
            kind,
            key: key.to_owned(),
            first: self.domains[first].clone(),
            second: self.domains[second].clone(),
        }
    }
}

/// Appends the specs not already present; returns how many were new.
fn insert_unique(set: &mut Vec<DirectorySpec>, specs: &[DirectorySpec]) -> usize {
    let before = set.len();
    for spec in specs {
        if !set.contains(spec) {
            set.push(spec.clone());
        }
    }
    set.len() - before
}

/// Keeps each route unless an earlier one in `entries` already owns its name or shape.
fn keep_first(entries: Vec<Entry>, domains: &[String]) -> Vec<RouteSpec> {
    let mut names: FxHashSet<String> = FxHashSet::default();
    let mut shapes: FxHashSet<String> = FxHashSet::default();
    let mut kept = Vec::with_capacity(entries.len());

    for entry in entries {
        if names.contains(&entry.route.name) || entry.shapes.iter().any(|s| shapes.contains(s)) {
            warn!(
                route = %entry.route.name,
                path = %entry.route.path,
                domain = %domains[entry.domain],
                "Dropping colliding route"
            );
            continue;
        }
        names.insert(entry.route.name.clone());
        shapes.extend(entry.shapes);
        kept.push(entry.route);
    }

    kept
}
