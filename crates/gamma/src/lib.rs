//! Facade crate for the back-office host.
//!
//! Re-exports the shared crates and composes every enabled domain package into one
//! [`Manifest`]. Keep this crate thin: it wires crates together and holds no business
//! logic of its own.
//!
//! Domain packages are Cargo features (all on by default); disabling one removes its
//! routes, components and imports from the manifest.

pub use gamma_domain as domain;
pub use gamma_graphql as graphql;
pub use gamma_kernel as kernel;
pub use gamma_stores as stores;

use gamma_domain::config::{AppConfig, Side};
use gamma_domain::descriptor::DomainDescriptor;
use gamma_domain::manifest::{Endpoints, Manifest};
use gamma_kernel::registry::{ModuleRegistry, RegistryError};
use tracing::info;

/// Domain packages compiled into this build.
pub mod features {
    #[cfg(feature = "banners")]
    pub use gamma_banners as banners;
    #[cfg(feature = "blog")]
    pub use gamma_blog as blog;
    #[cfg(feature = "careers")]
    pub use gamma_careers as careers;
    #[cfg(feature = "clients")]
    pub use gamma_clients as clients;
    #[cfg(feature = "faqs")]
    pub use gamma_faqs as faqs;
    #[cfg(feature = "reviews")]
    pub use gamma_reviews as reviews;

    /// Enabled domains, in registration order.
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "banners")]
        "banners",
        #[cfg(feature = "blog")]
        "blog",
        #[cfg(feature = "careers")]
        "careers",
        #[cfg(feature = "clients")]
        "clients",
        #[cfg(feature = "faqs")]
        "faqs",
        #[cfg(feature = "reviews")]
        "reviews",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Descriptors of every enabled domain, in [`features::ENABLED`] order.
#[must_use]
pub fn descriptors() -> Vec<DomainDescriptor> {
    vec![
        #[cfg(feature = "banners")]
        features::banners::descriptor(),
        #[cfg(feature = "blog")]
        features::blog::descriptor(),
        #[cfg(feature = "careers")]
        features::careers::descriptor(),
        #[cfg(feature = "clients")]
        features::clients::descriptor(),
        #[cfg(feature = "faqs")]
        features::faqs::descriptor(),
        #[cfg(feature = "reviews")]
        features::reviews::descriptor(),
    ]
}

/// Merges `descriptors` under the configured policy and publishes the browser-facing
/// GraphQL endpoints.
///
/// # Errors
/// Returns a [`RegistryError`] when the `strict` policy meets a route collision.
pub fn compose<'a, I>(descriptors: I, config: &AppConfig) -> Result<Manifest, RegistryError>
where
    I: IntoIterator<Item = &'a DomainDescriptor>,
{
    let mut registry = ModuleRegistry::new();
    registry.register_all(descriptors);

    let mut manifest = registry.finish(config.registry.merge_policy)?;
    manifest.graphql = Endpoints {
        endpoint: config.graphql.endpoint_for(Side::Browser).to_owned(),
        subscriptions: config
            .graphql
            .subscription_endpoint
            .clone()
            .filter(|url| !url.trim().is_empty()),
    };

    Ok(manifest)
}

/// Builds the manifest of every enabled domain package.
///
/// # Errors
/// See [`compose`].
pub fn bootstrap(config: &AppConfig) -> Result<Manifest, RegistryError> {
    let manifest = compose(&descriptors(), config)?;
    info!(domains = ?manifest.domains, routes = manifest.routes.len(), "Domains composed");
    Ok(manifest)
}
