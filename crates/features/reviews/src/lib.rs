//! Customer reviews and their moderation queue.

pub mod api;
pub mod model;

use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};

pub const DOMAIN: &str = "reviews";

#[must_use]
pub fn descriptor() -> DomainDescriptor {
    DomainDescriptor::new(DOMAIN)
        .route(
            RouteSpec::new("reviews", "/reviews", "reviews/pages/index")
                .requires_auth()
                .layout("dashboard"),
        )
        .route(
            RouteSpec::new("reviews-edit", "/reviews/:id", "reviews/pages/edit")
                .requires_auth()
                .layout("dashboard"),
        )
        .components(DirectorySpec::new("reviews/components").prefix("Reviews"))
        .imports(DirectorySpec::new("reviews/composables"))
}
