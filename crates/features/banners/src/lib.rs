//! Homepage banners: rotating images with an optional link, shown in `position` order.

pub mod api;
pub mod model;

use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};

pub const DOMAIN: &str = "banners";

/// Routes, components and auto-imports this package contributes.
#[must_use]
pub fn descriptor() -> DomainDescriptor {
    DomainDescriptor::new(DOMAIN)
        .route(
            RouteSpec::new("banners", "/banners", "banners/pages/index")
                .requires_auth()
                .layout("dashboard"),
        )
        .route(
            RouteSpec::new("banners-create", "/banners/create", "banners/pages/create")
                .requires_auth()
                .layout("dashboard"),
        )
        .route(
            RouteSpec::new("banners-edit", "/banners/:id", "banners/pages/edit")
                .requires_auth()
                .layout("dashboard"),
        )
        .components(DirectorySpec::new("banners/components").prefix("Banners"))
        .imports(DirectorySpec::new("banners/composables"))
}
