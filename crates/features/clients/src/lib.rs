//! Client records: people and the companies they represent.
//!
//! Names are shown with their honorific, resolved through the shared honorifics store.

pub mod api;
pub mod model;

use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};

pub const DOMAIN: &str = "clients";

#[must_use]
pub fn descriptor() -> DomainDescriptor {
    DomainDescriptor::new(DOMAIN)
        .route(
            RouteSpec::new("clients", "/clients", "clients/pages/index")
                .requires_auth()
                .layout("dashboard"),
        )
        .route(
            RouteSpec::new("clients-create", "/clients/create", "clients/pages/create")
                .requires_auth()
                .layout("dashboard"),
        )
        .route(
            RouteSpec::new("clients-edit", "/clients/:id", "clients/pages/edit")
                .requires_auth()
                .layout("dashboard"),
        )
        .components(DirectorySpec::new("clients/components").prefix("Clients"))
        .components(DirectorySpec::new("shared/forms").global(true))
        .imports(DirectorySpec::new("clients/composables"))
}
