//! Job openings and the applications received for them.

pub mod api;
pub mod model;

use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};

pub const DOMAIN: &str = "careers";

#[must_use]
pub fn descriptor() -> DomainDescriptor {
    [
        ("careers", "/careers", "careers/pages/index"),
        ("careers-create", "/careers/create", "careers/pages/create"),
        ("careers-edit", "/careers/:id", "careers/pages/edit"),
        ("careers-applications", "/careers/:id/applications", "careers/pages/applications"),
    ]
    .into_iter()
    .fold(DomainDescriptor::new(DOMAIN), |d, (name, path, component)| {
        d.route(RouteSpec::new(name, path, component).requires_auth().layout("dashboard"))
    })
    .components(DirectorySpec::new("careers/components").prefix("Careers"))
    .imports(DirectorySpec::new("careers/composables"))
}
