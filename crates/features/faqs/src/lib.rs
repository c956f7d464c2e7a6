//! Frequently asked questions, ordered manually.

pub mod api;
pub mod model;

use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};

pub const DOMAIN: &str = "faqs";

#[must_use]
pub fn descriptor() -> DomainDescriptor {
    let page = |name: &str, path: &str| {
        let component = format!("faqs/pages/{}", name.strip_prefix("faqs-").unwrap_or("index"));
        RouteSpec::new(name, path, component).requires_auth().layout("dashboard")
    };

    DomainDescriptor::new(DOMAIN)
        .route(page("faqs", "/faqs"))
        .route(page("faqs-create", "/faqs/create"))
        .route(page("faqs-edit", "/faqs/:id"))
        .components(DirectorySpec::new("faqs/components").prefix("Faqs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_follow_route_names() {
        let components: Vec<_> =
            descriptor().routes().iter().map(|r| r.component.as_str().to_owned()).collect();
        assert_eq!(components, ["faqs/pages/index", "faqs/pages/create", "faqs/pages/edit"]);
    }
}
