//! Blog posts: drafts, publishing and per-post slugs.

pub mod api;
pub mod model;

use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};

pub const DOMAIN: &str = "blog";

#[must_use]
pub fn descriptor() -> DomainDescriptor {
    let page = |name: &str, path: &str, component: &str| {
        RouteSpec::new(name, path, component).requires_auth().layout("dashboard")
    };

    DomainDescriptor::new(DOMAIN)
        .route(page("blog", "/blog", "blog/pages/index"))
        .route(page("blog-create", "/blog/create", "blog/pages/create"))
        .route(page("blog-edit", "/blog/:id", "blog/pages/edit"))
        .route(page("blog-preview", "/blog/:id/preview", "blog/pages/preview").meta("print", true))
        .components(DirectorySpec::new("blog/components").prefix("Blog"))
        .imports(DirectorySpec::new("blog/composables"))
        .imports(DirectorySpec::new("blog/utils"))
}
