use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};
use gamma_domain::manifest::Manifest;
use serde_json::json;

#[test]
fn descriptor_keeps_contribution_order() {
    let descriptor = DomainDescriptor::new("blog")
        .route(RouteSpec::new("blog", "/blog", "blog/pages/index"))
        .route(RouteSpec::new("blog-edit", "/blog/:id", "blog/pages/edit"))
        .components(DirectorySpec::new("blog/components").prefix("Blog"))
        .imports(DirectorySpec::new("blog/stores"));

    let names: Vec<_> = descriptor.routes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["blog", "blog-edit"]);
    assert_eq!(descriptor.component_dirs().len(), 1);
    assert_eq!(descriptor.import_dirs()[0].path, "blog/stores");
}

#[test]
fn route_serializes_for_the_router() {
    let route = RouteSpec::new("faqs", "/faqs", "faqs/pages/index").requires_auth();
    let value = serde_json::to_value(&route).expect("serialize route");

    assert_eq!(
        value,
        json!({
            "name": "faqs",
            "path": "/faqs",
            "component": "faqs/pages/index",
            "meta": { "requires_auth": true }
        })
    );
}

#[test]
fn manifest_looks_up_routes_by_name() {
    let manifest = Manifest {
        routes: vec![RouteSpec::new("clients", "/clients", "clients/pages/index")],
        ..Manifest::default()
    };

    assert!(manifest.route("clients").is_some());
    assert!(manifest.route("careers").is_none());
}
