use gamma_domain::config::MergePolicy;
use gamma_domain::descriptor::{DirectorySpec, DomainDescriptor, RouteSpec};
use gamma_kernel::registry::{ModuleRegistry, RegistryError};

fn blog() -> DomainDescriptor {
    DomainDescriptor::new("blog")
        .route(RouteSpec::new("blog", "/blog", "blog/index").requires_auth())
        .route(RouteSpec::new("blog-create", "/blog/create", "blog/create").requires_auth())
        .route(RouteSpec::new("blog-edit", "/blog/:id", "blog/edit").requires_auth())
        .components(DirectorySpec::new("blog/components").prefix("Blog"))
        .imports(DirectorySpec::new("blog/composables"))
}

fn faqs() -> DomainDescriptor {
    DomainDescriptor::new("faqs")
        .route(RouteSpec::new("faqs", "/faqs", "faqs/index"))
        .route(RouteSpec::new("faqs-edit", "/faqs/:id", "faqs/edit"))
}

fn names(registry: &ModuleRegistry) -> Vec<&str> {
    registry.routes().map(|r| r.name.as_str()).collect()
}

#[test]
fn route_count_is_sum_of_contributions_in_order() {
    let descriptors = [blog(), faqs(), DomainDescriptor::new("empty")];
    let mut registry = ModuleRegistry::new();
    registry.register_all(&descriptors);

    let expected: usize = descriptors.iter().map(|d| d.routes().len()).sum();
    assert_eq!(registry.routes().len(), expected);
    assert_eq!(names(&registry), ["blog", "blog-create", "blog-edit", "faqs", "faqs-edit"]);
    assert_eq!(registry.domains(), ["blog", "faqs", "empty"]);
}

#[test]
fn registering_twice_doubles_routes() {
    let mut registry = ModuleRegistry::new();
    registry.register(&faqs()).register(&faqs());

    assert_eq!(names(&registry), ["faqs", "faqs-edit", "faqs", "faqs-edit"]);
    assert_eq!(registry.domains(), ["faqs", "faqs"]);
}

#[test]
fn strict_rejects_duplicate_names() {
    let mut registry = ModuleRegistry::new();
    registry.register(&faqs()).register(&faqs());

    let err = registry.finish(MergePolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::DuplicateName { ref name, ref first, ref second, .. }
            if name == "faqs" && first == "faqs" && second == "faqs"
    ));
}

#[test]
fn strict_rejects_same_path_shape() {
    let other = DomainDescriptor::new("help").route(RouteSpec::new("help-entry", "/faqs/[slug]", "help/entry"));

    let mut registry = ModuleRegistry::new();
    registry.register(&faqs()).register(&other);

    let err = registry.validate().unwrap_err();
    assert!(matches!(err, RegistryError::DuplicatePath { ref path, .. } if path == "/faqs/:"));
    assert_eq!(
        err.to_string(),
        "Duplicate route path '/faqs/:' registered by 'faqs' and 'help'"
    );
}

#[test]
fn strict_accepts_distinct_routes() {
    let mut registry = ModuleRegistry::new();
    registry.register(&blog()).register(&faqs());

    registry.validate().unwrap();
    let manifest = registry.finish(MergePolicy::Strict).unwrap();

    assert_eq!(manifest.domains, ["blog", "faqs"]);
    assert_eq!(manifest.routes.len(), 5);
    assert_eq!(manifest.components, [DirectorySpec::new("blog/components").prefix("Blog")]);
    assert_eq!(manifest.imports, [DirectorySpec::new("blog/composables")]);
    assert!(manifest.route("blog-edit").is_some_and(RouteSpec::is_protected));
    assert!(manifest.graphql.endpoint.is_empty());
}

#[test]
fn first_wins_drops_later_duplicates() {
    let rival = DomainDescriptor::new("rival")
        .route(RouteSpec::new("faqs", "/questions", "rival/questions"))
        .route(RouteSpec::new("rival-home", "/rival", "rival/index"));

    let mut registry = ModuleRegistry::new();
    registry.register(&faqs()).register(&rival);
    let manifest = registry.finish(MergePolicy::FirstWins).unwrap();

    let kept: Vec<_> = manifest.routes.iter().map(|r| (r.name.as_str(), r.path.as_str())).collect();
    assert_eq!(kept, [("faqs", "/faqs"), ("faqs-edit", "/faqs/:id"), ("rival-home", "/rival")]);
}

#[test]
fn last_wins_keeps_one_entry_per_name() {
    let rival = DomainDescriptor::new("rival").route(RouteSpec::new("faqs", "/questions", "rival/questions"));

    let mut registry = ModuleRegistry::new();
    registry.register(&faqs()).register(&rival);
    let manifest = registry.finish(MergePolicy::LastWins).unwrap();

    let kept: Vec<_> = manifest.routes.iter().map(|r| (r.name.as_str(), r.path.as_str())).collect();
    assert_eq!(kept, [("faqs-edit", "/faqs/:id"), ("faqs", "/questions")]);
}
