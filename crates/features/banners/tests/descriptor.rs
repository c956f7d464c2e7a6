use gamma_banners::model::Banner;
use gamma_banners::{DOMAIN, descriptor};

fn banner(id: &str, position: i32, active: bool) -> Banner {
    Banner {
        id: id.into(),
        title: format!("Banner {id}"),
        image_url: format!("/img/{id}.webp"),
        link_url: None,
        position,
        active,
    }
}

#[test]
fn contributes_protected_dashboard_routes() {
    let d = descriptor();

    assert_eq!(d.name(), DOMAIN);
    let paths: Vec<_> = d.routes().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, ["/banners", "/banners/create", "/banners/:id"]);
    assert!(d.routes().iter().all(|r| r.is_protected()));
    assert_eq!(d.component_dirs()[0].prefix.as_deref(), Some("Banners"));
}

#[test]
fn visible_banners_are_active_and_ordered() {
    let all = [banner("c", 3, true), banner("a", 1, true), banner("b", 2, false)];

    let ids: Vec<_> = Banner::visible(&all).into_iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
}
