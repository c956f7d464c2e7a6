use gamma_blog::model::slugify;
use gamma_blog::{DOMAIN, descriptor};

#[test]
fn preview_route_nests_under_edit() {
    let d = descriptor();
    assert_eq!(d.name(), DOMAIN);

    let names: Vec<_> = d.routes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["blog", "blog-create", "blog-edit", "blog-preview"]);

    let preview = &d.routes()[3];
    assert_eq!(preview.path_shape(), "/blog/:/preview");
    assert_eq!(preview.meta.get("print"), Some(&serde_json::Value::Bool(true)));
    assert_eq!(d.import_dirs().len(), 2);
}

#[test]
fn slugs_drop_punctuation() {
    assert_eq!(slugify("  Q3 -- Release Notes  "), "q3-release-notes");
    assert_eq!(slugify("!!!"), "");
}
