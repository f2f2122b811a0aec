use nextroutes::{
    OutputFormat, RouteFiles, RouteNode, RouterKind, Segment, Substitutions, compare_names,
    is_route_group, output, parse_substitution, render_tree, resolve_segment,
};
use std::cmp::Ordering;
fn subs(pairs: &[(&str, &str)]) -> Substitutions {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
#[test]
fn test_static_segment_unchanged() {
    let empty = Substitutions::new();
    for raw in ["about", "blog-posts", "page.tsx", "(marketing)", "", "[]"] {
        assert_eq!(resolve_segment(raw, &empty), raw);
    }
}
#[test]
fn test_dynamic_segments_without_substitution() {
    let empty = Substitutions::new();
    assert_eq!(resolve_segment("[slug]", &empty), ":slug");
    assert_eq!(resolve_segment("[...slug]", &empty), ":slug*");
    assert_eq!(resolve_segment("[[...slug]]", &empty), ":slug*?");
    assert_eq!(resolve_segment("[[id]]", &empty), ":id?");
}
#[test]
fn test_dynamic_segments_with_substitution() {
    let table = subs(&[("slug", "hello"), ("id", "42")]);
    assert_eq!(resolve_segment("[slug]", &table), "hello");
    assert_eq!(resolve_segment("[...slug]", &table), "hello");
    assert_eq!(resolve_segment("[[...slug]]", &table), "hello");
    assert_eq!(resolve_segment("[[id]]", &table), "42");
    assert_eq!(resolve_segment("[brand]", &table), ":brand");
}
#[test]
fn test_empty_substitution_falls_back_to_placeholder() {
    let table = subs(&[("slug", "")]);
    assert_eq!(resolve_segment("[slug]", &table), ":slug");
}
#[test]
fn test_segment_classification() {
    assert_eq!(Segment::parse("docs"), Segment::Static("docs"));
    assert_eq!(Segment::parse("[id]"), Segment::Dynamic("id"));
    assert_eq!(Segment::parse("[...all]"), Segment::CatchAll("all"));
    assert_eq!(Segment::parse("[[...all]]"), Segment::OptionalCatchAll("all"));
    assert_eq!(Segment::parse("[[id]]"), Segment::OptionalDynamic("id"));
    assert_eq!(Segment::parse("(shop)"), Segment::RouteGroup("(shop)"));
}
#[test]
fn test_route_group_filter() {
    assert!(is_route_group("(marketing)"));
    assert!(!is_route_group("marketing"));
    assert!(!is_route_group("(marketing"));
    assert!(!is_route_group("[slug]"));
    assert!(!is_route_group("(..)photo"));
}
#[test]
fn test_parse_substitution() {
    assert_eq!(
        parse_substitution("brand=github").unwrap(),
        ("brand".to_string(), "github".to_string())
    );
    assert_eq!(
        parse_substitution("q=a=b").unwrap(),
        ("q".to_string(), "a=b".to_string())
    );
    assert!(parse_substitution("brand").is_err());
    assert!(parse_substitution("=github").is_err());
    assert!(parse_substitution("brand=").is_err());
}
#[test]
fn test_router_kind_parsing() {
    assert_eq!("app".parse::<RouterKind>().unwrap(), RouterKind::App);
    assert_eq!("PAGES".parse::<RouterKind>().unwrap(), RouterKind::Pages);
    assert!("remix".parse::<RouterKind>().is_err());
    assert_eq!(RouterKind::App.to_string(), "app");
}
#[test]
fn test_route_file_matchers() {
    let files = RouteFiles::standard().unwrap();
    assert!(files.is_page("page.tsx"));
    assert!(files.is_page("page.js"));
    assert!(!files.is_page("Page.js"));
    assert!(!files.is_page("page.mdx"));
    assert!(files.is_index("index.ts"));
    assert_eq!(files.script_stem("about.jsx"), Some("about"));
    assert_eq!(files.script_stem("[id].tsx"), Some("[id]"));
    assert_eq!(files.script_stem("styles.css"), None);
    assert!(!files.is_ignored("anything"));
}
#[test]
fn test_custom_extensions_and_ignores() {
    let files = RouteFiles::new(&["mdx", ".md"], &["draft*"]).unwrap();
    assert!(files.is_page("page.mdx"));
    assert!(files.is_page("page.md"));
    assert!(!files.is_page("page.js"));
    assert!(files.is_ignored("drafts"));
    assert!(RouteFiles::new(&[] as &[&str], &[] as &[&str]).is_err());
    assert!(RouteFiles::new(&["js"], &["[invalid"]).is_err());
}
#[test]
fn test_name_ordering() {
    assert_eq!(compare_names("about", "blog"), Ordering::Less);
    assert_eq!(compare_names("Blog", "about"), Ordering::Greater);
    assert_eq!(compare_names("about", "About"), Ordering::Less);
    assert_eq!(compare_names(":slug", "about"), Ordering::Less);
    assert_eq!(compare_names("📁 x", "about"), Ordering::Less);
    assert_eq!(compare_names("item2", "item10"), Ordering::Greater);
    assert_eq!(compare_names("same", "same"), Ordering::Equal);
    assert_eq!(compare_names("📁 :id", "📁 (auth)"), Ordering::Less);
    assert_eq!(compare_names("a_b", "a-b"), Ordering::Less);
    assert_eq!(compare_names("[id]", "(auth)"), Ordering::Greater);
}
#[test]
fn test_children_sorted_on_construction() {
    let node = RouteNode::new(
        "/",
        None,
        vec![
            RouteNode::leaf("zeta", "http://x/zeta".into()),
            RouteNode::leaf("Alpha", "http://x/Alpha".into()),
            RouteNode::leaf("beta", "http://x/beta".into()),
        ],
    );
    let names: Vec<_> = node.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Alpha", "beta", "zeta"]);
    let mut resorted = node.children().to_vec();
    resorted.sort_by(|a, b| compare_names(a.name(), b.name()));
    assert_eq!(resorted, node.children());
}
fn sample_tree() -> RouteNode {
    let about = RouteNode::new("📁 about", Some("http://x/about".into()), Vec::new());
    let slug = RouteNode::new("📁 :slug", Some("http://x/blog/:slug".into()), Vec::new());
    let blog = RouteNode::new("📁 blog", None, vec![slug]);
    RouteNode::new("/", Some("http://x".into()), vec![blog, about])
}
#[test]
fn test_render_tree() {
    let expected = "\
/ [http://x]
├─ 📁 about [http://x/about]
└─ 📁 blog
   └─ 📁 :slug [http://x/blog/:slug]
";
    assert_eq!(render_tree(&sample_tree()), expected);
}
#[test]
fn test_render_tree_nested_pipes() {
    let deep = RouteNode::new("📁 c", Some("http://x/a/b/c".into()), Vec::new());
    let b = RouteNode::new("📁 b", None, vec![deep]);
    let a = RouteNode::new("📁 a", None, vec![b]);
    let z = RouteNode::new("📁 z", Some("http://x/z".into()), Vec::new());
    let root = RouteNode::new("/", None, vec![z, a]);
    let expected = "\
/
├─ 📁 a
│  └─ 📁 b
│     └─ 📁 c [http://x/a/b/c]
└─ 📁 z [http://x/z]
";
    assert_eq!(render_tree(&root), expected);
}
#[test]
fn test_render_urls_depth_first() {
    let out = output::render_urls(&sample_tree());
    assert_eq!(out, "http://x\nhttp://x/about\nhttp://x/blog/:slug\n");
    assert_eq!(
        sample_tree().route_paths(),
        ["http://x", "http://x/about", "http://x/blog/:slug"]
    );
}
#[test]
fn test_json_output() {
    let leaf = RouteNode::new("/", Some("http://x".into()), Vec::new());
    let json = output::format_routes(&leaf, OutputFormat::Json, false).unwrap();
    assert_eq!(json, "{\"name\":\"/\",\"routePath\":\"http://x\",\"children\":[]}\n");
    let grouped = RouteNode::new("📁 (shop)", None, Vec::new());
    let json = output::format_routes(&grouped, OutputFormat::Json, false).unwrap();
    assert!(!json.contains("routePath"));
}
