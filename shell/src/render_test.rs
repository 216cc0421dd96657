use super::*;
use crate::container::{BoxLayout, Container};

const BOX_STYLE: &str = "width: 80%; max-width: 800px; margin: 0 auto; padding-top: 8rem; padding-bottom: 8rem";

fn count(tags: &[HeadTag], pred: impl Fn(&HeadTag) -> bool) -> usize {
    tags.iter().filter(|tag| pred(tag)).count()
}

#[test]
fn home_scenario_emits_title_and_keeps_nav() {
    let config = PageShellConfig::builder("<p>Hi</p>")
        .description("Home page")
        .page_title("Home")
        .show_leading_nav(true)
        .build()
        .unwrap();

    let page = render(config, Some("back")).unwrap();

    assert_eq!(
        page.head,
        vec![
            HeadTag::Viewport("width=device-width, initial-scale=1".to_owned()),
            HeadTag::Charset("utf-8".to_owned()),
            HeadTag::Description("Home page".to_owned()),
            HeadTag::Title("Home".to_owned()),
        ]
    );
    assert_eq!(
        page.body,
        Body {
            class: Some("content".to_owned()),
            style: Some(BOX_STYLE.to_owned()),
            leading_nav: Some("back"),
            content: "<p>Hi</p>",
        }
    );
    assert_eq!(page.title(), Some("Home"));
}

#[test]
fn about_scenario_has_no_title_and_no_nav() {
    let config = PageShellConfig::builder("<p>About us</p>")
        .description("About")
        .show_leading_nav(false)
        .container(Container::plain("layout"))
        .build()
        .unwrap();

    let page = render(config, Some("back")).unwrap();

    assert!(page.head.iter().all(|tag| !matches!(tag, HeadTag::Title(_))));
    assert_eq!(page.body.leading_nav, None);
    assert_eq!(page.body.class.as_deref(), Some("layout"));
    assert_eq!(page.body.style, None);
    assert_eq!(page.body.content, "<p>About us</p>");
}

#[test]
fn head_has_one_of_each_directive_in_fixed_order() {
    let config = PageShellConfig::builder(())
        .description("Desc \"quoted\" & <raw>")
        .page_title("T")
        .build()
        .unwrap();
    let page = render(config, None::<()>).unwrap();

    assert_eq!(count(&page.head, |t| matches!(t, HeadTag::Viewport(_))), 1);
    assert_eq!(count(&page.head, |t| matches!(t, HeadTag::Charset(_))), 1);
    assert_eq!(count(&page.head, |t| matches!(t, HeadTag::Description(_))), 1);
    assert_eq!(count(&page.head, |t| matches!(t, HeadTag::Title(_))), 1);
    assert!(matches!(page.head[0], HeadTag::Viewport(_)));
    assert!(matches!(page.head[1], HeadTag::Charset(_)));
    assert_eq!(page.head[2], HeadTag::Description("Desc \"quoted\" & <raw>".to_owned()));
    assert_eq!(page.head[3], HeadTag::Title("T".to_owned()));
}

#[test]
fn empty_title_emits_no_title_tag() {
    let config = PageShellConfig::builder(()).description("d").page_title("").build().unwrap();
    let page = render(config, None::<()>).unwrap();
    assert_eq!(page.head.len(), 3);
    assert_eq!(page.title(), None);
}

#[test]
fn missing_description_renders_nothing() {
    let config = PageShellConfig {
        content: "<p>x</p>",
        page_title: Some("T".to_owned()),
        description: None,
        show_leading_nav: true,
        container: Container::default(),
        charset: "utf-8".to_owned(),
        viewport: "width=device-width".to_owned(),
    };
    assert_eq!(render(config, Some("back")), Err(ShellError::MissingDescription));
}

#[test]
fn no_nav_supplied_means_no_nav_even_when_enabled() {
    let config = PageShellConfig::builder("<p>c</p>").description("d").build().unwrap();
    assert!(config.show_leading_nav);
    let page = render(config, None::<&str>).unwrap();
    assert_eq!(page.body.leading_nav, None);
    assert_eq!(page.body.content, "<p>c</p>");
}

#[test]
fn empty_box_leaves_wrapper_without_attributes() {
    let config = PageShellConfig::builder(())
        .description("d")
        .container(Container::Boxed(BoxLayout::empty()))
        .build()
        .unwrap();
    let page = render(config, None::<()>).unwrap();
    assert_eq!(page.body.class, None);
    assert_eq!(page.body.style, None);
}

#[test]
fn content_is_moved_through_untouched() {
    #[derive(Debug, PartialEq)]
    struct Section(&'static str);

    let config = PageShellConfig::builder(Section("unique")).description("d").build().unwrap();
    let page = render(config, Some("nav")).unwrap();
    assert_eq!(page.body.content, Section("unique"));
}
