//! Comprehensive tests for pagewire-html
//!
//! Parsing real-world-shaped markup into the arena DOM.

use pagewire_html::{HtmlParser, parse};

#[test]
fn test_parse_empty_input_still_has_body() {
    let doc = parse("").unwrap();
    assert!(doc.body().is_valid());
    assert!(doc.head().is_valid());
    assert_eq!(doc.tree().children(doc.body()).count(), 0);
}

#[test]
fn test_parse_text_only() {
    let doc = parse("Hello World").unwrap();
    assert_eq!(doc.tree().text_content(doc.body()), "Hello World");
}

#[test]
fn test_parse_void_elements() {
    let html = r#"<img src="img/logo.png" class="nav__logo"><br><input type="text"><p>after</p>"#;
    let doc = parse(html).unwrap();

    let img = doc.query_selector("img.nav__logo").unwrap().unwrap();
    assert_eq!(doc.tree().children(img).count(), 0);
    let p = doc.query_selector("p").unwrap().unwrap();
    assert_eq!(doc.tree().get(p).unwrap().parent, doc.body());
}

#[test]
fn test_parse_nested_structure() {
    let html = r##"
        <html>
            <head>
                <title>Bankist</title>
                <meta charset="utf-8">
            </head>
            <body>
                <nav class="nav">
                    <ul class="nav__links">
                        <li class="nav__item"><a class="nav__link" href="#section--1">Features</a></li>
                        <li class="nav__item"><a class="nav__link" href="#section--2">Operations</a></li>
                    </ul>
                </nav>
            </body>
        </html>
    "##;
    let doc = parse(html).unwrap();

    assert_eq!(doc.title(), "Bankist");
    let links = doc.query_selector_all(".nav__link").unwrap();
    assert_eq!(links.len(), 2);

    let nav = doc.query_selector(".nav").unwrap().unwrap();
    for link in links {
        assert!(doc.tree().is_inclusive_descendant(link, nav));
    }
}

#[test]
fn test_attributes_map_to_structured_views() {
    let html = r##"<button id="open" class="btn btn--show-modal" style="opacity: 0.5" data-scroll-to="#section--1">Open</button>"##;
    let doc = parse(html).unwrap();
    let tree = doc.tree();

    let button = doc.get_element_by_id("open").unwrap();
    assert!(tree.has_class(button, "btn--show-modal"));
    assert_eq!(tree.style(button).and_then(|s| s.get_property_value("opacity")), Some("0.5"));
    assert_eq!(tree.dataset(button).get("scrollTo"), Some("#section--1"));
    assert_eq!(tree.attribute(button, "data-scroll-to").as_deref(), Some("#section--1"));
}

#[test]
fn test_entities_decoded() {
    let doc = parse("<button class=\"slider__btn\">&larr;</button><p>A &amp; B</p>").unwrap();
    let button = doc.query_selector(".slider__btn").unwrap().unwrap();
    assert_eq!(doc.tree().text_content(button), "\u{2190}");
    let p = doc.query_selector("p").unwrap().unwrap();
    assert_eq!(doc.tree().text_content(p), "A & B");
}

#[test]
fn test_whitespace_text_dropped() {
    let doc = parse("<div class=\"dots\">\n    \n</div>").unwrap();
    let dots = doc.query_selector(".dots").unwrap().unwrap();
    assert_eq!(doc.tree().children(dots).count(), 0);
}

#[test]
fn test_unclosed_tags_recovered() {
    let doc = parse("<div class=\"slide\"><h5>One<div class=\"slide\"><h5>Two").unwrap();
    assert_eq!(doc.query_selector_all(".slide").unwrap().len(), 2);
}

#[test]
fn test_uppercase_markup_normalized() {
    let doc = parse("<DIV CLASS=\"Modal\" DATA-TAB=\"1\"></DIV>").unwrap();
    let div = doc.query_selector("div").unwrap().unwrap();
    // Class values keep their case; names do not
    assert!(doc.tree().has_class(div, "Modal"));
    assert_eq!(doc.tree().attribute(div, "data-tab").as_deref(), Some("1"));
}

#[test]
fn test_base_url_kept() {
    let doc = HtmlParser::new()
        .parse_with_url("<p>x</p>", "https://bankist.example/")
        .unwrap();
    assert_eq!(doc.url(), "https://bankist.example/");
    assert_eq!(parse("<p>x</p>").unwrap().url(), "about:blank");
}

#[test]
fn test_comments_kept_on_request() {
    let html = "<body><!-- slider --><div class=\"slider\"></div></body>";
    let doc = HtmlParser::new().with_comments(true).parse(html).unwrap();
    let body = doc.body();
    let first = doc.tree().children(body).next().map(|(_, node)| node.is_element());
    assert_eq!(first, Some(false));
}

#[test]
fn test_large_document() {
    let mut html = String::from("<section class=\"section\">");
    for i in 0..1000 {
        html.push_str(&format!("<div class=\"slide\" data-slide=\"{i}\"><h5>Slide {i}</h5></div>"));
    }
    html.push_str("</section>");

    let doc = parse(&html).unwrap();
    let slides = doc.query_selector_all(".slide").unwrap();
    assert_eq!(slides.len(), 1000);
    assert_eq!(doc.tree().attribute(slides[999], "data-slide").as_deref(), Some("999"));
}
