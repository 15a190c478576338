use crate::app::app_test::Page;
use crate::dom::Dom;

#[test]
fn blocks_start_hidden_with_transition() {
    let page = Page::ready();
    for node in page.dom().query_all(".about-content, .stat, .project-card, .skills-grid") {
        assert_eq!(page.style(node, "opacity").as_deref(), Some("0"));
        assert_eq!(page.style(node, "transform").as_deref(), Some("translateY(30px)"));
        assert_eq!(page.style(node, "transition").as_deref(), Some("opacity 0.6s ease, transform 0.6s ease"));
    }
}

#[test]
fn unmatched_elements_are_untouched() {
    let page = Page::ready();
    assert_eq!(page.style(page.footer, "opacity"), None);
    assert_eq!(page.style(page.about, "opacity"), None);
}

#[test]
fn intersection_reveals_element() {
    let mut page = Page::ready();
    page.intersect(page.stat, true);
    assert_eq!(page.style(page.stat, "opacity").as_deref(), Some("1"));
    assert_eq!(page.style(page.stat, "transform").as_deref(), Some("translateY(0)"));
    // Others stay hidden.
    assert_eq!(page.style(page.card, "opacity").as_deref(), Some("0"));
}

#[test]
fn leaving_viewport_never_hides_again() {
    let mut page = Page::ready();
    page.intersect(page.card, true);
    page.intersect(page.card, false);
    assert_eq!(page.style(page.card, "opacity").as_deref(), Some("1"));
}

#[test]
fn non_intersecting_entry_before_reveal_is_ignored() {
    let mut page = Page::ready();
    page.intersect(page.card, false);
    assert_eq!(page.style(page.card, "opacity").as_deref(), Some("0"));
}

#[test]
fn repeat_reveal_is_idempotent() {
    let mut page = Page::ready();
    page.intersect(page.card, true);
    page.intersect(page.card, true);
    assert_eq!(page.style(page.card, "opacity").as_deref(), Some("1"));
    assert_eq!(page.style(page.card, "transform").as_deref(), Some("translateY(0)"));
}
