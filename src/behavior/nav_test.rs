use super::*;
use crate::app::app_test::Page;

fn is_open(page: &Page) -> bool {
    let dom = page.dom();
    dom.has_class(&page.hamburger, ACTIVE)
}

fn expanded(page: &Page) -> Option<String> {
    page.dom().attribute(&page.hamburger, ARIA_EXPANDED)
}

#[test]
fn hamburger_click_opens_then_closes() {
    let mut page = Page::ready();

    page.click(page.hamburger);
    assert!(is_open(&page));
    assert!(page.dom().has_class(&page.menu, ACTIVE));
    assert_eq!(expanded(&page).as_deref(), Some("true"));

    page.click(page.hamburger);
    assert!(!is_open(&page));
    assert!(!page.dom().has_class(&page.menu, ACTIVE));
    assert_eq!(expanded(&page).as_deref(), Some("false"));
}

#[test]
fn click_on_hamburger_child_toggles_and_does_not_count_as_outside() {
    let mut page = Page::ready();
    let bar = page.dom().query(".bar").expect("hamburger bar");
    page.click(bar);
    assert!(is_open(&page));
}

#[test]
fn nav_link_click_closes_menu() {
    let mut page = Page::ready();
    page.click(page.hamburger);
    page.click(page.about_link);
    assert!(!is_open(&page));
    assert!(!page.dom().has_class(&page.menu, ACTIVE));
    assert_eq!(expanded(&page).as_deref(), Some("false"));
}

#[test]
fn outside_click_closes_menu() {
    let mut page = Page::ready();
    page.click(page.hamburger);
    page.click(page.footer);
    assert!(!is_open(&page));
    assert_eq!(expanded(&page).as_deref(), Some("false"));
}

#[test]
fn click_inside_menu_keeps_it_open() {
    let mut page = Page::ready();
    page.click(page.hamburger);
    let menu = page.menu;
    page.click(menu);
    assert!(is_open(&page));
}

#[test]
fn outside_click_on_closed_menu_marks_collapsed() {
    let mut page = Page::ready();
    page.click(page.footer);
    assert!(!is_open(&page));
    assert_eq!(expanded(&page).as_deref(), Some("false"));
}
