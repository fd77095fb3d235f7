use super::*;

#[test]
fn sticky_page_reports_section_relative_scroll() {
    let page = PageGeometry::sticky(Size::new(800.0, 600.0), 1000.0, 3000.0).scrolled_to(1250.0);
    assert_eq!(page.container_size(), Some(Size::new(800.0, 600.0)));
    assert_eq!(
        page.scroll_state(),
        Some(ScrollState {
            raw_offset: 1250.0,
            section_top: 1000.0,
            section_height: 3000.0,
        })
    );
    assert_eq!(page.section_end_offset(), Some(3400.0));
}

#[test]
fn missing_section_has_no_scroll_state() {
    let mut page = PageGeometry::sticky(Size::new(800.0, 600.0), 0.0, 3000.0);
    page.section = None;
    assert_eq!(page.scroll_state(), None);
    assert_eq!(page.section_end_offset(), None);
}

#[test]
fn section_without_travel_has_no_end_offset() {
    let page = PageGeometry::sticky(Size::new(800.0, 600.0), 0.0, 600.0);
    assert_eq!(page.section_end_offset(), None);
}

#[test]
fn geometry_round_trips_through_json() {
    let page = PageGeometry::sticky(Size::new(320.0, 240.0), 10.0, 900.0).scrolled_to(42.0);
    let json = serde_json::to_string(&page).unwrap();
    let back: PageGeometry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, page);
}
