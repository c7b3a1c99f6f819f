use carousel::constants::*;
use carousel::dom::{Document, NodeId};
use carousel::page::{Page, PageEvent, skeleton};
use carousel::{Config, Visibility, VirtualClock};

fn active_indices(doc: &Document, container: &str, class: &str) -> Vec<usize> {
    let root = doc.get_element_by_id(container).unwrap();
    doc.query_class(root, class)
        .into_iter()
        .enumerate()
        .filter(|(_, node)| doc.has_class(*node, ACTIVE_CLASS))
        .map(|(i, _)| i)
        .collect()
}

fn assert_active(page: &Page<VirtualClock>, expected: usize) {
    let doc = page.document();
    assert_eq!(active_indices(&doc, SLIDE_TRACK_ID, SLIDE_CLASS), vec![expected]);
    assert_eq!(active_indices(&doc, INDICATOR_STRIP_ID, DOT_CLASS), vec![expected]);
}

fn element(page: &Page<VirtualClock>, id: &str) -> NodeId {
    page.document().get_element_by_id(id).unwrap()
}

#[test]
fn previous_click_pushes_next_tick_a_full_interval_out() {
    let config = Config::default();
    let clock = VirtualClock::new();
    let mut page = Page::new(skeleton(&config), clock.clone());
    let id = page.init(&config).mounted[0];
    assert_active(&page, 0);

    clock.set(3000);
    page.tick();
    assert_active(&page, 1);

    clock.set(3100);
    let prev = element(&page, PREV_BUTTON_ID);
    page.dispatch(PageEvent::Click(prev));
    assert_active(&page, 0);
    assert_eq!(page.carousel(id).unwrap().next_autoplay_at(), Some(6100));

    clock.set(6099);
    page.tick();
    assert_active(&page, 0);

    clock.set(6100);
    page.tick();
    assert_active(&page, 1);
}

#[test]
fn one_active_slide_through_mixed_input() {
    let config = Config::default();
    let clock = VirtualClock::new();
    let mut page = Page::new(skeleton(&config), clock.clone());
    page.init(&config);

    let next = element(&page, NEXT_BUTTON_ID);
    let track = element(&page, SLIDE_TRACK_ID);
    let steps = [
        PageEvent::Click(next),
        PageEvent::Click(next),
        PageEvent::KeyDown(carousel::Key::ArrowLeft),
        PageEvent::TouchStart { target: track, x: 10.0 },
        PageEvent::TouchEnd { target: track, x: 300.0 },
        PageEvent::Visibility(Visibility::Hidden),
        PageEvent::Visibility(Visibility::Visible),
        PageEvent::Click(next),
    ];
    let expected = [1, 2, 1, 1, 0, 0, 0, 1];

    for (event, index) in steps.into_iter().zip(expected) {
        clock.advance(700);
        page.dispatch(event);
        assert_active(&page, index);
    }

    for _ in 0..5 {
        clock.advance(3000);
        page.tick();
        let doc = page.document();
        assert_eq!(active_indices(&doc, SLIDE_TRACK_ID, SLIDE_CLASS).len(), 1);
    }
}

#[test]
fn page_without_carousel_markup_is_left_alone() {
    let mut doc = Document::new();
    let body = doc.body();
    doc.append_with_id(body, "footer", "year");
    let before = doc.revision();

    let mut page = Page::new(doc, VirtualClock::new());
    let report = page.init(&Config::default());

    assert!(report.mounted.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(page.document().revision(), before);
    assert_eq!(page.next_deadline(), None);
}

#[test]
fn longest_interval_survives_manual_navigation() {
    let config = Config::default().with_interval(u64::MAX);
    assert!(config.validate().is_ok());

    let clock = VirtualClock::new();
    let mut page = Page::new(skeleton(&config), clock.clone());
    let id = page.init(&config).mounted[0];

    clock.set(100);
    let next = element(&page, NEXT_BUTTON_ID);
    page.dispatch(PageEvent::Click(next));
    assert_active(&page, 1);
    assert_eq!(page.carousel(id).unwrap().next_autoplay_at(), Some(u64::MAX));

    clock.set(1_000_000);
    assert_eq!(page.tick(), 0);
    assert_active(&page, 1);
}
