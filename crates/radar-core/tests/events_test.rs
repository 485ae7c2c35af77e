//! Tests for the event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use radar_core::events::types::*;
use radar_core::events::{EventDispatcher, RadarEventHandler};
use radar_core::{Locale, RiskVector, TierIndex};

#[derive(Default)]
struct Counter {
    assessments: AtomicUsize,
    locales: AtomicUsize,
}

impl RadarEventHandler for Counter {
    fn on_assessment_computed(&self, _event: &AssessmentComputedEvent) {
        self.assessments.fetch_add(1, Ordering::SeqCst);
    }

    fn on_locale_changed(&self, _event: &LocaleChangedEvent) {
        self.locales.fetch_add(1, Ordering::SeqCst);
    }
}

struct Panicker;

impl RadarEventHandler for Panicker {
    fn on_assessment_computed(&self, _event: &AssessmentComputedEvent) {
        panic!("boom");
    }
}

fn assessment_event() -> AssessmentComputedEvent {
    AssessmentComputedEvent {
        vector: RiskVector::zero(),
        tier: TierIndex::MINIMAL,
    }
}

#[test]
fn empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_assessment_computed(&assessment_event());
}

#[test]
fn handlers_receive_only_their_events() {
    let counter = Arc::new(Counter::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(counter.clone());

    dispatcher.emit_assessment_computed(&assessment_event());
    dispatcher.emit_locale_changed(&LocaleChangedEvent {
        previous: Locale::En,
        current: Locale::De,
    });
    dispatcher.emit_docs_toggled(&DocsToggledEvent { open: true });

    assert_eq!(counter.assessments.load(Ordering::SeqCst), 1);
    assert_eq!(counter.locales.load(Ordering::SeqCst), 1);
}

#[test]
fn panicking_handler_does_not_block_others() {
    let counter = Arc::new(Counter::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Panicker));
    dispatcher.register(counter.clone());

    dispatcher.emit_assessment_computed(&assessment_event());
    assert_eq!(counter.assessments.load(Ordering::SeqCst), 1);
}
