//! Traced validation across several attempts

use tereo_debug::{TraceEvent, TraceFormatter, Tracer, TracerConfig, JsonFormatter, traced};
use tereo_foundation::{Card, PatternKind, Target};
use tereo_grammar::{Gate, GrammarOptions};
use tereo_lexicon::Catalog;

fn cards(ids: &[&str]) -> Vec<Card> {
    let catalog = Catalog::standard();
    ids.iter().map(|id| catalog.card(id).unwrap()).collect()
}

fn enabled() -> Tracer {
    Tracer::new(TracerConfig::new().enabled())
}

#[test]
fn attempts_group_their_events() {
    let mut tracer = enabled();
    let options = GrammarOptions::default();

    tracer.next_attempt();
    traced::validate(
        &mut tracer,
        PatternKind::He,
        &cards(&["p_he", "art_te", "n_whare"]),
        None,
        &options,
    );
    tracer.next_attempt();
    traced::validate(
        &mut tracer,
        PatternKind::He,
        &cards(&["p_he", "n_whare"]),
        Some(&Target::new("He whare", "A house")),
        &options,
    );

    let buffer = tracer.buffer();
    assert_eq!(buffer.records_for_attempt(1).len(), 3);
    assert_eq!(buffer.records_for_attempt(2).len(), 2);

    let stats = tracer.stats();
    assert_eq!(stats.attempt_count, 2);
    assert_eq!(stats.rejections.get(Gate::NoArticle.name()), Some(&1));
}

#[test]
fn disabled_tracer_records_nothing() {
    let mut tracer = Tracer::disabled();
    traced::validate(
        &mut tracer,
        PatternKind::Ko,
        &cards(&["p_ko"]),
        None,
        &GrammarOptions::default(),
    );
    traced::detect(&mut tracer, &cards(&["p_ko"]));
    assert!(tracer.buffer().is_empty());
}

#[test]
fn buffer_keeps_most_recent() {
    let mut tracer = Tracer::new(TracerConfig::new().enabled().with_buffer_size(4));
    for _ in 0..10 {
        traced::detect(&mut tracer, &cards(&["tm_keite"]));
    }
    assert_eq!(tracer.buffer().len(), 4);
    assert_eq!(tracer.buffer().iter().next().map(|r| r.id), Some(6));
}

#[test]
fn event_filter_limits_recording() {
    let mut tracer = Tracer::new(
        TracerConfig::new()
            .enabled()
            .filter_events(vec!["gate-rejected".to_string()]),
    );
    traced::validate(
        &mut tracer,
        PatternKind::Ko,
        &cards(&["art_te", "p_ko", "n_whare"]),
        None,
        &GrammarOptions::default(),
    );
    assert_eq!(tracer.buffer().len(), 1);
    assert!(matches!(
        tracer.buffer().last().map(|r| &r.event),
        Some(TraceEvent::GateRejected { gate: Gate::Leader, .. })
    ));
}

#[test]
fn json_output_is_one_object_per_record() {
    let mut tracer = enabled();
    traced::hint(&mut tracer, PatternKind::Ko, &[]);
    let record = tracer.buffer().last().unwrap();
    let json = JsonFormatter::new().format(record);
    assert!(json.starts_with('{') && json.ends_with('}'));
    assert!(json.contains("\"type\":\"hint-issued\""));
    assert!(json.contains("\"pattern\":\"ko\""));
}
