//! Whole-lesson session walkthroughs

use tereo_foundation::{ErrorKind, PatternKind};
use tereo_lexicon::Curriculum;
use tereo_runtime::{LessonStatus, Session, SessionConfig};

/// Builds the active challenge's target from the hand and submits it.
fn solve(session: &mut Session) -> bool {
    let required = session.challenge().unwrap().required_cards.clone();
    for (slot, id) in required.iter().enumerate() {
        let index = session.hand().iter().position(|c| &c.id == id).unwrap();
        session.place(index, slot).unwrap();
    }
    session.submit().unwrap().result.correct
}

#[test]
fn every_lesson_can_be_completed() {
    let mut session = Session::new(SessionConfig::new().with_seed(11).with_decoys(2));
    for lesson in Curriculum::standard().lessons() {
        session.start_lesson(&lesson.id).unwrap();
        loop {
            assert!(solve(&mut session), "{:?} not solvable", session.challenge());
            if session.next_challenge().unwrap().is_none() {
                break;
            }
        }
        let progress = session.log().progress(&lesson.id).unwrap();
        assert_eq!(progress.status, LessonStatus::Completed, "{}", lesson.id);
    }
    assert_eq!(session.log().accuracy(), Some(1.0));
}

#[test]
fn score_counts_only_correct_submits() {
    let mut session = Session::new(SessionConfig::new().with_decoys(0));
    session.start_lesson("lesson_1_2").unwrap();
    for (slot, id) in [(0, "n_whare"), (1, "p_he")] {
        let index = session.hand().iter().position(|c| c.id == id).unwrap();
        session.place(index, slot).unwrap();
    }
    assert!(!session.submit().unwrap().result.valid);
    assert_eq!(session.score(), 0);
    session.reset();
    assert!(solve(&mut session));
    assert_eq!(session.score(), 10);
    assert_eq!(session.log().attempts().len(), 2);
}

#[test]
fn free_build_accepts_any_valid_sentence() {
    let mut session = Session::default();
    session.start_free_build(PatternKind::KeiTe);
    assert_eq!(session.slots().len(), 5);

    for (slot, surface) in ["Kei te", "harikoa", "rātou"].iter().enumerate() {
        let index = session
            .hand()
            .iter()
            .position(|c| c.maori == *surface)
            .unwrap();
        session.place(index, slot).unwrap();
    }
    let submission = session.submit().unwrap();
    assert!(submission.result.correct);
    assert_eq!(submission.result.translation, "They are happy");
}

#[test]
fn lesson_errors() {
    let mut session = Session::default();
    assert!(matches!(
        session.start_lesson("lesson_0_0").unwrap_err().kind,
        ErrorKind::LessonNotFound(_)
    ));
    assert!(matches!(
        session.next_challenge().unwrap_err().kind,
        ErrorKind::NoActiveChallenge
    ));
}

#[test]
fn gapped_sentence_is_refused_without_logging() {
    let mut session = Session::new(SessionConfig::new().with_decoys(0));
    session.start_lesson("lesson_1_3").unwrap();
    for (slot, id) in [(0, "p_ko"), (2, "art_te"), (3, "n_whare")] {
        let index = session.hand().iter().position(|c| c.id == id).unwrap();
        session.place(index, slot).unwrap();
    }

    let err = session.submit().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IncompleteSentence(_)));
    assert!(session.log().attempts().is_empty());

    session.reset();
    assert!(solve(&mut session));
    assert_eq!(session.log().attempts().len(), 1);
}
