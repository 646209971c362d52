//! Practice session state.
//!
//! A session walks a learner through a lesson's challenges (or a free build),
//! holding the dealt hand, the sentence under construction, the score and the
//! attempt log. Validation goes through the traced wrappers so every submit
//! and hint lands in the session's tracer.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tereo_debug::{Tracer, TracerConfig, traced};
use tereo_foundation::card::surface;
use tereo_foundation::{
    Card, Challenge, Error, ErrorContext, ErrorKind, PatternKind, Result, SentenceSlots,
};
use tereo_grammar::{GrammarOptions, ValidationResult};
use tereo_lexicon::{Catalog, Curriculum, Token, deal};

use crate::attempts::{AttemptLog, LessonStatus};

/// Points awarded for a correct sentence.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Slots offered in free building: the longest shape of each pattern.
#[must_use]
pub const fn free_build_slots(kind: PatternKind) -> usize {
    match kind {
        PatternKind::Ko | PatternKind::Equative => 4,
        PatternKind::He => 3,
        PatternKind::KeiTe => 5,
    }
}

// =============================================================================
// Session Configuration
// =============================================================================

/// Configuration for a session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Seed for dealing hands.
    pub seed: u64,
    /// Variation decoys added to each challenge hand.
    pub decoys: usize,
    /// Tracer settings.
    pub tracer: TracerConfig,
    /// Grammar engine options.
    pub grammar: GrammarOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            decoys: 2,
            tracer: TracerConfig::default(),
            grammar: GrammarOptions::default(),
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the number of decoys per hand.
    #[must_use]
    pub fn with_decoys(mut self, decoys: usize) -> Self {
        self.decoys = decoys;
        self
    }

    /// Builder method to set the tracer configuration.
    #[must_use]
    pub fn with_tracer(mut self, tracer: TracerConfig) -> Self {
        self.tracer = tracer;
        self
    }

    /// Builder method to set grammar options.
    #[must_use]
    pub fn with_grammar(mut self, grammar: GrammarOptions) -> Self {
        self.grammar = grammar;
        self
    }
}

// =============================================================================
// Submission
// =============================================================================

/// What happened when a sentence was submitted.
#[derive(Clone, Debug)]
pub struct Submission {
    /// The validator's verdict.
    pub result: ValidationResult,
    /// Points earned by this submit.
    pub points: u32,
    /// Whether this submit finished the lesson.
    pub lesson_complete: bool,
}

// =============================================================================
// Session
// =============================================================================

/// Session state for one learner.
pub struct Session {
    catalog: &'static Catalog,
    curriculum: &'static Curriculum,
    options: GrammarOptions,
    tracer: Tracer,
    rng: ChaCha8Rng,
    decoys: usize,

    lesson_id: Option<String>,
    challenges: Vec<Challenge>,
    index: usize,
    hand: Vec<Card>,
    slots: SentenceSlots,

    score: u32,
    lesson_score: u32,
    log: AttemptLog,
}

impl Session {
    /// Creates a session over the standard catalog and curriculum.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_sources(Catalog::standard(), Curriculum::standard(), config)
    }

    /// Creates a session over the given catalog and curriculum.
    #[must_use]
    pub fn with_sources(
        catalog: &'static Catalog,
        curriculum: &'static Curriculum,
        config: SessionConfig,
    ) -> Self {
        Self {
            catalog,
            curriculum,
            options: config.grammar,
            tracer: Tracer::new(config.tracer),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            decoys: config.decoys,
            lesson_id: None,
            challenges: Vec::new(),
            index: 0,
            hand: Vec::new(),
            slots: SentenceSlots::default(),
            score: 0,
            lesson_score: 0,
            log: AttemptLog::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The word catalog.
    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    /// The curriculum.
    #[must_use]
    pub fn curriculum(&self) -> &'static Curriculum {
        self.curriculum
    }

    /// The active challenge, if any.
    #[must_use]
    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenges.get(self.index)
    }

    /// The active lesson id, if a lesson was started.
    #[must_use]
    pub fn lesson_id(&self) -> Option<&str> {
        self.lesson_id.as_deref()
    }

    /// Position of the active challenge and the lesson length.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.challenges.len())
    }

    /// Cards not yet placed.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The sentence under construction.
    #[must_use]
    pub fn slots(&self) -> &SentenceSlots {
        &self.slots
    }

    /// Total points this session.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// The attempt log.
    #[must_use]
    pub fn log(&self) -> &AttemptLog {
        &self.log
    }

    /// Replaces the attempt log (after loading one from disk).
    pub fn set_log(&mut self, log: AttemptLog) {
        self.log = log;
    }

    /// The tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Mutable access to the tracer.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Grammar options in force.
    #[must_use]
    pub fn options(&self) -> &GrammarOptions {
        &self.options
    }

    // -------------------------------------------------------------------------
    // Starting work
    // -------------------------------------------------------------------------

    /// Starts a lesson at its first challenge.
    ///
    /// # Errors
    ///
    /// Returns an error if the lesson is unknown or has no challenges.
    pub fn start_lesson(&mut self, lesson_id: &str) -> Result<&Challenge> {
        let curriculum = self.curriculum;
        let lesson = curriculum
            .lesson(lesson_id)
            .ok_or_else(|| Error::lesson_not_found(lesson_id))?;

        let challenges: Vec<Challenge> = curriculum
            .challenges_for_lesson(lesson_id)
            .into_iter()
            .cloned()
            .collect();
        if challenges.is_empty() {
            return Err(Error::challenge_not_found(lesson_id).with_context(
                ErrorContext::new()
                    .with_source(lesson_id)
                    .with_frame("start_lesson"),
            ));
        }

        self.lesson_id = Some(lesson.id.clone());
        self.challenges = challenges;
        self.lesson_score = 0;
        self.log
            .upsert_progress(&lesson.id, &lesson.module_id, LessonStatus::InProgress, 0);
        self.enter(0)
    }

    /// Starts a free build for a pattern: no target, every catalog word dealt.
    pub fn start_free_build(&mut self, kind: PatternKind) -> &Challenge {
        self.lesson_id = None;
        self.challenges = vec![
            Challenge::new(format!("free_{}", kind.name()), kind)
                .with_instruction(format!("Build any {} sentence", kind.label())),
        ];
        self.index = 0;
        self.hand = self.catalog.words().iter().map(Card::from).collect();
        self.slots = SentenceSlots::new(free_build_slots(kind));
        &self.challenges[0]
    }

    /// Moves to the challenge at `index` and deals its hand.
    fn enter(&mut self, index: usize) -> Result<&Challenge> {
        let challenge = self
            .challenges
            .get(index)
            .ok_or_else(Error::no_active_challenge)?;
        let len = if challenge.slots.is_empty() {
            free_build_slots(challenge.pattern)
        } else {
            challenge.slots.len()
        };
        self.hand = deal(self.catalog, challenge, self.decoys, &mut self.rng);
        self.slots = SentenceSlots::new(len);
        self.index = index;
        Ok(&self.challenges[index])
    }

    fn active(&self) -> Result<&Challenge> {
        self.challenge().ok_or_else(Error::no_active_challenge)
    }

    // -------------------------------------------------------------------------
    // Building
    // -------------------------------------------------------------------------

    /// Moves the card at `hand_index` into `slot`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no active challenge, the hand index is
    /// out of range, or the slot is out of range or occupied. The hand is
    /// unchanged on error.
    pub fn place(&mut self, hand_index: usize, slot: usize) -> Result<()> {
        self.active()?;
        let card = self
            .hand
            .get(hand_index)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::HandIndex(hand_index)))?;
        self.slots.place(slot, card)?;
        self.hand.remove(hand_index);
        Ok(())
    }

    /// Returns the card in `slot` to the end of the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is out of range or empty.
    pub fn take(&mut self, slot: usize) -> Result<&Card> {
        let card = self.slots.take(slot)?;
        self.hand.push(card);
        Ok(&self.hand[self.hand.len() - 1])
    }

    /// Returns every placed card to the hand.
    pub fn reset(&mut self) {
        let cards = self.slots.clear();
        self.hand.extend(cards);
    }

    /// Placed cards in slot order, skipping gaps.
    #[must_use]
    pub fn built(&self) -> Vec<Card> {
        self.slots.iter().flatten().cloned().collect()
    }

    /// Next-step guidance for the leading filled slots.
    ///
    /// Falls back to the challenge's authored hints when the pattern has
    /// nothing to say.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no active challenge.
    pub fn hint(&mut self) -> Result<Option<String>> {
        let challenge = self.active()?;
        let kind = challenge.pattern;
        let authored = challenge.hints.first().cloned();
        let filled = self.slots.filled();
        Ok(traced::hint(&mut self.tracer, kind, &filled)
            .map(str::to_string)
            .or(authored))
    }

    /// The sentence to validate, or an error if it has holes.
    ///
    /// Authored challenges need every slot filled. Free builds accept any
    /// leading run of filled slots with nothing placed after it.
    fn sentence(&self, challenge: &Challenge) -> Result<Vec<Card>> {
        let filled = self.slots.filled();
        let complete = if challenge.slots.is_empty() {
            filled.len() == self.slots.iter().flatten().count()
        } else {
            self.slots.is_complete()
        };
        if complete {
            Ok(filled)
        } else {
            let empty = self.slots.iter().filter(Option::is_none).count();
            Err(Error::incomplete_sentence(empty).with_context(
                ErrorContext::new()
                    .with_source(challenge.id.as_str())
                    .with_frame("submit"),
            ))
        }
    }

    /// Validates the built sentence against the active challenge.
    ///
    /// Awards points on a correct answer, records the attempt, and marks
    /// the lesson completed when its last challenge is answered correctly.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no active challenge or the sentence has
    /// empty slots. Nothing is recorded in that case.
    pub fn submit(&mut self) -> Result<Submission> {
        let challenge = self.active()?.clone();
        let cards = self.sentence(&challenge)?;

        self.tracer.next_attempt();
        let result = traced::validate(
            &mut self.tracer,
            challenge.pattern,
            &cards,
            challenge.target.as_ref(),
            &self.options,
        );

        let points = if result.correct { POINTS_PER_CORRECT } else { 0 };
        self.score += points;
        self.lesson_score += points;

        self.log.record(&challenge.id, &cards, result.correct);
        self.tracer.attempt_recorded(&challenge.id, result.correct);

        let last = self.index + 1 == self.challenges.len();
        let lesson_complete = result.correct && last && self.lesson_id.is_some();
        let curriculum = self.curriculum;
        if let Some(lesson) = self.lesson_id.as_deref().and_then(|id| curriculum.lesson(id)) {
            let status = if lesson_complete {
                LessonStatus::Completed
            } else {
                LessonStatus::InProgress
            };
            self.log
                .upsert_progress(&lesson.id, &lesson.module_id, status, self.lesson_score);
        }

        Ok(Submission {
            result,
            points,
            lesson_complete,
        })
    }

    /// Advances to the next challenge in the lesson.
    ///
    /// Returns `Ok(None)` when the lesson has no more challenges.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no active challenge.
    pub fn next_challenge(&mut self) -> Result<Option<&Challenge>> {
        self.active()?;
        let next = self.index + 1;
        if next >= self.challenges.len() {
            return Ok(None);
        }
        self.enter(next).map(Some)
    }

    // -------------------------------------------------------------------------
    // Direct validation
    // -------------------------------------------------------------------------

    /// Tokenizes `text` with the catalog, detects its pattern and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if a word is not in the catalog or no pattern fits
    /// the leading words.
    pub fn say(&mut self, text: &str) -> Result<(PatternKind, ValidationResult)> {
        let mut cards = Vec::new();
        for token in self.catalog.tokenize(text) {
            match token {
                Token::Known(card) => cards.push(card),
                Token::Unknown(word) => return Err(Error::word_not_found(word)),
            }
        }

        self.tracer.next_attempt();
        let kind = traced::detect(&mut self.tracer, &cards)
            .ok_or_else(|| Error::unknown_pattern(surface(&cards)))?;
        let result = traced::validate(&mut self.tracer, kind, &cards, None, &self.options);
        Ok((kind, result))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
