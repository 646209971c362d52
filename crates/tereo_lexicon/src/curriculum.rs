//! Modules, lessons and challenges.

use std::sync::LazyLock;

use tereo_foundation::{Challenge, PatternKind, Target};

use crate::author::challenge_from_target;
use crate::catalog::Catalog;

static STANDARD: LazyLock<Curriculum> = LazyLock::new(|| Curriculum::build(Catalog::standard()));

/// How a lesson is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonKind {
    /// Introduces a pattern.
    Tutorial,
    /// Drills a known pattern.
    Practice,
    /// Combines patterns.
    Challenge,
}

/// The grammar point a lesson teaches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grammar {
    /// Structure summary, e.g. `Ko + te/ngā + noun`.
    pub structure: String,
    /// Slot labels in order.
    pub pattern: Vec<String>,
    /// Explanation for the learner.
    pub explanation: String,
    /// Memory aids.
    pub tips: Vec<String>,
}

/// A single lesson.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    /// Stable id, `lesson_{module}_{n}`.
    pub id: String,
    /// Owning module id.
    pub module_id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Position within the module.
    pub order: u32,
    /// Presentation style.
    pub kind: LessonKind,
    /// Grammar point.
    pub grammar: Grammar,
    /// Word ids first taught here.
    pub vocabulary: Vec<String>,
}

/// A curriculum module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Module {
    /// Stable id, `module_{n}`.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Position within the curriculum.
    pub order: u32,
    /// Lessons in this module.
    pub lessons: Vec<Lesson>,
}

/// All modules and the challenge bank.
#[derive(Clone, Debug, Default)]
pub struct Curriculum {
    modules: Vec<Module>,
    challenges: Vec<Challenge>,
}

impl Curriculum {
    /// The standard curriculum, built on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Creates a curriculum from parts.
    #[must_use]
    pub fn new(modules: Vec<Module>, challenges: Vec<Challenge>) -> Self {
        Self { modules, challenges }
    }

    /// All modules.
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// All lessons, module by module.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.iter().flat_map(|m| m.lessons.iter())
    }

    /// All challenges.
    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Looks up a module.
    #[must_use]
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Looks up a lesson in any module.
    #[must_use]
    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        self.lessons().find(|l| l.id == id)
    }

    /// Looks up a challenge.
    #[must_use]
    pub fn challenge(&self, id: &str) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    /// Challenges belonging to a lesson, matched by id prefix.
    #[must_use]
    pub fn challenges_for_lesson(&self, lesson_id: &str) -> Vec<&Challenge> {
        let prefix = format!("c_{}_", lesson_id.trim_start_matches("lesson_"));
        self.challenges
            .iter()
            .filter(|c| c.id.starts_with(&prefix))
            .collect()
    }

    /// The lesson after `lesson_id` in the same module.
    #[must_use]
    pub fn next_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        let (sorted, index) = self.position(lesson_id)?;
        sorted.get(index + 1).copied()
    }

    /// The lesson before `lesson_id` in the same module.
    #[must_use]
    pub fn previous_lesson(&self, lesson_id: &str) -> Option<&Lesson> {
        let (sorted, index) = self.position(lesson_id)?;
        index.checked_sub(1).and_then(|i| sorted.get(i).copied())
    }

    /// The lesson's module siblings in order, and its index among them.
    fn position(&self, lesson_id: &str) -> Option<(Vec<&Lesson>, usize)> {
        let lesson = self.lesson(lesson_id)?;
        let module = self.module(&lesson.module_id)?;
        let mut sorted: Vec<&Lesson> = module.lessons.iter().collect();
        sorted.sort_by_key(|l| l.order);
        let index = sorted.iter().position(|l| l.id == lesson_id)?;
        Some((sorted, index))
    }

    fn build(catalog: &Catalog) -> Self {
        let challenges = SAMPLE_CHALLENGES
            .iter()
            .map(|&(id, pattern, surface, gloss)| {
                challenge_from_target(catalog, id, pattern, Target::new(surface, gloss))
            })
            .collect();
        Self::new(vec![module_1(), module_2()], challenges)
    }
}

/// Challenge id, pattern, target surface and target gloss.
const SAMPLE_CHALLENGES: &[(&str, PatternKind, &str, &str)] = &[
    ("c_1_1_1", PatternKind::Ko, "Ko te whare", "The house"),
    ("c_1_1_2", PatternKind::Ko, "Ko ngā ngeru", "The cats"),
    ("c_1_2_1", PatternKind::He, "He whare", "A house"),
    ("c_1_2_2", PatternKind::He, "He kaiako au", "I am a teacher"),
    ("c_1_3_1", PatternKind::Ko, "Ko te whare tēnei", "This is the house"),
    ("c_1_4_1", PatternKind::Equative, "Ko au te kaiako", "I am the teacher"),
    ("c_2_1_1", PatternKind::KeiTe, "Kei te pai au", "I am good"),
    ("c_2_1_2", PatternKind::KeiTe, "Kei te harikoa koe", "You are happy"),
    ("c_2_2_1", PatternKind::KeiTe, "Kei te tino pai au", "I am very good"),
    (
        "c_2_3_1",
        PatternKind::KeiTe,
        "Kei te noho au i Tāmaki Makaurau",
        "I am living in Auckland",
    ),
];

#[allow(clippy::too_many_arguments)]
fn lesson(
    id: &str,
    order: u32,
    kind: LessonKind,
    title: &str,
    description: &str,
    structure: &str,
    pattern: &[&str],
    explanation: &str,
    tips: &[&str],
    vocabulary: &[&str],
) -> Lesson {
    let module = id
        .trim_start_matches("lesson_")
        .split('_')
        .next()
        .unwrap_or_default();
    Lesson {
        id: id.to_string(),
        module_id: format!("module_{module}"),
        title: title.to_string(),
        description: description.to_string(),
        order,
        kind,
        grammar: Grammar {
            structure: structure.to_string(),
            pattern: pattern.iter().map(ToString::to_string).collect(),
            explanation: explanation.to_string(),
            tips: tips.iter().map(ToString::to_string).collect(),
        },
        vocabulary: vocabulary.iter().map(ToString::to_string).collect(),
    }
}

fn module_1() -> Module {
    Module {
        id: "module_1".into(),
        title: "Tūāpapa (Foundations)".into(),
        description: "Master Ko and He sentences to identify and classify people and things".into(),
        order: 1,
        lessons: vec![
            lesson(
                "lesson_1_1",
                1,
                LessonKind::Tutorial,
                "Meet Ko - Introducing Ko sentences",
                "Learn to identify specific things using Ko",
                "Ko + te/ngā + noun",
                &["Ko", "article", "noun"],
                "Ko is a definite particle that introduces something specific. \
                 Always followed by te (singular) or ngā (plural).",
                &[
                    "Ko is like pointing at something and saying \"THAT one!\"",
                    "te is for ONE thing (singular)",
                    "ngā is for MANY things (plural)",
                ],
                &["p_ko", "art_te", "art_nga", "n_whare", "n_ngeru", "n_kaiako", "n_tangata"],
            ),
            lesson(
                "lesson_1_2",
                2,
                LessonKind::Practice,
                "He Sentences - Classification",
                "Learn to classify things using He",
                "He + noun",
                &["He", "noun"],
                "He classifies things - \"a/an\" or \"some\". Never use articles (te/ngā) after He!",
                &[
                    "He = \"a/an\" for classification",
                    "Ko = \"the\" for specific things",
                    "NEVER use te/ngā after He",
                ],
                &["p_he"],
            ),
            lesson(
                "lesson_1_3",
                3,
                LessonKind::Practice,
                "Tēnei, Tēnā, Tērā - This and That",
                "Add demonstratives to Ko sentences",
                "Ko + te/ngā + noun + demonstrative",
                &["Ko", "article", "noun", "demonstrative"],
                "Demonstratives indicate distance: tēnei (near speaker), tēnā (near listener), \
                 tērā (far from both)",
                &[
                    "tēnei = this (by me)",
                    "tēnā = that (by you)",
                    "tērā = that (over there)",
                    "Demonstrative comes AFTER the noun",
                ],
                &["d_tenei", "d_tena", "d_tera"],
            ),
            lesson(
                "lesson_1_4",
                4,
                LessonKind::Challenge,
                "Equative Sentences - I am, You are",
                "Connect pronouns to nouns using Ko",
                "Ko + pronoun + te/ngā + noun",
                &["Ko", "pronoun", "article", "noun"],
                "Equative sentences connect who someone is to what they are",
                &[
                    "Ko + pronoun + te/ngā + noun",
                    "au = I/me",
                    "koe = you (singular)",
                    "ia = he/she/it (gender neutral!)",
                ],
                &["pr_au", "pr_koe", "pr_ia"],
            ),
        ],
    }
}

fn module_2() -> Module {
    Module {
        id: "module_2".into(),
        title: "Kei te (Present Tense)".into(),
        description: "Express actions and states happening right now".into(),
        order: 2,
        lessons: vec![
            lesson(
                "lesson_2_1",
                1,
                LessonKind::Tutorial,
                "Kei te Basics - Present Continuous",
                "Learn to express current states and actions",
                "Kei te + adjective/verb + pronoun",
                &["Kei te", "adjective/verb", "pronoun"],
                "Kei te indicates present continuous - actions or states happening RIGHT NOW",
                &[
                    "Kei te = present continuous (right now!)",
                    "Verbs never change form in te reo",
                    "Word order: Kei te + action/state + who",
                ],
                &["tm_keite", "adj_pai", "adj_harikoa", "adj_ngenge", "v_haere", "v_kai"],
            ),
            lesson(
                "lesson_2_2",
                2,
                LessonKind::Practice,
                "Intensifiers - Very and Somewhat",
                "Add intensity with tino and āhua",
                "Kei te + intensifier + adjective/verb + pronoun",
                &["Kei te", "intensifier", "adjective/verb", "pronoun"],
                "Intensifiers modify the degree of the adjective or verb",
                &[
                    "tino = very",
                    "āhua = somewhat/rather",
                    "Intensifier goes BEFORE the adjective/verb",
                ],
                &["int_tino", "int_ahua"],
            ),
            lesson(
                "lesson_2_3",
                3,
                LessonKind::Challenge,
                "Locations - At and To",
                "Add locations with i and ki",
                "Kei te + verb + pronoun + i/ki + location",
                &["Kei te", "verb", "pronoun", "locative", "location"],
                "i indicates location (at/in), ki indicates direction (to/towards)",
                &[
                    "i = at/in (where you are)",
                    "ki = to/towards (where you're going)",
                    "Only works with VERBS, not adjectives",
                    "Location comes at the END",
                ],
                &["pl_i", "pl_ki", "n_kura", "n_tamaki", "v_noho"],
            ),
        ],
    }
}
