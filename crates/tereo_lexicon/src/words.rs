//! Standard vocabulary.
//!
//! Module 1 covers Ko/He sentences, module 2 the Kei te present tense, and
//! module 3 the past and future tense markers with time words.

use tereo_foundation::{CardColor, Word, WordType};

// =============================================================================
// Module 1: Tūāpapa (Foundations)
// =============================================================================

fn particle(id: &str, maori: &str, english: &str) -> Word {
    Word::new(id, maori, english, WordType::Particle, CardColor::Purple, 1)
}

fn article(id: &str, maori: &str, english: &str) -> Word {
    Word::new(id, maori, english, WordType::Article, CardColor::Gray, 1)
}

fn noun(id: &str, maori: &str, english: &str, module: u8) -> Word {
    Word::new(id, maori, english, WordType::Noun, CardColor::Blue, module)
}

fn pronoun(id: &str, maori: &str, english: &str, module: u8) -> Word {
    Word::new(id, maori, english, WordType::Pronoun, CardColor::Red, module)
}

fn demonstrative(id: &str, maori: &str, english: &str) -> Word {
    Word::new(id, maori, english, WordType::Demonstrative, CardColor::Orange, 1)
}

fn module_1() -> Vec<Word> {
    vec![
        particle("p_ko", "Ko", "definite particle")
            .with_pronunciation("kaw (like \"core\")")
            .with_usage("Points to specific things - THE thing")
            .with_cultural_note("Ko often begins introductions and formal speeches"),
        particle("p_he", "He", "indefinite particle")
            .with_pronunciation("heh")
            .with_usage("Classifies things - A/AN thing"),
        article("art_te", "te", "the (singular)")
            .with_pronunciation("teh")
            .with_usage("Singular definite article"),
        article("art_nga", "ngā", "the (plural)")
            .with_pronunciation("ngar")
            .with_usage("Plural definite article"),
        noun("n_whare", "whare", "house", 1)
            .with_pronunciation("fah-reh")
            .with_cultural_note("Also means meeting house on marae"),
        noun("n_ngeru", "ngeru", "cat", 1).with_pronunciation("nge-roo"),
        noun("n_kaiako", "kaiako", "teacher", 1)
            .with_pronunciation("kai-ah-kaw")
            .with_cultural_note("Literally \"one who feeds learning\""),
        noun("n_tangata", "tangata", "person", 1).with_pronunciation("tah-nga-tah"),
        noun("n_kuri", "kuri", "dog", 1).with_pronunciation("koo-ree"),
        noun("n_tamaiti", "tamaiti", "child", 1).with_pronunciation("tah-my-tee"),
        pronoun("pr_au", "au", "I/me", 1).with_pronunciation("ah-oo"),
        pronoun("pr_ia", "ia", "he/she/it", 1)
            .with_pronunciation("ee-ah")
            .with_usage("Gender neutral"),
        pronoun("pr_koe", "koe", "you (singular)", 1).with_pronunciation("kaw-eh"),
        demonstrative("d_tenei", "tēnei", "this (near me)").with_pronunciation("tay-nay"),
        demonstrative("d_tena", "tēnā", "that (near you)").with_pronunciation("tay-nar"),
        demonstrative("d_tera", "tērā", "that (over there)").with_pronunciation("tay-rar"),
    ]
}

// =============================================================================
// Module 2: Kei te (Present Tense)
// =============================================================================

fn adjective(id: &str, maori: &str, english: &str, pronunciation: &str) -> Word {
    Word::new(id, maori, english, WordType::Adjective, CardColor::LightBlue, 2)
        .with_pronunciation(pronunciation)
}

fn verb(id: &str, maori: &str, english: &str, pronunciation: &str) -> Word {
    Word::new(id, maori, english, WordType::Verb, CardColor::Green, 2)
        .with_pronunciation(pronunciation)
}

fn module_2() -> Vec<Word> {
    vec![
        Word::new(
            "tm_keite",
            "Kei te",
            "present continuous marker",
            WordType::TenseMarker,
            CardColor::Yellow,
            2,
        )
        .with_pronunciation("kay teh")
        .with_usage("Indicates actions happening RIGHT NOW")
        .with_cultural_note("Kei te is ONLY for present tense - verbs never change form"),
        adjective("adj_pai", "pai", "good", "pie"),
        adjective("adj_harikoa", "harikoa", "happy", "hah-ree-kaw-ah"),
        adjective("adj_mauiui", "māuiui", "sick/unwell", "mar-oo-wee"),
        adjective("adj_ngenge", "ngenge", "tired", "nge-nge"),
        adjective("adj_pouri", "pōuri", "sad", "paw-oo-ree"),
        adjective("adj_riri", "riri", "angry", "ree-ree"),
        adjective("adj_ora", "ora", "well/alive/healthy", "aw-rah")
            .with_cultural_note("Ora has deep meaning - wellness, life force, health"),
        adjective("adj_hiamoe", "hiamoe", "sleepy", "hee-ah-maw-eh"),
        adjective("adj_matekai", "matekai", "hungry", "mah-teh-kai"),
        adjective("adj_hiainu", "hiainu", "thirsty", "hee-ah-ee-noo"),
        verb("v_haere", "haere", "go", "high-reh")
            .with_cultural_note("Common in greetings: \"Haere mai\" (welcome/come here)"),
        verb("v_kai", "kai", "eat/food", "kai (like \"kite\")")
            .with_usage("To eat (verb) or food (noun)"),
        verb("v_noho", "noho", "sit/live/stay", "naw-haw"),
        verb("v_oma", "oma", "run", "aw-mah"),
        verb("v_mahi", "mahi", "work/do", "mah-hee"),
        verb("v_ako", "ako", "learn/teach", "ah-kaw")
            .with_cultural_note("Learning and teaching are intertwined in Māori worldview"),
        verb("v_mahaki", "māhaki", "rest", "mar-hah-kee"),
        Word::new("pl_i", "i", "at/in (locative)", WordType::LocativeParticle, CardColor::Brown, 2)
            .with_pronunciation("ee")
            .with_usage("Indicates location or object"),
        Word::new(
            "pl_ki",
            "ki",
            "to/towards (directional)",
            WordType::LocativeParticle,
            CardColor::Brown,
            2,
        )
        .with_pronunciation("kee")
        .with_usage("Indicates direction/destination"),
        Word::new("int_ahua", "āhua", "somewhat/rather", WordType::Intensifier, CardColor::Pink, 2)
            .with_pronunciation("ar-hoo-ah"),
        Word::new("int_tino", "tino", "very", WordType::Intensifier, CardColor::Pink, 2)
            .with_pronunciation("tee-naw"),
        noun("n_kura", "kura", "school", 2).with_pronunciation("koo-rah"),
        noun("n_tamaki", "Tāmaki Makaurau", "Auckland", 2)
            .with_pronunciation("tar-mah-kee mah-kow-row")
            .with_cultural_note("Traditional Māori name for Auckland"),
        pronoun("pr_matou", "mātou", "we/us (exclusive)", 2)
            .with_pronunciation("mar-toh")
            .with_usage("Does NOT include the listener"),
        pronoun("pr_tatou", "tātou", "we/us (inclusive)", 2)
            .with_pronunciation("tar-toh")
            .with_usage("INCLUDES the listener"),
        pronoun("pr_koutou", "koutou", "you (plural)", 2).with_pronunciation("koh-toh"),
        pronoun("pr_ratou", "rātou", "they/them", 2).with_pronunciation("rar-toh"),
    ]
}

// =============================================================================
// Module 3: I and Ka (Past and Future)
// =============================================================================

fn time_word(id: &str, maori: &str, english: &str, pronunciation: &str) -> Word {
    Word::new(id, maori, english, WordType::TimeWord, CardColor::Teal, 3)
        .with_pronunciation(pronunciation)
}

fn module_3() -> Vec<Word> {
    vec![
        Word::new("tm_i", "I", "past tense marker", WordType::TenseMarker, CardColor::Yellow, 3)
            .with_pronunciation("ee")
            .with_usage("Marks a completed action or past state"),
        Word::new("tm_ka", "Ka", "future tense marker", WordType::TenseMarker, CardColor::Yellow, 3)
            .with_pronunciation("kah")
            .with_usage("Marks an action that will happen"),
        time_word("tw_inanahi", "inanahi", "yesterday", "ee-nah-nah-hee"),
        time_word("tw_apopo", "āpōpō", "tomorrow", "ar-paw-paw"),
        time_word("tw_inaianei", "ināianei", "now", "ee-nar-ee-ah-nay"),
    ]
}

/// Every word in the standard vocabulary, in module order.
#[must_use]
pub fn standard_words() -> Vec<Word> {
    let mut words = module_1();
    words.extend(module_2());
    words.extend(module_3());
    words
}
