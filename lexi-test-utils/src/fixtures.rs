//! Sample dataset fixtures
//!
//! Small JSON documents matching the on-disk dataset shape, for
//! exercising dataset loading and the filter endpoints.

/// A six-word vocabulary dataset covering several levels and topics
pub fn sample_vocabulary_json() -> &'static str {
    r#"[
  {"Base Word": "abandon", "Guideword": "LEAVE", "Level": "B2", "Part of Speech": "verb", "Topic": "actions"},
  {"Base Word": "ability", "Guideword": "SKILL", "Level": "A2", "Part of Speech": "noun", "Topic": "education"},
  {"Base Word": "able", "Guideword": "CAN DO", "Level": "A2", "Part of Speech": "adjective", "Topic": "education"},
  {"Base Word": "about", "Guideword": "ON SUBJECT OF", "Level": "A1", "Part of Speech": "preposition", "Topic": ""},
  {"Base Word": "abroad", "Guideword": "", "Level": "A2", "Part of Speech": "adverb", "Topic": "travel"},
  {"Base Word": "absorb", "Guideword": "TAKE IN", "Level": "C1", "Part of Speech": "verb", "Topic": "science"}
]"#
}

/// A three-point grammar dataset
pub fn sample_grammar_json() -> &'static str {
    r#"[
  {"Level": "A1", "SuperCategory": "Verbs", "SubCategory": "present simple", "Guideword": "FORM: AFFIRMATIVE", "Can-do statement": "Can use the present simple with regular verbs."},
  {"Level": "B1", "SuperCategory": "Verbs", "SubCategory": "past perfect", "Guideword": "FORM", "Can-do statement": "Can use the past perfect in reported speech."},
  {"Level": "B2", "SuperCategory": "Clauses", "SubCategory": "conditionals", "Guideword": "USE: IMAGINED SITUATIONS", "Can-do statement": "Can use the third conditional."}
]"#
}
