//! Static matcher tables, three severity tiers per lexical category.
//!
//! Matchers are case-insensitive alternations over free text. These tables
//! are fixed at build time; the catalog never mutates them at runtime.

pub const NEGATIVE_EXTREME: &[&str] = &[
    "hate|hated|hating",
    "terrible|horrible|awful",
    "worst|bad|negative",
];

pub const NEGATIVE_MODERATE: &[&str] = &[
    "depressing|depressed",
    "anxiety|anxious",
    "stress|stressed",
    "worried|worrying",
    "upset|upsetting",
];

pub const NEGATIVE_MILD: &[&str] = &[
    "not great",
    "could be better",
    "not ideal",
    "disappointing",
    "frustrated",
];

pub const TRIGGERING_EXTREME: &[&str] = &[
    "suicide|self-harm",
    "abuse|abused",
    "trauma|traumatic",
];

pub const TRIGGERING_MODERATE: &[&str] = &[
    "violence|violent",
    "death|died|dying",
    "attack|attacked",
];

pub const TRIGGERING_MILD: &[&str] = &[
    "scary|frightening",
    "disturbing",
    "upsetting",
];

pub const COMPARISON_EXTREME: &[&str] = &[
    "better than|worse than",
    "perfect|perfection",
    "never good enough",
];

pub const COMPARISON_MODERATE: &[&str] = &[
    "should be|must be",
    "compare|comparison",
    "not as good as",
];

pub const COMPARISON_MILD: &[&str] = &[
    "could be better",
    "wish i was",
    "if only",
];
