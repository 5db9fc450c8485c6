//! Default word bank
//!
//! Seeded into storage the first time the game runs.

/// DevOps-themed starter words
pub const DEFAULT_WORDS: &[&str] = &[
    "DEVOPS",
    "AGILE",
    "VERSION",
    "BRANCH",
    "GITHUB",
    "CHANGES",
    "FEATURES",
    "HOTFIX",
    "CONTINUOUS",
    "INTEGRATION",
    "DEPLOYMENT",
    "TESTING",
    "COMMIT",
    "SNAPSHOT",
    "CULTURE",
    "PIPELINE",
    "DOCKER",
    "SCRUM",
    "KANBAN",
    "MERGE",
];

pub const DEFAULT_WORDS_COUNT: usize = 20;
