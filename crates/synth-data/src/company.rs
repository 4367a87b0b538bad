//! Company names and marketing catch phrases.

use crate::person;
use rand::Rng;

const SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "Ltd", "and Sons", "PLC"];

const BUZZ_ADJECTIVES: &[&str] = &[
    "Adaptive",
    "Automated",
    "Balanced",
    "Centralized",
    "Cloned",
    "Configurable",
    "Distributed",
    "Enhanced",
    "Ergonomic",
    "Extended",
    "Fundamental",
    "Horizontal",
    "Integrated",
    "Monitored",
    "Networked",
    "Optimized",
    "Profound",
    "Reactive",
    "Seamless",
    "Streamlined",
    "Synergistic",
    "Universal",
    "Versatile",
    "Visionary",
];

const BUZZ_DESCRIPTORS: &[&str] = &[
    "24hour",
    "analyzing",
    "asynchronous",
    "bifurcated",
    "composite",
    "contextually-based",
    "dedicated",
    "didactic",
    "directional",
    "encompassing",
    "explicit",
    "full-range",
    "heuristic",
    "homogeneous",
    "impactful",
    "logistical",
    "modular",
    "multi-tasking",
    "object-oriented",
    "scalable",
    "systematic",
    "tertiary",
    "uniform",
    "zero-defect",
];

const BUZZ_NOUNS: &[&str] = &[
    "ability",
    "access",
    "algorithm",
    "alliance",
    "approach",
    "architecture",
    "array",
    "capability",
    "circuit",
    "concept",
    "core",
    "database",
    "framework",
    "hierarchy",
    "infrastructure",
    "installation",
    "instruction-set",
    "interface",
    "middleware",
    "paradigm",
    "pricing-structure",
    "protocol",
    "solution",
    "throughput",
];

/// Company name built from a family name and a legal suffix.
pub fn company<R: Rng>(rng: &mut R) -> String {
    let name = person::last_name(rng);
    match rng.gen_range(0..3) {
        0 => format!("{name} {}", SUFFIXES[rng.gen_range(0..SUFFIXES.len())]),
        1 => format!("{name}-{}", person::last_name(rng)),
        _ => format!(
            "{name}, {} and {}",
            person::last_name(rng),
            person::last_name(rng)
        ),
    }
}

/// Three-part marketing phrase, e.g. "Adaptive scalable throughput".
pub fn catch_phrase<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        BUZZ_ADJECTIVES[rng.gen_range(0..BUZZ_ADJECTIVES.len())],
        BUZZ_DESCRIPTORS[rng.gen_range(0..BUZZ_DESCRIPTORS.len())],
        BUZZ_NOUNS[rng.gen_range(0..BUZZ_NOUNS.len())]
    )
}
