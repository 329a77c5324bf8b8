use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Result of comparing a resume's skills with a job description's skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    /// Cosine similarity in [0, 1], rounded to 2 decimals.
    pub score: f64,
}

/// Scores two extracted skill sets against each other.
///
/// Each set is joined into one space-separated document, both documents are encoded as
/// term-frequency vectors over their joint vocabulary, and the cosine of the two vectors is
/// the score. An empty side short-circuits to 0.0 with no matched skills.
pub fn compute_match(resume_skills: Vec<String>, jd_skills: Vec<String>) -> MatchResult {
    if resume_skills.is_empty() || jd_skills.is_empty() {
        return MatchResult {
            resume_skills,
            jd_skills,
            matched_skills: vec![],
            score: 0.0,
        };
    }

    let score = round2(cosine_similarity(
        &resume_skills.join(" "),
        &jd_skills.join(" "),
    ));

    let resume_set: BTreeSet<&String> = resume_skills.iter().collect();
    let matched_skills = jd_skills
        .iter()
        .filter(|s| resume_set.contains(s))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    MatchResult {
        resume_skills,
        jd_skills,
        matched_skills,
        score,
    }
}

/// Cosine similarity of the term-frequency vectors of two documents.
///
/// Returns 0.0 when the joint vocabulary is empty or either vector is all zeros.
fn cosine_similarity(a: &str, b: &str) -> f64 {
    // term → (count in a, count in b); sorted iteration keeps the sum order fixed.
    let mut vocab: BTreeMap<String, (u32, u32)> = BTreeMap::new();
    for term in terms(a) {
        vocab.entry(term).or_default().0 += 1;
    }
    for term in terms(b) {
        vocab.entry(term).or_default().1 += 1;
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for &(ca, cb) in vocab.values() {
        let (ca, cb) = (f64::from(ca), f64::from(cb));
        dot += ca * cb;
        norm_a += ca * ca;
        norm_b += cb * cb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Lowercased word tokens of at least two characters; single letters carry no weight.
fn terms(doc: &str) -> impl Iterator<Item = String> + '_ {
    static WORD: OnceLock<Regex> = OnceLock::new();
    let word = WORD.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("static regex is valid"));
    word.find_iter(doc).map(|m| m.as_str().to_lowercase())
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
