//! Skill matching — pluggable strategies that find known skills in free text.
//!
//! Two backends share one contract (text in, subset of the skill list out):
//! - `SubstringMatcher`: case-insensitive substring search. High recall; "R" matches in "HR".
//! - `PhraseMatcher`: token-boundary aware phrase search. Fewer false positives.
//!
//! The backend is chosen once at startup from `SKILL_MATCHER` and carried in `AppState`
//! as `Arc<dyn SkillMatcher>`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use aho_corasick::{AhoCorasick, MatchKind};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::skills::catalog::SkillList;

// ────────────────────────────────────────────────────────────────────────────
// Strategy selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherKind {
    #[default]
    Substring,
    Phrase,
}

impl MatcherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatcherKind::Substring => "substring",
            MatcherKind::Phrase => "phrase",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatcherKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(MatcherKind::Substring),
            "phrase" => Ok(MatcherKind::Phrase),
            other => Err(anyhow!(
                "unknown skill matcher '{other}' (expected 'substring' or 'phrase')"
            )),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Finds which entries of a skill list occur in a text.
///
/// Implementations return canonical skill strings from the list, deduplicated and sorted.
pub trait SkillMatcher: Send + Sync {
    fn kind(&self) -> MatcherKind;

    fn skills(&self) -> &SkillList;

    fn extract(&self, text: &str) -> Vec<String>;
}

/// Builds the matcher for `kind` over `skills`.
pub fn build_matcher(kind: MatcherKind, skills: SkillList) -> Result<Arc<dyn SkillMatcher>> {
    Ok(match kind {
        MatcherKind::Substring => Arc::new(SubstringMatcher::new(skills)),
        MatcherKind::Phrase => Arc::new(PhraseMatcher::new(skills)?),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// SubstringMatcher
// ────────────────────────────────────────────────────────────────────────────

pub struct SubstringMatcher {
    skills: SkillList,
    /// (canonical, lowercased) pairs, in list order.
    needles: Vec<(String, String)>,
}

impl SubstringMatcher {
    pub fn new(skills: SkillList) -> Self {
        let needles = skills
            .iter()
            .map(|s| (s.to_string(), s.to_lowercase()))
            .collect();
        Self { skills, needles }
    }
}

impl SkillMatcher for SubstringMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Substring
    }

    fn skills(&self) -> &SkillList {
        &self.skills
    }

    fn extract(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.needles
            .iter()
            .filter(|(_, needle)| haystack.contains(needle.as_str()))
            .map(|(skill, _)| skill.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PhraseMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Joins tokens in both the haystack and the patterns. Never produced by tokenization.
const TOKEN_SEP: char = '\u{1F}';

pub struct PhraseMatcher {
    skills: SkillList,
    /// `None` when no skill produced any tokens.
    automaton: Option<AhoCorasick>,
    /// Pattern id → canonical skill.
    pattern_skills: Vec<String>,
}

impl PhraseMatcher {
    pub fn new(skills: SkillList) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_skills = Vec::new();
        for skill in skills.iter() {
            let tokens = tokenize(skill);
            if tokens.is_empty() {
                continue;
            }
            patterns.push(delimit(&tokens));
            pattern_skills.push(skill.to_string());
        }

        let automaton = if patterns.is_empty() {
            None
        } else {
            // Overlapping search requires standard match semantics.
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::Standard)
                .build(&patterns)
                .context("Failed to build phrase matcher")?;
            Some(ac)
        };

        Ok(Self {
            skills,
            automaton,
            pattern_skills,
        })
    }
}

impl SkillMatcher for PhraseMatcher {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Phrase
    }

    fn skills(&self) -> &SkillList {
        &self.skills
    }

    fn extract(&self, text: &str) -> Vec<String> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Vec::new();
        }
        let haystack = delimit(&tokens);

        automaton
            .find_overlapping_iter(&haystack)
            .map(|m| self.pattern_skills[m.pattern().as_usize()].clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Lowercased UAX #29 word-boundary segments, minus whitespace and control characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split_word_bounds()
        .filter(|seg| !seg.chars().all(|c| c.is_whitespace() || c.is_control()))
        .map(str::to_lowercase)
        .collect()
}

/// `[a, b]` → `"\x1Fa\x1Fb\x1F"` so a pattern can only match whole tokens.
fn delimit(tokens: &[String]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum::<usize>() + 1);
    out.push(TOKEN_SEP);
    for token in tokens {
        out.push_str(token);
        out.push(TOKEN_SEP);
    }
    out
}
