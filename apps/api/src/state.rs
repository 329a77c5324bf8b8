use std::sync::Arc;

use crate::config::Config;
use crate::skills::matcher::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill extraction backend. Owns the immutable skill list; chosen via SKILL_MATCHER.
    pub matcher: Arc<dyn SkillMatcher>,
}
