// Skill extraction: a static vocabulary compiled into a token-level phrase matcher.

pub mod matcher;
pub mod tokenizer;
pub mod vocabulary;

pub use matcher::SkillMatcher;
pub use vocabulary::{SkillEntry, SkillVocabulary};

use std::path::Path;

use anyhow::Result;
use tracing::info;

/// Builds the matcher from an operator-supplied vocabulary file, or from the
/// builtin table when no path is given.
pub fn load_matcher(vocabulary_path: Option<&Path>) -> Result<SkillMatcher> {
    let vocabulary = match vocabulary_path {
        Some(path) => {
            info!("Loading skill vocabulary from {}", path.display());
            SkillVocabulary::from_json_file(path)?
        }
        None => SkillVocabulary::builtin(),
    };

    let matcher = SkillMatcher::new(vocabulary);
    info!(
        "Skill matcher ready ({} skills, {} patterns)",
        matcher.skill_count(),
        matcher.pattern_count()
    );
    Ok(matcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_matcher_defaults_to_builtin() {
        let matcher = load_matcher(None).unwrap();
        assert_eq!(matcher.skill_count(), SkillVocabulary::builtin().len());
    }

    #[test]
    fn test_load_matcher_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.json");
        std::fs::write(&path, r#"{"Terraform": ["infrastructure as code"]}"#).unwrap();

        let matcher = load_matcher(Some(path.as_path())).unwrap();
        assert_eq!(
            matcher.extract_skills("Wrote Infrastructure as Code"),
            vec!["Terraform".to_string()]
        );
    }

    #[test]
    fn test_load_matcher_bad_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skills.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_matcher(Some(path.as_path())).is_err());
    }
}
