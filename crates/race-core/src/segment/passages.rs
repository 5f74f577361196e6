use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_PASSAGES_TOML: &str = include_str!("default_passages.toml");

#[derive(Debug, thiserror::Error)]
pub enum PassageError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("passage pool '{0}' is empty")]
    EmptyPool(&'static str),
    #[error("blank passage at {pool}[{index}]")]
    BlankPassage { pool: &'static str, index: usize },
}

/// Segment texts grouped by difficulty tier.
#[derive(Debug, Clone, Deserialize)]
pub struct Passages {
    pub easy: Vec<String>,
    pub medium: Vec<String>,
    pub hard: Vec<String>,
}

impl Passages {
    /// The embedded default pools, parsed once.
    pub fn builtin() -> &'static Passages {
        static INSTANCE: OnceLock<Passages> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            parse_passages_toml(DEFAULT_PASSAGES_TOML).expect("passages TOML must be valid")
        })
    }

    /// Pool for a difficulty: 1 → easy, 2 → medium, anything higher → hard.
    pub fn pool(&self, difficulty: u32) -> &[String] {
        match difficulty {
            0 | 1 => &self.easy,
            2 => &self.medium,
            _ => &self.hard,
        }
    }
}

pub fn parse_passages_toml(toml_str: &str) -> Result<Passages, PassageError> {
    let passages: Passages =
        toml::from_str(toml_str).map_err(|e| PassageError::Parse(e.to_string()))?;

    for (name, pool) in [
        ("easy", &passages.easy),
        ("medium", &passages.medium),
        ("hard", &passages.hard),
    ] {
        if pool.is_empty() {
            return Err(PassageError::EmptyPool(name));
        }
        if let Some(index) = pool.iter().position(|p| p.trim().is_empty()) {
            return Err(PassageError::BlankPassage { pool: name, index });
        }
    }

    Ok(passages)
}
