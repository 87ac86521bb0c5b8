use regex::Regex;

/// Line admission filter. Include and exclude can't be combined.
#[derive(Debug, Clone, Default)]
pub enum FilterMode {
    #[default]
    None,
    /// Only lines matching the pattern are replayed.
    Include(Regex),
    /// Lines matching the pattern are dropped.
    Exclude(Regex),
}

impl FilterMode {
    pub fn admits(&self, line: &str) -> bool {
        match self {
            Self::None => true,
            Self::Include(pattern) => pattern.is_match(line),
            Self::Exclude(pattern) => !pattern.is_match(line),
        }
    }
}
