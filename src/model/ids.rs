use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelId(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunId(String);

impl LevelId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl RunId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LevelId {
    fn from(value: String) -> Self {
        LevelId(value.trim().to_string())
    }
}

impl From<&str> for LevelId {
    fn from(value: &str) -> Self {
        LevelId(value.trim().to_string())
    }
}

impl From<String> for RunId {
    fn from(value: String) -> Self {
        RunId(value)
    }
}

impl From<&str> for RunId {
    fn from(value: &str) -> Self {
        RunId(value.to_string())
    }
}
