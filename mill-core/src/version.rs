use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Format version declared by an input document, e.g. `0.1.0-beta`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct SpecVersion {
    major: u32,
    minor: u32,
    patch: u32,
    pre: Option<String>,
}

impl TryFrom<String> for SpecVersion {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for SpecVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl SpecVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Attach a pre-release label (the part after `-`).
    pub fn with_pre(mut self, pre: impl Into<String>) -> Self {
        self.pre = Some(pre.into());
        self
    }

    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl FromStr for SpecVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (core, pre) = match s.split_once('-') {
            Some((core, pre)) if !pre.is_empty() => (core, Some(pre.to_string())),
            Some(_) => return Err(format!("invalid version '{}', empty pre-release", s)),
            None => (s, None),
        };
        let parts: Vec<&str> = core.split('.').collect();
        if parts.len() != 3 {
            return Err(format!("invalid version '{}', expected 'X.Y.Z[-pre]'", s));
        }
        Ok(Self {
            major: parts[0].parse().map_err(|_| "invalid major")?,
            minor: parts[1].parse().map_err(|_| "invalid minor")?,
            patch: parts[2].parse().map_err(|_| "invalid patch")?,
            pre,
        })
    }
}
