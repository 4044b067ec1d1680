//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation, the default for generated Java.
    pub const JAVA: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

impl std::str::FromStr for Indent {
    type Err = String;

    /// Parse `tab` or a space count such as `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("tab") {
            return Ok(Self::Tab);
        }
        match s.parse::<u8>() {
            Ok(width @ (2 | 4 | 8)) => Ok(Self::Spaces(width)),
            _ => Err(format!("invalid indent '{}', expected 'tab', 2, 4 or 8", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_default_is_tab() {
        assert_eq!(Indent::default(), Indent::Tab);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("tab".parse::<Indent>().unwrap(), Indent::Tab);
        assert_eq!("4".parse::<Indent>().unwrap(), Indent::Spaces(4));
        assert!("3".parse::<Indent>().is_err());
        assert!("wide".parse::<Indent>().is_err());
    }
}
