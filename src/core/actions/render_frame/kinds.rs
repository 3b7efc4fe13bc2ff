use std::str::FromStr;

use crate::core::errors::ParseKindError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotStyleKinds {
    Scatter,
    Bar,
    Stem,
}

impl PlotStyleKinds {
    pub const ALL: &'static [Self] = &[Self::Scatter, Self::Bar, Self::Stem];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Scatter => "Scatter",
            Self::Bar => "Bar",
            Self::Stem => "Stem",
        }
    }
}

impl Default for PlotStyleKinds {
    fn default() -> Self {
        Self::Scatter
    }
}

impl std::fmt::Display for PlotStyleKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for PlotStyleKinds {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError {
                kind: "plot style",
                value: s.to_owned(),
                expected: Self::ALL.iter().map(|k| k.display_name()).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(PlotStyleKinds::ALL.first(), Some(&PlotStyleKinds::default()));
    }

    #[test]
    fn from_str_accepts_any_case() {
        assert_eq!("stem".parse(), Ok(PlotStyleKinds::Stem));
        assert_eq!("BAR".parse(), Ok(PlotStyleKinds::Bar));
    }

    #[test]
    fn from_str_rejects_unknown_style() {
        let err = "pie".parse::<PlotStyleKinds>().unwrap_err();

        assert_eq!(err.kind, "plot style");
        assert_eq!(err.expected, vec!["Scatter", "Bar", "Stem"]);
    }
}
