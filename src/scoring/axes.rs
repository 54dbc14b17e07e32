use std::fmt;

/// The five bipolar axes a quiz measures.
///
/// `ALL` fixes the order axes appear in results and archetype codes.
/// Axis names on question records are strings; `Axis::resolve` maps them
/// (through the alias table) onto these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Equity,
    Libertarian,
    Progressive,
    Secular,
    Globalism,
}

/// Deprecated axis names still found on older question records, mapped to
/// their canonical replacement. Every axis name lookup passes through this
/// table first.
pub const AXIS_ALIASES: &[(&str, &str)] = &[("Equality vs. Markets", "Equity vs. Free Market")];

impl Axis {
    /// Fixed axis order for `axis_results` and archetype code positions.
    pub const ALL: [Axis; 5] = [
        Axis::Equity,
        Axis::Libertarian,
        Axis::Progressive,
        Axis::Secular,
        Axis::Globalism,
    ];

    /// Canonical axis name as it appears on question records and in output maps.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Equity => "Equity vs. Free Market",
            Axis::Libertarian => "Libertarian vs. Authoritarian",
            Axis::Progressive => "Progressive vs. Conservative",
            Axis::Secular => "Secular vs. Religious",
            Axis::Globalism => "Globalism vs. Nationalism",
        }
    }

    /// Symmetric normalization bound for the 0-100 display scale.
    ///
    /// Empirically tuned per axis; must not be recomputed from question data.
    pub fn max_score(self) -> f64 {
        match self {
            Axis::Equity => 61.0,
            Axis::Libertarian => 101.0,
            Axis::Progressive => 103.0,
            Axis::Secular => 72.0,
            Axis::Globalism => 86.0,
        }
    }

    pub fn left_label(self) -> &'static str {
        match self {
            Axis::Equity => "Equity",
            Axis::Libertarian => "Libertarian",
            Axis::Progressive => "Progressive",
            Axis::Secular => "Secular",
            Axis::Globalism => "Globalism",
        }
    }

    pub fn right_label(self) -> &'static str {
        match self {
            Axis::Equity => "Free Market",
            Axis::Libertarian => "Authoritarian",
            Axis::Progressive => "Conservative",
            Axis::Secular => "Religious",
            Axis::Globalism => "Nationalism",
        }
    }

    /// Letter pair for archetype codes: (first pole, second pole).
    pub fn letters(self) -> (char, char) {
        match self {
            Axis::Equity => ('E', 'F'),
            Axis::Libertarian => ('L', 'A'),
            Axis::Progressive => ('P', 'C'),
            Axis::Secular => ('S', 'R'),
            Axis::Globalism => ('G', 'N'),
        }
    }

    /// Resolve an axis name string (canonical or alias) to its axis.
    ///
    /// Returns None for names outside the configured set; callers skip those
    /// questions rather than failing the whole computation.
    pub fn resolve(name: &str) -> Option<Axis> {
        let canonical = canonical_axis_name(name);
        Axis::ALL.into_iter().find(|axis| axis.name() == canonical)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Map an axis name through the alias table. Unknown names pass through
/// unchanged (resolution decides whether they are usable).
pub fn canonical_axis_name(name: &str) -> &str {
    AXIS_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_canonical_names() {
        for axis in Axis::ALL {
            assert_eq!(Axis::resolve(axis.name()), Some(axis));
        }
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(Axis::resolve("Equality vs. Markets"), Some(Axis::Equity));
    }

    #[test]
    fn test_resolve_unknown_name() {
        assert_eq!(Axis::resolve("Order vs. Chaos"), None);
        assert_eq!(Axis::resolve(""), None);
    }

    #[test]
    fn test_canonical_axis_name_passthrough() {
        assert_eq!(
            canonical_axis_name("Libertarian vs. Authoritarian"),
            "Libertarian vs. Authoritarian"
        );
        assert_eq!(canonical_axis_name("Order vs. Chaos"), "Order vs. Chaos");
    }

    #[test]
    fn test_canonical_axis_name_alias() {
        assert_eq!(
            canonical_axis_name("Equality vs. Markets"),
            "Equity vs. Free Market"
        );
    }

    #[test]
    fn test_max_scores_match_configuration() {
        assert_eq!(Axis::Equity.max_score(), 61.0);
        assert_eq!(Axis::Libertarian.max_score(), 101.0);
        assert_eq!(Axis::Progressive.max_score(), 103.0);
        assert_eq!(Axis::Secular.max_score(), 72.0);
        assert_eq!(Axis::Globalism.max_score(), 86.0);
    }

    #[test]
    fn test_letter_pairs() {
        assert_eq!(Axis::Equity.letters(), ('E', 'F'));
        assert_eq!(Axis::Libertarian.letters(), ('L', 'A'));
        assert_eq!(Axis::Progressive.letters(), ('P', 'C'));
        assert_eq!(Axis::Secular.letters(), ('S', 'R'));
        assert_eq!(Axis::Globalism.letters(), ('G', 'N'));
    }

    #[test]
    fn test_labels_match_letter_initials() {
        for axis in Axis::ALL {
            let (first, second) = axis.letters();
            assert!(axis.left_label().starts_with(first));
            assert!(axis.right_label().starts_with(second));
        }
    }
}
