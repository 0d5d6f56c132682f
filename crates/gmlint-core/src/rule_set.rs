use std::fmt;
use std::str::FromStr;

/// Category of a linting rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Correctness: code that is outright wrong or useless
    Corr,
    /// Style: spacing, layout and naming consistency
    Style,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Corr => "CORR",
            Self::Style => "STYLE",
        }
    }

    pub const ALL: &'static [Category] = &[Category::Corr, Category::Style];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CORR" => Ok(Self::Corr),
            "STYLE" => Ok(Self::Style),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixStatus {
    #[default]
    None,
    Safe,
}

macro_rules! declare_rules {
    (
        $(
            $variant:ident => {
                name: $name:literal,
                categories: [$($category:ident),+ $(,)?],
                fix: $fix:ident,
            }
        ),* $(,)?
    ) => {
        /// Enum representing all available linting rules.
        ///
        /// The declaration order is the order rules run in on each line, and
        /// the order fixes apply in for the rules that have one.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Rule {
            $($variant),*
        }

        impl Rule {
            /// Get the rule's string name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }

            /// Get the rule's categories
            pub const fn categories(self) -> &'static [Category] {
                match self {
                    $(Self::$variant => &[$(Category::$category),+]),*
                }
            }

            /// Get the rule's fix status
            pub const fn fix_status(self) -> FixStatus {
                match self {
                    $(Self::$variant => FixStatus::$fix),*
                }
            }

            /// Check if the rule has a fix
            pub const fn has_fix(self) -> bool {
                matches!(self.fix_status(), FixStatus::Safe)
            }

            /// Check if the rule has no fix
            pub const fn has_no_fix(self) -> bool {
                matches!(self.fix_status(), FixStatus::None)
            }

            /// Check if the rule belongs to a specific category
            pub fn has_category(self, category: Category) -> bool {
                self.categories().contains(&category)
            }

            /// Parse a rule from its string name
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Get all rules as a slice
            pub const fn all() -> &'static [Rule] {
                ALL_RULES
            }
        }

        impl fmt::Display for Rule {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        /// Static array containing all rules
        pub const ALL_RULES: &[Rule] = &[
            $(Rule::$variant),*
        ];
    };
}

// Declare all rules with their metadata
declare_rules! {
    CommaSpacing => {
        name: "comma_spacing",
        categories: [Style],
        fix: Safe,
    },
    BracketSpacing => {
        name: "bracket_spacing",
        categories: [Style],
        fix: Safe,
    },
    LineLength => {
        name: "line_length",
        categories: [Style],
        fix: None,
    },
    Indentation => {
        name: "indentation",
        categories: [Style],
        fix: None,
    },
    TrailingWhitespace => {
        name: "trailing_whitespace",
        categories: [Style],
        fix: None,
    },
    UninitializedVariable => {
        name: "uninitialized_variable",
        categories: [Corr],
        fix: None,
    },
    ControlStatement => {
        name: "control_statement",
        categories: [Corr],
        fix: None,
    },
    NamingConvention => {
        name: "naming_convention",
        categories: [Style],
        fix: None,
    },
    UnusedVariable => {
        name: "unused_variable",
        categories: [Corr],
        fix: None,
    },
}

/// A collection of rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a rule set from a vector of rules
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Create a rule set containing all rules
    pub fn all() -> Self {
        Self { rules: ALL_RULES.to_vec() }
    }

    /// Get an iterator over the rules
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Check if the rule set contains a specific rule
    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    /// Check if the rule set contains a rule by name
    pub fn contains_name(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name() == name)
    }

    /// Get the number of rules in the set
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule set is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Filter rules by a predicate
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnMut(&Rule) -> bool,
    {
        Self {
            rules: self.rules.into_iter().filter(predicate).collect(),
        }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self { rules: iter.into_iter().collect() }
    }
}

impl<'a> FromIterator<&'a Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = &'a Rule>>(iter: I) -> Self {
        Self { rules: iter.into_iter().copied().collect() }
    }
}

/// Helper functions for working with rules
impl Rule {
    /// Get all rules in a specific category
    pub fn by_category(category: Category) -> impl Iterator<Item = Rule> {
        ALL_RULES
            .iter()
            .copied()
            .filter(move |r| r.has_category(category))
    }

    /// Get all rules with a fix
    pub fn with_fix() -> impl Iterator<Item = Rule> {
        ALL_RULES.iter().copied().filter(|r| r.has_fix())
    }
}
