use std::fmt;

/// An ordered collection of distinct element names.
///
/// `Set` models both the universe and every derived set. Elements keep the
/// order of their first appearance in the declaration line, and the
/// validators guarantee that no name occurs twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set {
    /// Element names in declaration order.
    pub elements: Vec<String>,
}

impl Set {
    /// Creates a set from already-validated element names.
    #[must_use]
    pub const fn new(elements: Vec<String>) -> Self {
        Self { elements }
    }

    /// Tests whether the set contains the given element name.
    ///
    /// Comparison is case-sensitive, matching the declaration rules.
    ///
    /// # Example
    /// ```
    /// use setcalc::ast::Set;
    ///
    /// let set = Set::new(vec!["a".to_string(), "b".to_string()]);
    ///
    /// assert!(set.contains("a"));
    /// assert!(!set.contains("A"));
    /// ```
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.elements.iter().any(|element| element == name)
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` if the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Renders the set as an output fragment with the given kind marker.
    ///
    /// The marker is `U` when echoing the universe declaration and `S`
    /// everywhere else, including derived sets produced by commands.
    ///
    /// # Example
    /// ```
    /// use setcalc::ast::Set;
    ///
    /// let set = Set::new(vec!["a".to_string(), "b".to_string()]);
    ///
    /// assert_eq!(set.render('U'), "U a b");
    /// assert_eq!(Set::new(Vec::new()).render('S'), "S");
    /// ```
    #[must_use]
    pub fn render(&self, marker: char) -> String {
        let mut out = String::from(marker);
        for element in &self.elements {
            out.push(' ');
            out.push_str(element);
        }
        out
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render('S'))
    }
}

/// An ordered pair of element names inside a relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The first component of the pair.
    pub from: String,
    /// The second component of the pair.
    pub to:   String,
}

impl Pair {
    /// `true` when both components are the same element.
    ///
    /// Self-pairs are treated specially by the reflexivity, symmetry and
    /// transitivity checks.
    #[must_use]
    pub fn is_self_pair(&self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.from, self.to)
    }
}

/// An ordered sequence of distinct pairs over the universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Pairs in declaration order.
    pub pairs: Vec<Pair>,
}

impl Relation {
    /// Creates a relation from already-validated pairs.
    #[must_use]
    pub const fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// Tests whether the relation contains the exact pair `(from, to)`.
    ///
    /// # Example
    /// ```
    /// use setcalc::ast::{Pair, Relation};
    ///
    /// let relation = Relation::new(vec![Pair { from: "a".to_string(),
    ///                                          to:   "b".to_string(), }]);
    ///
    /// assert!(relation.contains_pair("a", "b"));
    /// assert!(!relation.contains_pair("b", "a"));
    /// ```
    #[must_use]
    pub fn contains_pair(&self, from: &str, to: &str) -> bool {
        self.pairs.iter().any(|pair| pair.from == from && pair.to == to)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R")?;
        for pair in &self.pairs {
            write!(f, " {pair}")?;
        }
        Ok(())
    }
}

/// A parsed calculate line.
///
/// The operation name is kept exactly as written: resolution against the
/// operation catalogue happens at evaluation time, so an unknown name is not
/// a parse failure. The argument list holds only the operand tokens that
/// parsed as non-zero integers; every other token is dropped by the command
/// parser without being reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The operation name as it appeared on the line.
    pub operation: String,
    /// Retained 1-based table references, in order, duplicates allowed.
    pub arguments: Vec<i64>,
}

/// One entry of the declaration table.
///
/// Every input line occupies the next 1-based position, commands included,
/// so command arguments resolve against file-line numbers. Entries are
/// created once, never mutated, and owned by the table for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// The distinguished universe set, always at position 1.
    Universe(Set),
    /// A derived set whose elements were checked against the universe.
    Set(Set),
    /// A binary relation whose pair components were checked against the
    /// universe.
    Relation(Relation),
    /// A calculate line.
    Command(Command),
}
