use crate::{
    ast::{Command, Entry, Relation, Set},
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::{mapping_ops, relation_ops, set_ops},
        lexer::{Kind, classify},
        parser::core::parse_entry,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Maximum number of input lines the declaration table accepts.
pub const MAX_LINES: usize = 1000;

/// The closed catalogue of calculate operations.
///
/// Dispatch is keyed by this enum instead of cascading string comparisons:
/// each variant knows its name and arity, and the evaluator matches on it
/// exhaustively, so adding a variant without wiring it up fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `empty S` — `true` iff the set has no elements.
    Empty,
    /// `card S` — the number of elements in the set.
    Card,
    /// `complement S` — universe elements absent from the set.
    Complement,
    /// `union S S` — elements of either set, left operand first.
    Union,
    /// `intersect S S` — elements common to both sets, in left order.
    Intersect,
    /// `minus S S` — elements of the left set absent from the right.
    Minus,
    /// `subseteq S S` — inclusion of the left set in the right.
    Subseteq,
    /// `subset S S` — proper inclusion of the left set in the right.
    Subset,
    /// `equals S S` — order-independent set equality.
    Equals,
    /// `reflexive R` — every universe element relates to itself.
    Reflexive,
    /// `symmetric R` — every non-self pair has its mirror.
    Symmetric,
    /// `antisymmetric R` — no non-self pair has its mirror.
    Antisymmetric,
    /// `transitive R` — every two-step chain closes.
    Transitive,
    /// `function R` — no universe element maps to two targets.
    Function,
    /// `domain R` — universe elements used as first components.
    Domain,
    /// `codomain R` — universe elements used as second components.
    Codomain,
    /// `injective R S S` — injective mapping between the two sets.
    Injective,
    /// `surjective R S S` — function between the two sets (coverage of the
    /// second set is not verified; see `mapping_ops`).
    Surjective,
    /// `bijective R S S` — same rule as `injective`; see `mapping_ops`.
    Bijective,
}

impl Operation {
    /// Every operation in the catalogue, in output-table order.
    pub const ALL: [Self; 19] = [Self::Empty,
                                 Self::Card,
                                 Self::Complement,
                                 Self::Union,
                                 Self::Intersect,
                                 Self::Minus,
                                 Self::Subseteq,
                                 Self::Subset,
                                 Self::Equals,
                                 Self::Reflexive,
                                 Self::Symmetric,
                                 Self::Antisymmetric,
                                 Self::Transitive,
                                 Self::Function,
                                 Self::Domain,
                                 Self::Codomain,
                                 Self::Injective,
                                 Self::Surjective,
                                 Self::Bijective];

    /// The operation name as written on calculate lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Card => "card",
            Self::Complement => "complement",
            Self::Union => "union",
            Self::Intersect => "intersect",
            Self::Minus => "minus",
            Self::Subseteq => "subseteq",
            Self::Subset => "subset",
            Self::Equals => "equals",
            Self::Reflexive => "reflexive",
            Self::Symmetric => "symmetric",
            Self::Antisymmetric => "antisymmetric",
            Self::Transitive => "transitive",
            Self::Function => "function",
            Self::Domain => "domain",
            Self::Codomain => "codomain",
            Self::Injective => "injective",
            Self::Surjective => "surjective",
            Self::Bijective => "bijective",
        }
    }

    /// Looks an operation up by its written name.
    ///
    /// # Example
    /// ```
    /// use setcalc::interpreter::evaluator::core::Operation;
    ///
    /// assert_eq!(Operation::from_name("card"), Some(Operation::Card));
    /// assert_eq!(Operation::from_name("Card"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|operation| operation.name() == name)
    }

    /// The number of references the operation consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Empty
            | Self::Card
            | Self::Complement
            | Self::Reflexive
            | Self::Symmetric
            | Self::Antisymmetric
            | Self::Transitive
            | Self::Function
            | Self::Domain
            | Self::Codomain => 1,
            Self::Union
            | Self::Intersect
            | Self::Minus
            | Self::Subseteq
            | Self::Subset
            | Self::Equals => 2,
            Self::Injective | Self::Surjective | Self::Bijective => 3,
        }
    }
}

/// Stores the evaluation state: the declaration table.
///
/// The table is append-only and owns every declared entity for the whole
/// run. Each input line — the universe, derived sets, relations *and*
/// calculate lines — occupies the next 1-based position, so command
/// references address file lines directly.
///
/// ## Usage
///
/// `Context` is created once per input. Lines are fed to
/// [`process_line`](Self::process_line) in file order; each call returns the
/// output fragment for that line. [`finish`](Self::finish) runs the
/// end-of-input checks.
pub struct Context {
    /// The declaration table, in input order.
    entries:          Vec<Entry>,
    /// Whether a calculate line was seen; declarations are rejected from
    /// then on.
    commands_started: bool,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates an evaluation context with an empty declaration table.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries:          Vec::new(),
               commands_started: false, }
    }

    /// Processes one logical input line and returns its output fragment.
    ///
    /// Declarations are validated, appended to the table and echoed;
    /// calculate lines are parsed, evaluated against the table as it stood
    /// before the command's own position, appended, and rendered. The
    /// sequencing rules live here: the first line must declare the
    /// universe, the universe is unique, nothing may be declared after the
    /// first command, and the table capacity is bounded.
    ///
    /// # Parameters
    /// - `line`: The logical line, without its trailing newline.
    ///
    /// # Returns
    /// The fragment to emit for this line.
    ///
    /// # Errors
    /// Returns the first `ParseError` or `EvalError` the line triggers.
    /// After an error the whole run is expected to stop; fragments already
    /// returned for earlier lines stand.
    ///
    /// # Example
    /// ```
    /// use setcalc::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    ///
    /// assert_eq!(context.process_line("U a b").unwrap(), "U a b");
    /// assert_eq!(context.process_line("S a").unwrap(), "S a");
    /// assert_eq!(context.process_line("C complement 2").unwrap(), "S b");
    /// ```
    pub fn process_line(&mut self, line: &str) -> Result<String, Box<dyn std::error::Error>> {
        let position = self.entries.len() + 1;

        if position > MAX_LINES {
            return Err(Box::new(ParseError::TooManyLines { line: position }));
        }

        let (kind, rest) = classify(line, position)?;

        if self.entries.is_empty() && kind != Kind::Universe {
            return Err(Box::new(ParseError::UniverseNotFirst { line: position }));
        }
        if !self.entries.is_empty() && kind == Kind::Universe {
            return Err(Box::new(ParseError::SecondUniverse { line: position }));
        }
        if self.commands_started && kind != Kind::Command {
            return Err(Box::new(ParseError::DeclarationAfterCommand { line: position }));
        }

        let entry = parse_entry(kind, rest, self.declared_universe(), position)?;

        let fragment = match &entry {
            Entry::Universe(universe) => universe.render('U'),
            Entry::Set(set) => set.to_string(),
            Entry::Relation(relation) => relation.to_string(),
            Entry::Command(command) => {
                self.commands_started = true;
                self.eval_command(command, position)?.to_string()
            },
        };

        self.entries.push(entry);
        Ok(fragment)
    }

    /// Runs the end-of-input checks.
    ///
    /// # Errors
    /// Returns `ParseError::MissingCommand` when the input held no
    /// calculate line at all.
    pub fn finish(&self) -> Result<(), ParseError> {
        if self.commands_started {
            Ok(())
        } else {
            Err(ParseError::MissingCommand { line: self.entries.len() + 1 })
        }
    }

    /// Evaluates one parsed command against the current table.
    ///
    /// Dispatch resolves the operation name, checks the argument count,
    /// resolves every reference and checks its entry kind, then runs the
    /// operation. Any failure along the way rejects the command.
    fn eval_command(&self, command: &Command, line: usize) -> EvalResult<Value> {
        let operation = Operation::from_name(&command.operation).ok_or_else(|| {
                            EvalError::UnknownOperation { name: command.operation.clone(),
                                                          line }
                        })?;

        if command.arguments.len() != operation.arity() {
            return Err(EvalError::ArgumentCountMismatch { line });
        }

        let args = command.arguments.as_slice();

        match operation {
            Operation::Empty => Ok(set_ops::empty(self.set_operand(args[0], line)?)),
            Operation::Card => Ok(set_ops::card(self.set_operand(args[0], line)?)),
            Operation::Complement => {
                Ok(set_ops::complement(self.set_operand(args[0], line)?, self.universe()))
            },
            Operation::Union => Ok(set_ops::union(self.set_operand(args[0], line)?,
                                                  self.set_operand(args[1], line)?)),
            Operation::Intersect => Ok(set_ops::intersect(self.set_operand(args[0], line)?,
                                                          self.set_operand(args[1], line)?)),
            Operation::Minus => Ok(set_ops::minus(self.set_operand(args[0], line)?,
                                                  self.set_operand(args[1], line)?)),
            Operation::Subseteq => Ok(set_ops::subseteq(self.set_operand(args[0], line)?,
                                                        self.set_operand(args[1], line)?)),
            Operation::Subset => Ok(set_ops::subset(self.set_operand(args[0], line)?,
                                                    self.set_operand(args[1], line)?)),
            Operation::Equals => Ok(set_ops::equals(self.set_operand(args[0], line)?,
                                                    self.set_operand(args[1], line)?)),
            Operation::Reflexive => {
                Ok(relation_ops::reflexive(self.relation_operand(args[0], line)?, self.universe()))
            },
            Operation::Symmetric => {
                Ok(relation_ops::symmetric(self.relation_operand(args[0], line)?))
            },
            Operation::Antisymmetric => {
                Ok(relation_ops::antisymmetric(self.relation_operand(args[0], line)?))
            },
            Operation::Transitive => {
                Ok(relation_ops::transitive(self.relation_operand(args[0], line)?))
            },
            Operation::Function => {
                Ok(relation_ops::function(self.relation_operand(args[0], line)?, self.universe()))
            },
            Operation::Domain => {
                Ok(relation_ops::domain(self.relation_operand(args[0], line)?, self.universe()))
            },
            Operation::Codomain => {
                Ok(relation_ops::codomain(self.relation_operand(args[0], line)?, self.universe()))
            },
            Operation::Injective => Ok(mapping_ops::injective(self.relation_operand(args[0], line)?,
                                                              self.set_operand(args[1], line)?,
                                                              self.set_operand(args[2], line)?)),
            Operation::Surjective => {
                Ok(mapping_ops::surjective(self.relation_operand(args[0], line)?,
                                           self.set_operand(args[1], line)?,
                                           self.set_operand(args[2], line)?))
            },
            Operation::Bijective => Ok(mapping_ops::bijective(self.relation_operand(args[0], line)?,
                                                              self.set_operand(args[1], line)?,
                                                              self.set_operand(args[2], line)?)),
        }
    }

    /// Resolves a reference to a table entry, range-checked.
    ///
    /// References are taken as written on the command line, so zero and
    /// negative values fail here rather than being trusted as indices.
    fn entry(&self, reference: i64, line: usize) -> EvalResult<&Entry> {
        usize::try_from(reference)
            .ok()
            .filter(|position| (1..=self.entries.len()).contains(position))
            .map(|position| &self.entries[position - 1])
            .ok_or(EvalError::ReferenceOutOfRange { reference, line })
    }

    /// Resolves a reference to a set operand.
    ///
    /// The universe counts as a set wherever a set operand is expected.
    fn set_operand(&self, reference: i64, line: usize) -> EvalResult<&Set> {
        match self.entry(reference, line)? {
            Entry::Universe(set) | Entry::Set(set) => Ok(set),
            _ => Err(EvalError::ExpectedSet { reference, line }),
        }
    }

    /// Resolves a reference to a relation operand.
    fn relation_operand(&self, reference: i64, line: usize) -> EvalResult<&Relation> {
        match self.entry(reference, line)? {
            Entry::Relation(relation) => Ok(relation),
            _ => Err(EvalError::ExpectedRelation { reference, line }),
        }
    }

    /// The universe, present from position 1 onward.
    fn declared_universe(&self) -> Option<&Set> {
        match self.entries.first() {
            Some(Entry::Universe(universe)) => Some(universe),
            _ => None,
        }
    }

    /// The universe, for operations that consume it implicitly.
    ///
    /// # Panics
    /// Panics if no universe is declared. Commands are rejected before the
    /// universe line is processed, so evaluation can rely on it.
    fn universe(&self) -> &Set {
        match self.entries.first() {
            Some(Entry::Universe(universe)) => universe,
            _ => unreachable!("commands are rejected until the universe is declared"),
        }
    }
}
