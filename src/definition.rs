//! Function definitions in the `f(a, b, c) = ... | ...` notation
//!
//! A definition names a function, declares its variables in row-index order,
//! and gives its minterms and, after an optional `|`, its don't-cares. Each
//! part is either an explicit list of row indices or an expression over the
//! declared variables:
//!
//! ```text
//! f(a, b, c, d) = [4, 5, 6, 7, 8, 9, 11] | [2, 3, 12, 15]
//! g(a, b) = a xor b
//! h(x, y, z) = x and not y | [7]
//! ```
//!
//! Variable names are folded to uppercase, like the expression parser does.

use crate::expression::{BoolExpr, EvaluationError, ParseBoolExprError};
use crate::qmc::{Minimizer, MinimizerConfig, MinimizerError};
use crate::truth_table;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Errors raised while reading a function definition
#[derive(Debug)]
pub enum DefinitionError {
    /// The line does not have the `name(vars) = minterms [| dont-cares]` shape
    Malformed {
        /// What is wrong with the line
        message: String,
    },
    /// A function or variable name is not a letter followed by letters or digits
    InvalidIdentifier {
        /// The rejected name
        identifier: String,
    },
    /// A variable is declared twice
    DuplicateVariable {
        /// The repeated name, uppercased
        name: Arc<str>,
    },
    /// An entry of an index list is not a non-negative integer
    InvalidIndex {
        /// The rejected entry
        text: String,
    },
    /// An expression uses variables missing from the declaration
    UndeclaredVariables {
        /// The missing names, sorted
        names: Vec<Arc<str>>,
    },
    /// An expression part failed to parse
    Expression(ParseBoolExprError),
    /// An expression part could not be expanded into rows
    Evaluation(EvaluationError),
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::Malformed { message } => {
                write!(f, "Malformed function definition: {}", message)
            }
            DefinitionError::InvalidIdentifier { identifier } => write!(
                f,
                "Invalid name '{}': names start with a letter followed by letters or digits",
                identifier
            ),
            DefinitionError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' is declared more than once", name)
            }
            DefinitionError::InvalidIndex { text } => {
                write!(f, "Invalid row index '{}'", text)
            }
            DefinitionError::UndeclaredVariables { names } => {
                let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
                write!(
                    f,
                    "Expression uses undeclared variables: {}",
                    names.join(", ")
                )
            }
            DefinitionError::Expression(e) => write!(f, "{}", e),
            DefinitionError::Evaluation(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefinitionError::Expression(e) => Some(e),
            DefinitionError::Evaluation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseBoolExprError> for DefinitionError {
    fn from(err: ParseBoolExprError) -> Self {
        DefinitionError::Expression(err)
    }
}

impl From<EvaluationError> for DefinitionError {
    fn from(err: EvaluationError) -> Self {
        DefinitionError::Evaluation(err)
    }
}

impl From<DefinitionError> for io::Error {
    fn from(err: DefinitionError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// A named Boolean function given by its minterms and don't-cares
///
/// # Examples
///
/// ```
/// use qmc_logic::FunctionDefinition;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let def = FunctionDefinition::parse("f(a, b) = [1, 2] | [3]")?;
/// assert_eq!(def.name(), "f");
/// assert_eq!(def.minterms().iter().copied().collect::<Vec<_>>(), vec![1, 2]);
///
/// let minimizer = def.minimizer()?;
/// assert_eq!(minimizer.minimal_forms_as_strings()?, vec!["B OR A"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    name: Arc<str>,
    variables: Vec<Arc<str>>,
    minterms: BTreeSet<usize>,
    dont_cares: BTreeSet<usize>,
}

impl FunctionDefinition {
    /// Parse one definition line
    ///
    /// Expression parts are expanded over the declared variables, so an
    /// expression may leave some of them out.
    pub fn parse(line: &str) -> Result<Self, DefinitionError> {
        let (header, body) = line
            .split_once('=')
            .filter(|(_, body)| !body.contains('='))
            .ok_or_else(|| DefinitionError::Malformed {
                message: "expected exactly one '='".to_string(),
            })?;
        let (header, body) = (header.trim(), body.trim());

        let (name, variables) = parse_header(header)?;

        let parts: Vec<&str> = body.split('|').map(str::trim).collect();
        if parts.len() > 2 {
            return Err(DefinitionError::Malformed {
                message: "expected at most one '|'".to_string(),
            });
        }
        let minterms = parse_rows(parts[0], &variables)?;
        let dont_cares = match parts.get(1) {
            Some(part) => parse_rows(part, &variables)?,
            None => BTreeSet::new(),
        };

        Ok(FunctionDefinition {
            name,
            variables,
            minterms,
            dont_cares,
        })
    }

    /// The function name, as written
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared variables, uppercased, in row-index order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// Rows where the function is true
    pub fn minterms(&self) -> &BTreeSet<usize> {
        &self.minterms
    }

    /// Rows where the function value does not matter
    pub fn dont_cares(&self) -> &BTreeSet<usize> {
        &self.dont_cares
    }

    /// Minimize the function with the default configuration
    pub fn minimizer(&self) -> Result<Minimizer, MinimizerError> {
        self.minimizer_with_config(&MinimizerConfig::default())
    }

    /// Minimize the function with an explicit configuration
    pub fn minimizer_with_config(&self, config: &MinimizerConfig) -> Result<Minimizer, MinimizerError> {
        Minimizer::with_config(&self.minterms, &self.dont_cares, &self.variables, config)
    }
}

impl FromStr for FunctionDefinition {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FunctionDefinition::parse(s)
    }
}

impl fmt::Display for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |rows: &BTreeSet<usize>| {
            rows.iter()
                .map(|r| r.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let variables: Vec<&str> = self.variables.iter().map(|v| v.as_ref()).collect();
        write!(
            f,
            "{}({}) = [{}]",
            self.name,
            variables.join(", "),
            join(&self.minterms)
        )?;
        if !self.dont_cares.is_empty() {
            write!(f, " | [{}]", join(&self.dont_cares))?;
        }
        Ok(())
    }
}

/// Read every non-blank line of `reader` as a definition
///
/// Each entry carries its 1-based line number. A malformed line yields an
/// error entry and reading continues; only I/O failures abort.
pub fn read_definitions<R: BufRead>(
    reader: R,
) -> io::Result<Vec<(usize, Result<FunctionDefinition, DefinitionError>)>> {
    let mut definitions = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        definitions.push((i + 1, FunctionDefinition::parse(&line)));
    }
    Ok(definitions)
}

/// Read definitions from a file, see [`read_definitions`]
pub fn read_definitions_file<P: AsRef<Path>>(
    path: P,
) -> io::Result<Vec<(usize, Result<FunctionDefinition, DefinitionError>)>> {
    let file = File::open(path)?;
    read_definitions(BufReader::new(file))
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Split `name(v1, v2, ...)` into the name and uppercased variables
fn parse_header(header: &str) -> Result<(Arc<str>, Vec<Arc<str>>), DefinitionError> {
    let malformed = || DefinitionError::Malformed {
        message: format!("expected 'name(variables)', found '{}'", header),
    };

    let open = header.find('(').ok_or_else(malformed)?;
    let inner = header[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
    if inner.contains(['(', ')']) {
        return Err(malformed());
    }

    let name = header[..open].trim();
    if !is_identifier(name) {
        return Err(DefinitionError::InvalidIdentifier {
            identifier: name.to_string(),
        });
    }

    let mut variables: Vec<Arc<str>> = Vec::new();
    for variable in inner.split(',').map(str::trim) {
        if !is_identifier(variable) {
            return Err(DefinitionError::InvalidIdentifier {
                identifier: variable.to_string(),
            });
        }
        let variable: Arc<str> = Arc::from(variable.to_uppercase());
        if variables.contains(&variable) {
            return Err(DefinitionError::DuplicateVariable { name: variable });
        }
        variables.push(variable);
    }

    Ok((Arc::from(name), variables))
}

/// Rows named by one side of a definition
fn parse_rows(part: &str, variables: &[Arc<str>]) -> Result<BTreeSet<usize>, DefinitionError> {
    if part.starts_with('[') {
        return parse_index_list(part);
    }

    let expr = BoolExpr::parse(part)?;
    let undeclared = truth_table::undeclared_variables(variables, &expr);
    if !undeclared.is_empty() {
        return Err(DefinitionError::UndeclaredVariables { names: undeclared });
    }
    Ok(truth_table::sum_of_minterms(variables, &expr)?)
}

/// Parse `[i, j, ...]`; `[]` is the empty set
fn parse_index_list(part: &str) -> Result<BTreeSet<usize>, DefinitionError> {
    let inner = part
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|inner| !inner.contains(['[', ']']))
        .ok_or_else(|| DefinitionError::Malformed {
            message: format!("index list '{}' must be enclosed in '[' and ']'", part),
        })?;

    if inner.trim().is_empty() {
        return Ok(BTreeSet::new());
    }
    inner
        .split(',')
        .map(str::trim)
        .map(|text| {
            text.parse::<usize>().map_err(|_| DefinitionError::InvalidIndex {
                text: text.to_string(),
            })
        })
        .collect()
}
