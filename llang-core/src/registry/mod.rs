//! Token registry
//!
//! Holds the three token families loaded from the token document and turns
//! each definition into an alternation pattern for the lexer. Built once
//! before any lexing and never mutated afterwards, so one registry can be
//! shared read-only by any number of sessions.

pub mod error;

pub use error::ConfigError;

use llang_config::{Family, Section, TokenConfig, PART_EXTENSION};
use std::collections::BTreeMap;
use tracing::debug;

use crate::targets;

/// Key of the print keyword in the `tokens` family
pub const PRINT: &str = "print";
/// Key of the positioned print keyword in the `tokens` family
pub const PRINT_POSITION: &str = "print_position";
/// Key of the assignment keyword in the `tokens` family
pub const ASSIGNMENT: &str = "assignment";
/// Key of the identifier parts in the `variables` family
pub const IDS: &str = "ids";

/// Pattern that never matches, used for definitions without parts
const NEVER: &str = r"[^\s\S]";

/// Append the part extension unless it is already there
pub fn normalize_part(part: &str) -> String {
    if part.ends_with(PART_EXTENSION) {
        part.to_string()
    } else {
        format!("{part}{PART_EXTENSION}")
    }
}

/// A symbolic name and the part identifiers that denote it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDefinition {
    name: String,
    parts: Vec<String>,
}

impl TokenDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parts: Vec::new(),
        }
    }

    /// Add one part identifier, normalized to `<part>.dat`
    pub fn append(&mut self, part: impl ToString) {
        let part = normalize_part(&part.to_string());
        if !self.parts.contains(&part) {
            self.parts.push(part);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Part identifiers in declaration order
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn contains(&self, part: &str) -> bool {
        self.parts.iter().any(|p| p == part)
    }

    /// `(a\.dat|b\.dat)`, parts escaped and kept in declaration order
    pub fn pattern(&self) -> String {
        if self.parts.is_empty() {
            return format!("({NEVER})");
        }
        let alternatives: Vec<String> = self.parts.iter().map(|p| regex::escape(p)).collect();
        format!("({})", alternatives.join("|"))
    }

    /// Canonical marker a literal part is rewritten to.
    ///
    /// `digit_7` becomes the bare numeral `7`, any other name `n` becomes `'n'`.
    pub fn marker(&self) -> String {
        match self.name.split('_').nth(1) {
            Some(suffix) => suffix.to_string(),
            None => format!("'{}'", self.name),
        }
    }
}

/// The literal, variable and keyword token families
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    literals: BTreeMap<String, TokenDefinition>,
    variables: BTreeMap<String, TokenDefinition>,
    tokens: BTreeMap<String, TokenDefinition>,
}

impl TokenRegistry {
    /// Parse a JSON token document
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: TokenConfig = serde_json::from_str(text)?;
        Self::from_config(&config)
    }

    /// Build the registry, failing on a missing family or required key
    pub fn from_config(config: &TokenConfig) -> Result<Self, ConfigError> {
        let mut registry = TokenRegistry::default();

        for family in Family::ALL {
            let section = config
                .section(family)
                .ok_or(ConfigError::MissingSection(family))?;
            let definitions = load_section(section);
            debug!(
                target: targets::REGISTRY,
                family = family.key(),
                count = definitions.len(),
                "tokens added"
            );
            *registry.family_mut(family) = definitions;
        }

        for name in [PRINT, PRINT_POSITION, ASSIGNMENT] {
            registry.require(Family::Tokens, name)?;
        }
        registry.require(Family::Variables, IDS)?;

        Ok(registry)
    }

    fn require(&self, family: Family, name: &str) -> Result<(), ConfigError> {
        match self.definition(family, name) {
            None => Err(ConfigError::missing_key(family, name)),
            Some(definition) if definition.parts().is_empty() => {
                Err(ConfigError::EmptyDefinition {
                    family,
                    name: name.to_string(),
                })
            }
            Some(_) => Ok(()),
        }
    }

    pub fn family(&self, family: Family) -> &BTreeMap<String, TokenDefinition> {
        match family {
            Family::Literals => &self.literals,
            Family::Variables => &self.variables,
            Family::Tokens => &self.tokens,
        }
    }

    fn family_mut(&mut self, family: Family) -> &mut BTreeMap<String, TokenDefinition> {
        match family {
            Family::Literals => &mut self.literals,
            Family::Variables => &mut self.variables,
            Family::Tokens => &mut self.tokens,
        }
    }

    pub fn definition(&self, family: Family, name: &str) -> Option<&TokenDefinition> {
        self.family(family).get(name)
    }

    /// Literal definitions, sorted by symbolic name
    pub fn literals(&self) -> impl Iterator<Item = &TokenDefinition> {
        self.literals.values()
    }

    /// Alternation pattern of one definition
    pub fn pattern_for(&self, family: Family, name: &str) -> Result<String, ConfigError> {
        self.definition(family, name)
            .map(TokenDefinition::pattern)
            .ok_or_else(|| ConfigError::missing_key(family, name))
    }
}

fn load_section(section: &Section) -> BTreeMap<String, TokenDefinition> {
    let mut definitions = BTreeMap::new();
    match section {
        Section::Names(names) => {
            for name in names {
                let mut definition = TokenDefinition::new(name.to_string());
                definition.append(name);
                definitions.insert(name.to_string(), definition);
            }
        }
        Section::Entries(entries) => {
            for (name, entry) in entries {
                let mut definition = TokenDefinition::new(name.clone());
                for part in entry.parts() {
                    definition.append(part);
                }
                definitions.insert(name.clone(), definition);
            }
        }
    }
    definitions
}
