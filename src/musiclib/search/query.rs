use crate::error::{MusicLibError, Result};

/// The album field a query searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Album,
    Artist,
    Song,
}

impl Field {
    /// Resolve a field selector. Selectors are matched exactly: `Album` is not `album`.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "album" => Some(Field::Album),
            "artist" => Some(Field::Artist),
            "song" => Some(Field::Song),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// No prefix: contributes to the base result set only.
    Plain,
    /// `+term`: every result must contain the term.
    Required,
    /// `-term`: subject to the exclusion pass.
    Excluded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Lowercased, modifier stripped.
    pub text: String,
    pub modifier: Modifier,
}

impl Term {
    pub fn parse(token: &str) -> Self {
        let (modifier, rest) = if let Some(rest) = token.strip_prefix('+') {
            (Modifier::Required, rest)
        } else if let Some(rest) = token.strip_prefix('-') {
            (Modifier::Excluded, rest)
        } else {
            (Modifier::Plain, token)
        };

        Self {
            text: rest.to_lowercase(),
            modifier,
        }
    }
}

/// A parsed search request: `<field> [[+|-]term ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// `None` when the selector is not a known field; such a query matches nothing.
    pub field: Option<Field>,
    pub selector: String,
    pub terms: Vec<Term>,
}

impl Query {
    /// Tokenize a raw query on whitespace. The first token selects the field and the
    /// rest become terms. Only a query with no tokens at all is rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut tokens = raw.split_whitespace();
        let selector = tokens.next().ok_or(MusicLibError::EmptyQuery)?;

        Ok(Self {
            field: Field::from_selector(selector),
            selector: selector.to_string(),
            terms: tokens.map(Term::parse).collect(),
        })
    }

    pub fn terms_with(&self, modifier: Modifier) -> Vec<&Term> {
        self.terms
            .iter()
            .filter(|t| t.modifier == modifier)
            .collect()
    }

    pub fn has_modifier(&self, modifier: Modifier) -> bool {
        self.terms.iter().any(|t| t.modifier == modifier)
    }
}
