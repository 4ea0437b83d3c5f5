use {
    indexmap::IndexMap,
    lazy_static::lazy_static,
    regex::{Captures, Regex},
};

lazy_static! {
    static ref VARIABLE: Regex = Regex::new(r"V\d+\$\d+").unwrap();
    static ref RELATION_ID: Regex = Regex::new(r"E\$\d+").unwrap();
    static ref QUANTIFIER: Regex =
        Regex::new(r"\((?<quantifier>[∀∃])(?<variable>[a-z])\.\(").unwrap();
}

/// Letters handed out to exported variable identifiers, in order of first occurrence
#[derive(Debug)]
pub struct VariableNames {
    assigned: IndexMap<String, char>,
    cursor: u32,
}

impl Default for VariableNames {
    fn default() -> Self {
        VariableNames {
            assigned: IndexMap::new(),
            cursor: 'x' as u32,
        }
    }
}

impl VariableNames {
    /// The letter of `identifier`, or `None` if every character has been handed out already
    pub fn name(&mut self, identifier: &str) -> Option<char> {
        if let Some(name) = self.assigned.get(identifier) {
            return Some(*name);
        }

        // Skip surrogates, which are no valid characters
        while self.cursor <= char::MAX as u32 {
            let candidate = char::from_u32(self.cursor);
            self.cursor += 1;
            if let Some(name) = candidate {
                log::trace!("renaming `{identifier}` to `{name}`");
                self.assigned.insert(identifier.to_string(), name);
                return Some(name);
            }
        }

        log::warn!("ran out of characters, `{identifier}` keeps its name");
        None
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Replace exported variable identifiers like `V0$1` by single letters starting at `x`
pub fn rename_variables(formula: &str) -> String {
    let mut names = VariableNames::default();
    let renamed = VARIABLE
        .replace_all(formula, |captures: &Captures| {
            let identifier = &captures[0];
            names
                .name(identifier)
                .map_or_else(|| identifier.to_string(), String::from)
        })
        .into_owned();
    log::debug!("renamed {} variables", names.len());
    renamed
}

/// Drop the identifier suffix of relations like `E$3`
pub fn simplify_relations(formula: &str) -> String {
    RELATION_ID.replace_all(formula, "E").into_owned()
}

/// Drop the opening parenthesis in front of quantifications like `(∀x.(`
///
/// The rewrite is repeated until nothing matches anymore. A single pass can leave a match behind,
/// e.g. `((∀x.(` becomes `(∀x.(`, and then canonicalizing its own output would change it again.
pub fn collapse_quantifiers(formula: &str) -> String {
    let mut result = formula.to_string();
    while QUANTIFIER.is_match(&result) {
        result = QUANTIFIER
            .replace_all(&result, "$quantifier$variable.(")
            .into_owned();
    }
    result
}

pub fn canonicalize(formula: &str) -> String {
    let formula = rename_variables(formula);
    let formula = simplify_relations(&formula);
    collapse_quantifiers(&formula)
}
