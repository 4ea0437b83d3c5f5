use {
    crate::extracting::{Relations, Tuple},
    indexmap::IndexMap,
    std::fmt::{self, Display, Formatter},
    thiserror::Error,
};

/// The label rendered for an argument position of an atom without a `vars` tuple
pub const PLACEHOLDER: &str = "_";

/// The fields of a relational formula export
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    Vars,
    Relation,
    BoundVar,
    Body,
    Child,
    Left,
    Right,
    Root,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Vars => "vars",
            Field::Relation => "relation",
            Field::BoundVar => "bound_var",
            Field::Body => "body",
            Field::Child => "child",
            Field::Left => "left",
            Field::Right => "right",
            Field::Root => "root",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum IndexingError {
    #[error(
        "a tuple of field `{field}` has {found} atoms instead of {expected}: {tuple:?}"
    )]
    Arity {
        field: Field,
        expected: usize,
        found: usize,
        tuple: Vec<String>,
    },
    #[error(
        "atom `{label}` has a variable at position `{index}` but only positions 0 and 1 exist"
    )]
    Position { label: String, index: String },
}

/// Lookup structures over the fields of an export, keyed by the label of the source node
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RelationalIndex {
    pub relation: IndexMap<String, String>,
    pub vars: IndexMap<String, [String; 2]>,
    pub bound_var: IndexMap<String, String>,
    pub body: IndexMap<String, String>,
    pub child: IndexMap<String, String>,
    pub left: IndexMap<String, String>,
    pub right: IndexMap<String, String>,
    pub root: Option<String>,
}

fn destructure<const N: usize>(field: Field, tuple: &Tuple) -> Result<[&str; N], IndexingError> {
    let labels: Vec<&str> = tuple.iter().map(String::as_str).collect();
    labels.try_into().map_err(|_| IndexingError::Arity {
        field,
        expected: N,
        found: tuple.len(),
        tuple: tuple.0.clone(),
    })
}

fn index_pairs(
    relations: &Relations,
    field: Field,
) -> Result<IndexMap<String, String>, IndexingError> {
    let mut map = IndexMap::new();
    for tuple in relations.tuples(field.label()) {
        let [source, target] = destructure(field, tuple)?;
        if let Some(previous) = map.insert(source.to_string(), target.to_string()) {
            log::warn!(
                "`{source}` has more than one `{field}` tuple, `{previous}` is replaced by `{target}`"
            );
        }
    }
    Ok(map)
}

fn index_vars(relations: &Relations) -> Result<IndexMap<String, [String; 2]>, IndexingError> {
    let mut map: IndexMap<String, [String; 2]> = IndexMap::new();
    for tuple in relations.tuples(Field::Vars.label()) {
        let [atom, index, variable] = destructure(Field::Vars, tuple)?;

        let position = match index.parse::<usize>() {
            Ok(position @ (0 | 1)) => position,
            _ => {
                return Err(IndexingError::Position {
                    label: atom.to_string(),
                    index: index.to_string(),
                })
            }
        };

        let slots = map
            .entry(atom.to_string())
            .or_insert_with(|| [PLACEHOLDER.to_string(), PLACEHOLDER.to_string()]);
        if slots[position] != PLACEHOLDER {
            log::warn!(
                "`{atom}` has more than one variable at position {position}, `{}` is replaced by `{variable}`",
                slots[position]
            );
        }
        slots[position] = variable.to_string();
    }
    Ok(map)
}

impl RelationalIndex {
    pub fn build(relations: &Relations) -> Result<Self, IndexingError> {
        let root = match relations.tuples(Field::Root.label()) {
            [] => None,
            [first, rest @ ..] => {
                if !rest.is_empty() {
                    log::warn!(
                        "found {} `root` tuples, only the first one is used",
                        rest.len() + 1
                    );
                }
                let [_, root] = destructure(Field::Root, first)?;
                Some(root.to_string())
            }
        };

        let index = RelationalIndex {
            relation: index_pairs(relations, Field::Relation)?,
            vars: index_vars(relations)?,
            bound_var: index_pairs(relations, Field::BoundVar)?,
            body: index_pairs(relations, Field::Body)?,
            child: index_pairs(relations, Field::Child)?,
            left: index_pairs(relations, Field::Left)?,
            right: index_pairs(relations, Field::Right)?,
            root,
        };

        log::debug!(
            "indexed {} atoms, {} quantifiers, {} negations and {} connectives",
            index.relation.len(),
            index.bound_var.len(),
            index.child.len(),
            index.left.len()
        );

        Ok(index)
    }
}
