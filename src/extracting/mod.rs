use {
    crate::syntax_tree::xml::{Document, Element},
    derive_more::derive::{Deref, From, IntoIterator},
    indexmap::{IndexMap, IndexSet},
};

/// The label of the signature whose atoms are the nodes of an exported formula
pub const ATOM_SIGNATURE: &str = "this/Atom";

/// An ordered tuple of atom labels
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Deref, From, IntoIterator)]
pub struct Tuple(#[into_iterator(owned, ref)] pub Vec<String>);

impl From<Vec<&str>> for Tuple {
    fn from(labels: Vec<&str>) -> Self {
        Tuple(labels.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Tuple {
    fn from(labels: [&str; N]) -> Self {
        Tuple(labels.into_iter().map(String::from).collect())
    }
}

/// The tuples of every field of an instance, keyed by field label
#[derive(Clone, Debug, Default, Eq, PartialEq, Deref, From, IntoIterator)]
pub struct Relations(#[into_iterator(owned, ref)] pub IndexMap<String, Vec<Tuple>>);

impl Relations {
    pub fn tuples(&self, field: &str) -> &[Tuple] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn insert(&mut self, field: impl Into<String>, tuple: impl Into<Tuple>) {
        self.0.entry(field.into()).or_default().push(tuple.into())
    }
}

impl<F: Into<String>, T: Into<Tuple>> FromIterator<(F, T)> for Relations {
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        let mut relations = Relations::default();
        for (field, tuple) in iter {
            relations.insert(field, tuple);
        }
        relations
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Instance {
    pub atoms: IndexSet<String>,
    pub relations: Relations,
}

fn labels<'a>(element: &'a Element) -> impl Iterator<Item = String> + 'a {
    element
        .children_named("atom")
        .filter_map(|atom| atom.attribute("label"))
        .map(String::from)
}

impl From<&Document> for Instance {
    fn from(document: &Document) -> Self {
        let root = &document.root;

        let atoms = root
            .descendants_named("sig")
            .filter(|sig| sig.has_label(ATOM_SIGNATURE))
            .flat_map(labels)
            .collect();

        let mut relations = Relations::default();
        for field in root.descendants_named("field") {
            let Some(label) = field.attribute("label") else {
                log::warn!("skipping a field without a label");
                continue;
            };

            let tuples = field
                .children_named("tuple")
                .map(|tuple| Tuple(labels(tuple).collect()));
            relations
                .0
                .entry(label.to_string())
                .or_default()
                .extend(tuples);
        }

        Instance { atoms, relations }
    }
}
