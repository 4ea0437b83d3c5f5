use {
    crate::formatting::fol::default::Format,
    std::fmt::{self, Display, Formatter},
};

/// The kind of a node in a relational formula export, as encoded by the prefix of its label
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Kind {
    Atom,
    Not,
    Forall,
    Exists,
    Implies,
    And,
    Or,
    Leaf,
}

impl Kind {
    const PREFIXES: [(&'static str, Kind); 7] = [
        ("Atom", Kind::Atom),
        ("Not", Kind::Not),
        ("Forall", Kind::Forall),
        ("Exists", Kind::Exists),
        ("Implies", Kind::Implies),
        ("And", Kind::And),
        ("Or", Kind::Or),
    ];

    pub fn of(label: &str) -> Self {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| label.starts_with(prefix))
            .map_or(Kind::Leaf, |(_, kind)| *kind)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Variable(pub String);

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Term {
    Variable(Variable),
    /// An argument position the export left unfilled
    Placeholder,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Atom {
    pub relation: String,
    pub terms: [Term; 2],
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryConnective {
    Negation,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryConnective {
    Implication,
    Conjunction,
    Disjunction,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Quantifier {
    Forall,
    Exists,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Quantification {
    pub quantifier: Quantifier,
    pub variable: Variable,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Formula {
    AtomicFormula(Atom),
    UnaryFormula {
        connective: UnaryConnective,
        formula: Box<Formula>,
    },
    BinaryFormula {
        connective: BinaryConnective,
        lhs: Box<Formula>,
        rhs: Box<Formula>,
    },
    QuantifiedFormula {
        quantification: Quantification,
        formula: Box<Formula>,
    },
    /// A label of unknown kind, kept verbatim
    Leaf(String),
}

impl Formula {
    pub fn depth(&self) -> usize {
        match self {
            Formula::AtomicFormula(_) | Formula::Leaf(_) => 1,
            Formula::UnaryFormula { formula, .. } | Formula::QuantifiedFormula { formula, .. } => {
                1 + formula.depth()
            }
            Formula::BinaryFormula { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Format(self).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{Atom, Formula, Kind, Term, Variable};

    #[test]
    fn resolve_kind() {
        for (label, kind) in [
            ("Atom$0", Kind::Atom),
            ("Not$3", Kind::Not),
            ("Forall$1", Kind::Forall),
            ("Exists$0", Kind::Exists),
            ("Implies$2", Kind::Implies),
            ("And$0", Kind::And),
            ("Or$0", Kind::Or),
            ("V0$0", Kind::Leaf),
            ("atom", Kind::Leaf),
            ("", Kind::Leaf),
        ] {
            assert_eq!(Kind::of(label), kind, "label `{label}`")
        }
    }

    #[test]
    fn formula_depth() {
        let atom = Formula::AtomicFormula(Atom {
            relation: "R".into(),
            terms: [Term::Variable(Variable("a".into())), Term::Placeholder],
        });
        assert_eq!(atom.depth(), 1);

        let formula = Formula::BinaryFormula {
            connective: super::BinaryConnective::Conjunction,
            lhs: atom.clone().into(),
            rhs: Formula::UnaryFormula {
                connective: super::UnaryConnective::Negation,
                formula: atom.into(),
            }
            .into(),
        };
        assert_eq!(formula.depth(), 3);
    }
}
