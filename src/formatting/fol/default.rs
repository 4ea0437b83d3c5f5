use {
    crate::syntax_tree::fol::{
        Atom, BinaryConnective, Formula, Quantification, Quantifier, Term, UnaryConnective,
        Variable,
    },
    std::fmt::{self, Display, Formatter},
};

pub struct Format<'a, N>(pub &'a N);

impl Display for Format<'_, Variable> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 .0)
    }
}

impl Display for Format<'_, Term> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Term::Variable(v) => Format(v).fmt(f),
            Term::Placeholder => write!(f, "_"),
        }
    }
}

impl Display for Format<'_, Atom> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let relation = &self.0.relation;
        let [lhs, rhs] = &self.0.terms;
        write!(f, "{relation}({}, {})", Format(lhs), Format(rhs))
    }
}

impl Display for Format<'_, UnaryConnective> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            UnaryConnective::Negation => write!(f, "¬"),
        }
    }
}

impl Display for Format<'_, BinaryConnective> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            BinaryConnective::Implication => write!(f, "→"),
            BinaryConnective::Conjunction => write!(f, "∧"),
            BinaryConnective::Disjunction => write!(f, "∨"),
        }
    }
}

impl Display for Format<'_, Quantifier> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Quantifier::Forall => write!(f, "∀"),
            Quantifier::Exists => write!(f, "∃"),
        }
    }
}

impl Display for Format<'_, Quantification> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let quantifier = Format(&self.0.quantifier);
        let variable = Format(&self.0.variable);
        write!(f, "{quantifier}{variable}")
    }
}

// Every compound formula is fully parenthesized, no precedence is taken into account.
impl Display for Format<'_, Formula> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Formula::AtomicFormula(a) => Format(a).fmt(f),
            Formula::UnaryFormula {
                connective,
                formula,
            } => {
                let connective = Format(connective);
                let formula = Format(&**formula);
                write!(f, "{connective}({formula})")
            }
            Formula::BinaryFormula {
                connective,
                lhs,
                rhs,
            } => {
                let connective = Format(connective);
                let lhs = Format(&**lhs);
                let rhs = Format(&**rhs);
                write!(f, "({lhs} {connective} {rhs})")
            }
            Formula::QuantifiedFormula {
                quantification,
                formula,
            } => {
                let quantification = Format(quantification);
                let formula = Format(&**formula);
                write!(f, "{quantification}.({formula})")
            }
            Formula::Leaf(label) => write!(f, "{label}"),
        }
    }
}
