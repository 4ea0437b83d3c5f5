use {
    crate::{
        indexing::{Field, RelationalIndex, PLACEHOLDER},
        syntax_tree::fol::{
            Atom, BinaryConnective, Formula, Kind, Quantification, Quantifier, Term,
            UnaryConnective, Variable,
        },
    },
    indexmap::IndexMap,
    thiserror::Error,
};

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ReconstructionError {
    #[error("the export has no `root` tuple")]
    MissingRoot,
    #[error("node `{label}` has no `{field}` tuple")]
    MissingEntry { field: Field, label: String },
}

fn lookup<'a, V>(
    map: &'a IndexMap<String, V>,
    field: Field,
    label: &str,
) -> Result<&'a V, ReconstructionError> {
    map.get(label)
        .ok_or_else(|| ReconstructionError::MissingEntry {
            field,
            label: label.to_string(),
        })
}

fn term(atom: &str, slot: &str) -> Term {
    if slot == PLACEHOLDER {
        log::warn!("atom `{atom}` has an unfilled argument position");
        Term::Placeholder
    } else {
        Term::Variable(Variable(slot.to_string()))
    }
}

/// Build the formula tree below the node labelled `label`
///
/// The tree reachable from `label` has to be finite, cycles are not detected.
pub fn reconstruct_from(
    index: &RelationalIndex,
    label: &str,
) -> Result<Formula, ReconstructionError> {
    let formula = match Kind::of(label) {
        Kind::Atom => {
            let relation = lookup(&index.relation, Field::Relation, label)?;
            let terms = match index.vars.get(label) {
                Some([lhs, rhs]) => [term(label, lhs), term(label, rhs)],
                None => {
                    log::warn!("atom `{label}` has no `vars` tuple");
                    [Term::Placeholder, Term::Placeholder]
                }
            };
            Formula::AtomicFormula(Atom {
                relation: relation.clone(),
                terms,
            })
        }

        Kind::Not => {
            let child = lookup(&index.child, Field::Child, label)?;
            Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula: reconstruct_from(index, child)?.into(),
            }
        }

        kind @ (Kind::Forall | Kind::Exists) => {
            let quantifier = match kind {
                Kind::Forall => Quantifier::Forall,
                _ => Quantifier::Exists,
            };
            let variable = lookup(&index.bound_var, Field::BoundVar, label)?;
            let body = lookup(&index.body, Field::Body, label)?;
            Formula::QuantifiedFormula {
                quantification: Quantification {
                    quantifier,
                    variable: Variable(variable.clone()),
                },
                formula: reconstruct_from(index, body)?.into(),
            }
        }

        kind @ (Kind::Implies | Kind::And | Kind::Or) => {
            let connective = match kind {
                Kind::Implies => BinaryConnective::Implication,
                Kind::And => BinaryConnective::Conjunction,
                _ => BinaryConnective::Disjunction,
            };
            let lhs = lookup(&index.left, Field::Left, label)?;
            let rhs = lookup(&index.right, Field::Right, label)?;
            Formula::BinaryFormula {
                connective,
                lhs: reconstruct_from(index, lhs)?.into(),
                rhs: reconstruct_from(index, rhs)?.into(),
            }
        }

        Kind::Leaf => Formula::Leaf(label.to_string()),
    };

    Ok(formula)
}

/// Build the formula tree of an export, starting at its root
pub fn reconstruct(index: &RelationalIndex) -> Result<Formula, ReconstructionError> {
    let root = index
        .root
        .as_deref()
        .ok_or(ReconstructionError::MissingRoot)?;
    log::debug!("reconstructing the formula rooted at `{root}`");
    reconstruct_from(index, root)
}

#[cfg(test)]
mod tests {
    use {
        super::{reconstruct, reconstruct_from, ReconstructionError},
        crate::{
            extracting::Relations,
            indexing::{Field, RelationalIndex},
            syntax_tree::fol::{
                Atom, BinaryConnective, Formula, Quantification, Quantifier, Term, UnaryConnective,
                Variable,
            },
        },
    };

    fn index(tuples: Vec<(&str, Vec<&str>)>) -> RelationalIndex {
        let relations: Relations = tuples.into_iter().collect();
        RelationalIndex::build(&relations).unwrap()
    }

    fn variable(name: &str) -> Term {
        Term::Variable(Variable(name.into()))
    }

    #[test]
    fn reconstruct_quantified_atom() {
        let index = index(vec![
            ("root", vec!["Separator$0", "Forall$0"]),
            ("bound_var", vec!["Forall$0", "V0$0"]),
            ("body", vec!["Forall$0", "Atom$0"]),
            ("relation", vec!["Atom$0", "E$3"]),
            ("vars", vec!["Atom$0", "0", "V0$0"]),
            ("vars", vec!["Atom$0", "1", "V0$0"]),
        ]);

        assert_eq!(
            reconstruct(&index),
            Ok(Formula::QuantifiedFormula {
                quantification: Quantification {
                    quantifier: Quantifier::Forall,
                    variable: Variable("V0$0".into()),
                },
                formula: Formula::AtomicFormula(Atom {
                    relation: "E$3".into(),
                    terms: [variable("V0$0"), variable("V0$0")],
                })
                .into(),
            })
        );
    }

    #[test]
    fn reconstruct_connectives() {
        let index = index(vec![
            ("root", vec!["Separator$0", "Implies$0"]),
            ("left", vec!["Implies$0", "Exists$0"]),
            ("right", vec!["Implies$0", "Not$0"]),
            ("bound_var", vec!["Exists$0", "V1$0"]),
            ("body", vec!["Exists$0", "V1$0"]),
            ("child", vec!["Not$0", "Or$0"]),
            ("left", vec!["Or$0", "And$0"]),
            ("right", vec!["Or$0", "V2$0"]),
            ("left", vec!["And$0", "V3$0"]),
            ("right", vec!["And$0", "V4$0"]),
        ]);

        let leaf = |label: &str| Box::new(Formula::Leaf(label.into()));

        assert_eq!(
            reconstruct(&index),
            Ok(Formula::BinaryFormula {
                connective: BinaryConnective::Implication,
                lhs: Formula::QuantifiedFormula {
                    quantification: Quantification {
                        quantifier: Quantifier::Exists,
                        variable: Variable("V1$0".into()),
                    },
                    formula: leaf("V1$0"),
                }
                .into(),
                rhs: Formula::UnaryFormula {
                    connective: UnaryConnective::Negation,
                    formula: Formula::BinaryFormula {
                        connective: BinaryConnective::Disjunction,
                        lhs: Formula::BinaryFormula {
                            connective: BinaryConnective::Conjunction,
                            lhs: leaf("V3$0"),
                            rhs: leaf("V4$0"),
                        }
                        .into(),
                        rhs: leaf("V2$0"),
                    }
                    .into(),
                }
                .into(),
            })
        );
    }

    #[test]
    fn reconstruct_placeholder() {
        let index = index(vec![
            ("relation", vec!["Atom$0", "R"]),
            ("vars", vec!["Atom$0", "1", "V0$0"]),
        ]);

        assert_eq!(
            reconstruct_from(&index, "Atom$0"),
            Ok(Formula::AtomicFormula(Atom {
                relation: "R".into(),
                terms: [Term::Placeholder, variable("V0$0")],
            }))
        );
    }

    #[test]
    fn reconstruct_atom_without_vars() {
        let index = index(vec![
            ("root", vec!["Separator$0", "Not$0"]),
            ("child", vec!["Not$0", "Atom$0"]),
            ("relation", vec!["Atom$0", "R"]),
        ]);

        assert_eq!(
            reconstruct(&index),
            Ok(Formula::UnaryFormula {
                connective: UnaryConnective::Negation,
                formula: Formula::AtomicFormula(Atom {
                    relation: "R".into(),
                    terms: [Term::Placeholder, Term::Placeholder],
                })
                .into(),
            })
        );
    }

    #[test]
    fn reject_missing_entries() {
        assert_eq!(
            reconstruct(&RelationalIndex::default()),
            Err(ReconstructionError::MissingRoot)
        );

        for (tuples, field, label) in [
            (
                vec![("vars", vec!["Atom$0", "0", "a"])],
                Field::Relation,
                "Atom$0",
            ),
            (vec![], Field::Child, "Not$0"),
            (
                vec![("body", vec!["Forall$0", "a"])],
                Field::BoundVar,
                "Forall$0",
            ),
            (
                vec![("bound_var", vec!["Exists$0", "a"])],
                Field::Body,
                "Exists$0",
            ),
            (vec![("right", vec!["And$0", "a"])], Field::Left, "And$0"),
            (vec![("left", vec!["Or$0", "a"])], Field::Right, "Or$0"),
        ] {
            let mut tuples = tuples;
            tuples.push(("root", vec!["Separator$0", label]));
            assert_eq!(
                reconstruct(&index(tuples)),
                Err(ReconstructionError::MissingEntry {
                    field,
                    label: label.into(),
                })
            );
        }
    }

    #[test]
    fn reject_missing_entries_below_root() {
        let index = index(vec![
            ("root", vec!["Separator$0", "Not$0"]),
            ("child", vec!["Not$0", "Implies$0"]),
            ("left", vec!["Implies$0", "a"]),
        ]);

        assert_eq!(
            reconstruct(&index),
            Err(ReconstructionError::MissingEntry {
                field: Field::Right,
                label: "Implies$0".into(),
            })
        );
    }
}
