use {
    crate::{
        canonicalizing::canonicalize,
        extracting::Relations,
        indexing::{IndexingError, RelationalIndex},
        reconstructing::{reconstruct, ReconstructionError},
    },
    thiserror::Error,
};

#[derive(Error, Debug, Eq, PartialEq)]
pub enum TranslationError {
    #[error("the relations could not be indexed")]
    Indexing(#[from] IndexingError),
    #[error("the formula could not be reconstructed")]
    Reconstruction(#[from] ReconstructionError),
}

/// Render the formula described by `relations` without canonicalizing it
pub fn render(relations: &Relations) -> Result<String, TranslationError> {
    let index = RelationalIndex::build(relations)?;
    let formula = reconstruct(&index)?;
    log::debug!("reconstructed a formula of depth {}", formula.depth());
    Ok(formula.to_string())
}

/// Render the formula described by `relations` in canonical form
pub fn translate(relations: &Relations) -> Result<String, TranslationError> {
    render(relations).map(|formula| canonicalize(&formula))
}
