pub mod canonicalizing;
pub mod command_line;
pub mod extracting;
pub mod formatting;
pub mod indexing;
pub mod parsing;
pub mod reconstructing;
pub mod syntax_tree;
pub mod translating;
