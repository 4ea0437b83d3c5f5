pub mod pest;
