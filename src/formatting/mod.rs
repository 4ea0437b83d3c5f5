pub mod fol;
pub mod xml;
