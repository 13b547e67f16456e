//! Main module for sfc-extract library functionality

pub mod extract;
pub mod lexer;
pub mod node;
pub mod pad;
pub mod select;
pub mod tree;
