pub mod ast;
pub mod run;
pub mod tokens;
