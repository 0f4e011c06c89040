/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the statement/expression enums
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
///
/// Every node owns its children; `Display` renders the canonical,
/// fully parenthesized source form.
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
