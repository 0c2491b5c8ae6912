/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - node: the tree node type, its kind tags and payloads
pub mod node;

#[cfg(test)]
mod tests;
