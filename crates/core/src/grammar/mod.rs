/// JSON output for parse results.
pub mod dump;
/// Emitter — rebuilds command-line text from an argument vector.
pub mod emit;
/// Lexer — tokenizes a raw command line into positioned, typed tokens.
pub mod lexer;
/// Parameter model produced by the assembler.
pub mod params;
/// Assembler — turns tokens into parameters and the parse result.
pub mod parser;
