pub mod assembler;

pub use assembler::ContentAssembler;
