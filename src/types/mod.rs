mod identifier;

pub use identifier::Identifier;
