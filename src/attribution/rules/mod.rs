mod builtin;

pub use builtin::{builtin_rules, BuiltinRule};
