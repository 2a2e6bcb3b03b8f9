pub mod kind;

pub use bool_error::Error;
