pub mod cep;
pub mod common;
pub mod idoso;
pub mod status;
