pub mod cep;
pub mod idoso;
pub mod status;
