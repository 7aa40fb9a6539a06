pub mod idoso;
