pub mod db;
pub mod idoso;
