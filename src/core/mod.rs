pub mod cep;
pub mod db;
pub mod logging;
pub mod sqlx_utils;
#[cfg(test)]
pub mod test_utils;
