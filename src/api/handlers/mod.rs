pub mod catch_all;
pub mod ping;
