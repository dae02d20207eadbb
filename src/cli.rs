pub mod cli_catalogue;
pub mod cli_main;
pub mod cli_problems;
pub mod cli_settings;
pub mod cli_tables;
