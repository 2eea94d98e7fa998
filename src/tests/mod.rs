mod utils;

mod db_tests;
mod facts_tests;
mod properties;
