mod naming_tests;
mod config_tests;
mod validation_tests;
