mod layout_tests;
mod rules_tests;
mod selector_tests;
mod settings_tests;
