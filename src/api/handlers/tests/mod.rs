mod health_tests;
mod module_handler_tests;
