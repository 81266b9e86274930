mod auth_tests;
mod dashboard_tests;
