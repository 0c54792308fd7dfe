mod incomplete_tests;
mod missing_tests;
mod unclosed_tests;
mod unexpected_tests;
