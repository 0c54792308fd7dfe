mod caveats_tests;
mod definitions_tests;
mod expressions_tests;
mod relations_tests;
mod trivia_tests;
