mod closure_tests;
mod edge_tests;
