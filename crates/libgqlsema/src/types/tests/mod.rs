mod definition_tests;
mod type_ref_tests;
