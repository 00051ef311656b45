mod arguments_tests;
