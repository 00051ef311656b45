mod bind_tests;
