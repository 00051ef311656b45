mod host_type_tests;
