mod introspection_query_tests;
