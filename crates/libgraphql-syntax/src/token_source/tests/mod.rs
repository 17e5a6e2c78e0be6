mod str_graphql_token_source_property_tests;
