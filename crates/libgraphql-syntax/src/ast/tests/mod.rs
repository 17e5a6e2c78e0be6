mod value_conversion_tests;
