mod description_tests;
