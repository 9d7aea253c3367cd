mod fields_will_merge_validator_tests;
