mod aggregator_tests;
