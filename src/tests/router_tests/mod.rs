mod login_tests;
