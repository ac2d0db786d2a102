pub static TEST_USER_AGENT: &str = "evespy-tests/0.1 (contact@example.com)";
