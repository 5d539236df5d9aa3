mod builtin_validator_tests;
mod validator_chain_tests;
