mod demo_plan_tests;
mod signature_cmd_tests;
