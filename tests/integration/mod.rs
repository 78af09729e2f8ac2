mod common;
mod instance_group_tests;
