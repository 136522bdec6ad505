//! Integration test modules.

mod publish_pipeline_test;
