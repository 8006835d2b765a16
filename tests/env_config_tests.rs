use hereya_s3_bucket_stack::{ConfigSource, EnvConfigSource};

// Only test in this binary that touches the process environment
#[test]
fn env_source_reads_stack_flags() {
    std::env::set_var("namePrefix", "from-env");
    std::env::set_var("autoDeleteObjects", "true");

    let config = EnvConfigSource::new().load_stack_config();
    assert_eq!(config.effective_prefix(), "from-env");
    assert!(config.auto_delete_objects);

    std::env::remove_var("namePrefix");
    std::env::remove_var("autoDeleteObjects");

    let config = EnvConfigSource::new().load_stack_config();
    assert_eq!(config.effective_prefix(), "hereya");
    assert!(!config.auto_delete_objects);
}
