use sample::Sample;

#[test]
fn test_can_call_main() {
    let s = Sample::new();
    assert_eq!(s, Sample::default(), "construction produced invalid reference");

    let result = s.run(["one", "two", "three"]);
    assert!(result.is_ok(), "entry point raised during invocation: {:?}", result);
}

#[test]
fn test_independent_instances() {
    let first = Sample::new();
    let second = Sample::new();

    assert!(first.run(["one"]).is_ok());
    assert!(second.run(Vec::<String>::new()).is_ok());
    assert_eq!(first, second);
}

#[test]
fn test_run_with_no_args() {
    let sample = Sample::new();
    assert!(sample.run(std::iter::empty::<&str>()).is_ok());
}

#[test]
fn test_run_with_many_args() {
    let sample = Sample::new();
    let args: Vec<String> = (0..10_000).map(|i| format!("arg-{}", i)).collect();
    assert!(sample.run(&args).is_ok());
}

#[test]
fn test_run_with_unusual_content() {
    let sample = Sample::new();
    let long = "x".repeat(1 << 16);
    assert!(sample
        .run(["", " ", "--flag", "ünïcödé", "tab\tand\nnewline", long.as_str()])
        .is_ok());
}

#[test]
fn test_run_with_logging_enabled() {
    sample::utils::logger::init_logger(true, sample::LogFormat::Json);
    assert!(Sample::new().run(["one", "two", "three"]).is_ok());
}
