use std::rc::Rc;

use opt_schema_core::{
    ArgMode, OptSchema, SchemaError, SchemaErrorKind, SchemaFile, compile_schema,
};

// ---------------------------------------------------------------------------
// End-to-end compilation
// ---------------------------------------------------------------------------

#[test]
fn test_help_and_show_hidden_schema() {
    let map = compile_schema(&[
        OptSchema::new(Some("-h"), Some("--help")),
        OptSchema::long("--show-hidden").with_arg(ArgMode::Optional),
    ])
    .unwrap();

    assert_eq!(map.len(), 3);
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["-h", "--help", "--show-hidden"]);

    let help = map.get("-h").unwrap();
    assert!(Rc::ptr_eq(help, map.get("--help").unwrap()));
    assert!(!help.arg_accepted());
    assert!(!help.arg_required());

    let hidden = map.get("--show-hidden").unwrap();
    assert!(!Rc::ptr_eq(help, hidden));
    assert!(hidden.arg_accepted());
    assert!(!hidden.arg_required());
}

#[test]
fn test_optional_short_only_fails_before_registration() {
    let err = compile_schema(&[OptSchema::short("-x").with_arg(ArgMode::Optional)]).unwrap_err();
    assert_eq!(err, SchemaError::OptionalArgNeedsLongName("-x".to_string()));
}

#[test]
fn test_failure_later_in_list_returns_no_map() {
    let result = compile_schema(&[
        OptSchema::new(Some("-a"), Some("--all")),
        OptSchema::long("--bad--name"),
        OptSchema::short("-z"),
    ]);
    assert_eq!(result.unwrap_err().kind(), SchemaErrorKind::InvalidLongName);
}

// ---------------------------------------------------------------------------
// Shared descriptors
// ---------------------------------------------------------------------------

#[test]
fn test_parse_time_writes_are_visible_through_every_alias() {
    let map = compile_schema(&[OptSchema::new(Some("-v"), Some("--verbose"))]).unwrap();

    map.get("--verbose").unwrap().set_parsed_name("--verbose");
    map.get("-v").unwrap().record_duplicate("-v");

    let short = map.get("-v").unwrap();
    let long = map.get("--verbose").unwrap();
    assert_eq!(short.parsed_name().as_deref(), Some("--verbose"));
    assert_eq!(long.parsed_duplicates(), vec!["-v"]);
    assert_eq!(Rc::strong_count(short), 2);
}

#[test]
fn test_default_filter_is_identity() {
    let map = compile_schema(&[
        OptSchema::long("--name").with_arg(ArgMode::Required),
        OptSchema::new(Some("-c"), Some("--color")).with_arg(ArgMode::Optional),
    ])
    .unwrap();

    for token in ["--name", "-c", "--color"] {
        let opt = map.get(token).unwrap();
        assert!(!opt.has_custom_filter());
        assert_eq!(opt.apply_filter("Some Value "), "Some Value ");
    }
}

#[test]
fn test_custom_filter_is_resolved_once_and_shared() {
    let map = compile_schema(&[OptSchema::new(Some("-n"), Some("--count"))
        .with_arg(ArgMode::Required)
        .with_filter(|raw| raw.trim_start_matches('0').to_string())])
    .unwrap();

    let short = map.get("-n").unwrap().opt_arg_filter().clone();
    let long = map.get("--count").unwrap().opt_arg_filter().clone();
    assert!(opt_schema_core::OptArgFilter::ptr_eq(&short, &long));
    assert_eq!(long.apply("007"), "7");
}

// ---------------------------------------------------------------------------
// Unified key space
// ---------------------------------------------------------------------------

#[test]
fn test_first_registration_survives_duplicate() {
    let schemas = [
        OptSchema::new(Some("-q"), Some("--quiet")),
        OptSchema::short("-q").with_arg(ArgMode::Required),
    ];
    assert_eq!(
        compile_schema(&schemas).unwrap_err(),
        SchemaError::DuplicateShortName("-q".to_string())
    );

    let map = compile_schema(&schemas[..1]).unwrap();
    assert!(!map.get("-q").unwrap().arg_accepted());
}

// ---------------------------------------------------------------------------
// Declaration files
// ---------------------------------------------------------------------------

#[test]
fn test_load_yaml_and_json_files() {
    let dir = std::env::temp_dir().join(format!("opt_schema_integ_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let yaml = dir.join("options.yaml");
    std::fs::write(
        &yaml,
        "options:\n  - name: \"-h\"\n    longName: \"--help\"\n  - long_name: \"--level\"\n    arg: required\n",
    )
    .unwrap();
    let json = dir.join("options.json");
    std::fs::write(
        &json,
        r#"{"options": [{"name": "-h", "longName": "--help"}, {"long_name": "--level", "arg": "required"}]}"#,
    )
    .unwrap();

    for path in [&yaml, &json] {
        let map = SchemaFile::load(path).unwrap().compile().unwrap();
        assert_eq!(map.len(), 3);
        assert!(map.get("--level").unwrap().arg_required());
    }

    std::fs::remove_dir_all(&dir).ok();
}
