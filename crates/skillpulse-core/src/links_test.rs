use super::*;

fn parse(yaml: &str) -> ProfilesFile {
    serde_yaml::from_str(yaml).expect("valid profiles yaml")
}

#[test]
fn configured_skips_blank_links() {
    let file = parse(
        r"
profiles:
  github: https://github.com/octocat
  leetcode: '   '
  gfg: ''
",
    );
    let configured: Vec<_> = file.profiles.configured().collect();
    assert_eq!(configured, vec![(Platform::Github, "https://github.com/octocat")]);
}

#[test]
fn missing_profiles_key_yields_empty_links() {
    let file = parse("{}");
    assert_eq!(file.profiles.configured().count(), 0);
}

#[test]
fn unknown_platform_key_fails_to_parse() {
    let result = serde_yaml::from_str::<ProfilesFile>("profiles:\n  topcoder: someone\n");
    assert!(result.is_err());
}

#[test]
fn validate_rejects_link_with_inner_whitespace() {
    let file = parse("profiles:\n  codeforces: 'tou rist'\n");
    let err = validate_profiles(&file).unwrap_err();
    assert!(
        matches!(err, ConfigError::Validation(ref msg) if msg.contains("codeforces")),
        "expected Validation error, got: {err:?}"
    );
}

#[test]
fn validate_accepts_surrounding_whitespace() {
    let file = parse("profiles:\n  codeforces: '  tourist  '\n");
    assert!(validate_profiles(&file).is_ok());
}

#[test]
fn merge_overrides_only_non_empty_links() {
    let mut base: ProfileLinks = [
        (Platform::Github, "octocat".to_string()),
        (Platform::Leetcode, "alice".to_string()),
    ]
    .into_iter()
    .collect();
    let overrides: ProfileLinks = [
        (Platform::Github, "hubot".to_string()),
        (Platform::Leetcode, String::new()),
    ]
    .into_iter()
    .collect();

    base.merge(&overrides);

    assert_eq!(base.get(Platform::Github), Some("hubot"));
    assert_eq!(base.get(Platform::Leetcode), Some("alice"));
}

#[test]
fn load_profile_links_reports_missing_file() {
    let err = load_profile_links(Path::new("/definitely/not/here/profiles.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::ProfilesFileIo { .. }));
}

#[test]
fn load_profile_links_from_example_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("profiles.example.yaml");
    assert!(
        path.exists(),
        "profiles.example.yaml missing at {path:?} — required for this test"
    );
    let file = load_profile_links(&path).expect("failed to load profiles.example.yaml");
    assert!(
        file.profiles.configured().count() > 0,
        "example file should configure at least one platform"
    );
}
