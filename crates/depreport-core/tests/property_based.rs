//! Property-based tests using proptest

use depreport_core::status::{resolve_description, resolve_state};
use depreport_core::{BuildStatus, DeploymentState, RepositorySlug, StatePreset};
use proptest::prelude::*;

// Owner/repo segments: anything without the `/` and `:` delimiters
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9_.@-]{1,40}")
        .expect("valid regex")
        .prop_filter("a bare .git suffix leaves no name", |s| s != ".git")
}

fn arb_host() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9-]{1,20}(\\.[a-z]{2,6}){0,2}").expect("valid regex")
}

fn arb_state() -> impl Strategy<Value = DeploymentState> {
    prop_oneof![
        Just(DeploymentState::Pending),
        Just(DeploymentState::Success),
        Just(DeploymentState::Error),
        Just(DeploymentState::Failure),
    ]
}

fn arb_preset() -> impl Strategy<Value = StatePreset> {
    prop_oneof![Just(StatePreset::Auto), arb_state().prop_map(StatePreset::Fixed)]
}

proptest! {
    #[test]
    fn test_https_form_roundtrip(host in arb_host(), owner in arb_segment(), repo in arb_segment()) {
        let url = format!("https://{}/{}/{}.git", host, owner, repo);
        let slug = RepositorySlug::parse(&url).unwrap();
        prop_assert_eq!(slug.owner, owner);
        prop_assert_eq!(slug.name, repo);
    }

    #[test]
    fn test_ssh_form_roundtrip(
        user in "[a-z][a-z0-9_-]{0,10}",
        host in arb_host(),
        owner in arb_segment(),
        repo in arb_segment(),
    ) {
        let url = format!("{}@{}:{}/{}.git", user, host, owner, repo);
        let slug = RepositorySlug::parse(&url).unwrap();
        prop_assert_eq!(slug.owner, owner);
        prop_assert_eq!(slug.name, repo);
    }

    #[test]
    fn test_parser_never_panics(input in ".{0,200}") {
        let _ = RepositorySlug::parse(&input);
    }

    #[test]
    fn test_single_segment_always_rejected(host in arb_host(), owner in arb_segment()) {
        let https = format!("https://{}/{}", host, owner);
        let ssh = format!("git@{}:{}", host, owner);
        prop_assert!(RepositorySlug::parse(&https).is_err());
        prop_assert!(RepositorySlug::parse(&ssh).is_err());
    }

    #[test]
    fn test_fixed_state_passthrough(state in arb_state(), signal in proptest::option::of("[0-9]{0,3}")) {
        let build = BuildStatus::new(signal.as_deref());
        prop_assert_eq!(resolve_state(StatePreset::Fixed(state), &build), state);
    }

    #[test]
    fn test_auto_is_success_only_for_zero(signal in proptest::option::of(".{0,4}")) {
        let build = BuildStatus::new(signal.as_deref());
        let expected = if signal.as_deref() == Some("0") {
            DeploymentState::Success
        } else {
            DeploymentState::Failure
        };
        prop_assert_eq!(resolve_state(StatePreset::Auto, &build), expected);
    }

    #[test]
    fn test_non_empty_description_wins(
        description in ".{1,80}",
        preset in arb_preset(),
        signal in proptest::option::of("[01]"),
    ) {
        let build = BuildStatus::new(signal.as_deref());
        prop_assert_eq!(resolve_description(&description, preset, &build), description);
    }

    #[test]
    fn test_empty_description_is_title_of_state(preset in arb_preset(), signal in proptest::option::of("[01]")) {
        let build = BuildStatus::new(signal.as_deref());
        let description = resolve_description("", preset, &build);
        prop_assert_eq!(description.as_str(), resolve_state(preset, &build).title());
        prop_assert!(description.chars().next().unwrap().is_uppercase());
    }
}
