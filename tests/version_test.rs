use json_bump::domain::prerelease;
use json_bump::{BumpError, IncrementTarget, Version};

const VALID: &[&str] = &[
    "0.0.4",
    "1.2.3",
    "10.20.30",
    "1.1.2-prerelease+meta",
    "1.1.2+meta",
    "1.1.2+meta-valid",
    "1.0.0-alpha",
    "1.0.0-beta",
    "1.0.0-alpha.beta",
    "1.0.0-alpha.beta.1",
    "1.0.0-alpha.1",
    "1.0.0-alpha0.valid",
    "1.0.0-alpha.0valid",
    "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
    "1.0.0-rc.1+build.1",
    "2.0.0-rc.1+build.123",
    "1.2.3-beta",
    "10.2.3-DEV-SNAPSHOT",
    "1.2.3-SNAPSHOT-123",
    "2.0.0+build.1848",
    "2.0.1-alpha.1227",
    "1.0.0-alpha+beta",
    "1.2.3----RC-SNAPSHOT.12.9.1--.12+788",
    "1.2.3----R-S.12.9.1--.12+meta",
    "1.0.0+0.build.1-rc.10000aaa-kk-0.1",
    "1.0.0-0A.is.legal",
];

const INVALID: &[&str] = &[
    "1",
    "1.2",
    "1.2.3-0123",
    "1.2.3-0123.0123",
    "1.1.2+.123",
    "+invalid",
    "-invalid",
    "-invalid+invalid",
    "alpha",
    "alpha.beta.1",
    "1.0.0-alpha_beta",
    "1.0.0-alpha..",
    "1.0.0-alpha..1",
    "01.1.1",
    "1.01.1",
    "1.1.01",
    "1.2.3.DEV",
    "1.2-SNAPSHOT",
    "1.2.31.2.3----RC-SNAPSHOT.12.09.1--..12+788",
    "+justmeta",
    "9.8.7+meta+meta",
    "9.8.7-whatever+meta+meta",
    "^1.2.3",
    "~1.2",
    "invalid.semver",
    "1.2.3-١a",
    "1.2.3-1١",
    "1.2.3-alpha.٣x",
    "1.٢.3",
    "1.2.3+build.٤",
];

#[test]
fn test_round_trip_identity() {
    for text in VALID {
        let parsed = Version::parse(text).unwrap_or_else(|e| panic!("{}: {}", text, e));
        assert_eq!(&parsed.to_string(), text);
    }
}

#[test]
fn test_rejects_invalid() {
    for text in INVALID {
        assert!(
            matches!(Version::parse(text), Err(BumpError::InvalidSemVer(_))),
            "'{}' should be rejected",
            text
        );
    }
}

#[test]
fn test_acceptance_matches_semver_crate() {
    for text in VALID.iter().chain(INVALID) {
        assert_eq!(
            Version::parse(text).is_ok(),
            semver::Version::parse(text).is_ok(),
            "acceptance differs for '{}'",
            text
        );
    }
}

#[test]
fn test_components_match_semver_crate() {
    for text in VALID {
        let ours = Version::parse(text).unwrap();
        let theirs = semver::Version::parse(text).unwrap();
        assert_eq!(ours.major, theirs.major);
        assert_eq!(ours.minor, theirs.minor);
        assert_eq!(ours.patch, theirs.patch);
        assert_eq!(ours.pre_release.as_deref().unwrap_or(""), theirs.pre.as_str());
        assert_eq!(ours.build_metadata.as_deref().unwrap_or(""), theirs.build.as_str());
    }
}

#[test]
fn test_pre_release_number_tracks_last_segment() {
    for text in VALID {
        let v = Version::parse(text).unwrap();
        let expected = v.pre_release.as_deref().and_then(prerelease::trailing_number);
        assert_eq!(v.pre_release_number, expected, "for '{}'", text);
    }
}

#[test]
fn test_bump_never_changes_input() {
    for text in VALID {
        let original = Version::parse(text).unwrap();
        let snapshot = original.clone();
        for target in [
            IncrementTarget::Major,
            IncrementTarget::Minor,
            IncrementTarget::Patch,
            IncrementTarget::BuildNumber,
            IncrementTarget::None,
        ] {
            for reset in [false, true] {
                let bumped = original.bump(target, reset);
                assert!(Version::parse(&bumped.to_string()).is_ok());
            }
        }
        assert_eq!(original, snapshot);
    }
}

#[test]
fn test_cascade() {
    let v = Version::new(1, 2, 3);
    assert_eq!(v.bump(IncrementTarget::Minor, false), Version::new(1, 3, 0));
    assert_eq!(v.bump(IncrementTarget::Major, false), Version::new(2, 0, 0));
}

#[test]
fn test_build_number_increment() {
    let v = Version {
        pre_release_number: Some(1),
        ..Version::new(0, 0, 0)
    };
    assert_eq!(v.bump(IncrementTarget::BuildNumber, false).pre_release_number, Some(2));
    assert_eq!(
        Version::new(0, 0, 0)
            .bump(IncrementTarget::BuildNumber, false)
            .pre_release_number,
        Some(0)
    );
}
