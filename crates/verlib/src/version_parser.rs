//! Version and constraint parsing module

use std::num::ParseIntError;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::constraint::{Constraint, Constraints, Operator};
use crate::Version;

/// Grammar used for constraints and constraint sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    /// Tolerates prefixes, missing components and trailing data
    #[default]
    Lenient,
    /// Requires an optional operator followed by a Semantic Versioning 2.0.0 version
    Strict,
}

/// Error type for version and constraint parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("regex failed to match {grammar} \"{input}\"")]
    NoMatch { input: String, grammar: &'static str },
    #[error("failed to parse {component} version component \"{value}\": {source}")]
    InvalidNumber {
        component: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid operator \"{operator}\" in constraint \"{constraint}\"")]
    InvalidOperator { operator: String, constraint: String },
    #[error("failed to parse version in constraint \"{constraint}\": {source}")]
    InvalidConstraint {
        constraint: String,
        #[source]
        source: Box<VersionParserError>,
    },
    #[error("failed to parse {grammar} \"{element}\": {source}")]
    InvalidConstraintSetElement {
        element: String,
        grammar: &'static str,
        #[source]
        source: Box<VersionParserError>,
    },
}

const NUMERIC_IDENTIFIER: &str = r"0|[1-9][0-9]*";
const PRE_RELEASE_IDENTIFIER: &str = r"0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*";
const BUILD_IDENTIFIER: &str = r"[0-9a-zA-Z-]+";
const OPERATORS: &str = r"!=|=|>=|>|<=|<|~>";

lazy_static! {
    // Lenient version: optional non-digit prefix, required major, optional minor, patch,
    // pre-release and build metadata, anything after that is dropped
    static ref VERSION_RE: Regex = Regex::new(
        r"^[^0-9]*?(?P<major>[0-9]+)(?:\.(?P<minor>[0-9]+))?(?:\.(?P<patch>[0-9]+))?(?:-(?P<prerelease>[^+\n]*))?(?:\+(?P<buildmetadata>.*))?[^\n]*$"
    ).unwrap();

    // Semantic Versioning 2.0.0 without the named groups, shared by the strict grammars
    static ref SEMVER_PATTERN: String = format!(
        r"(?:{num})\.(?:{num})\.(?:{num})(?:-(?:{pre})(?:\.(?:{pre}))*)?(?:\+{build}(?:\.{build})*)?",
        num = NUMERIC_IDENTIFIER,
        pre = PRE_RELEASE_IDENTIFIER,
        build = BUILD_IDENTIFIER,
    );

    static ref SEMVER_RE: Regex = Regex::new(&format!(
        r"^(?P<major>{num})\.(?P<minor>{num})\.(?P<patch>{num})(?:-(?P<prerelease>(?:{pre})(?:\.(?:{pre}))*))?(?:\+(?P<buildmetadata>{build}(?:\.{build})*))?$",
        num = NUMERIC_IDENTIFIER,
        pre = PRE_RELEASE_IDENTIFIER,
        build = BUILD_IDENTIFIER,
    )).unwrap();

    // Lenient constraint: optional operator, filler up to the first digit, then the version
    static ref CONSTRAINT_RE: Regex = Regex::new(&format!(
        r"^(?P<operator>{})?[^0-9\n]*(?P<version>[0-9]+[^\t\n\f\r ]*)$",
        OPERATORS
    )).unwrap();

    static ref STRICT_CONSTRAINT_RE: Regex = Regex::new(&format!(
        r"^(?P<operator>{})?[\t\n\f\r ]*(?P<semver>{})?$",
        OPERATORS,
        *SEMVER_PATTERN
    )).unwrap();
}

/// Parser for versions, constraints and comma separated constraint sets.
///
/// Every entry point comes in a fallible form and a `must_` form which panics on invalid
/// input, for call sites where the input is known to be valid.
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Parse a version with the lenient grammar.
    ///
    /// Accepts a non-digit prefix (`v1.2.3`), missing minor or patch (`1`, `1.2`) and
    /// discards trailing data that is neither pre-release nor build metadata.
    pub fn parse_version(&self, version: &str) -> Result<Version, VersionParserError> {
        parse_with(&VERSION_RE, version, "version")
    }

    pub fn must_parse_version(&self, version: &str) -> Version {
        self.parse_version(version)
            .unwrap_or_else(|err| panic!("failed to parse version: {}", err))
    }

    /// Parse a Semantic Versioning 2.0.0 version; the whole input has to match
    pub fn parse_semver(&self, version: &str) -> Result<Version, VersionParserError> {
        parse_with(&SEMVER_RE, version, "semantic version")
    }

    pub fn must_parse_semver(&self, version: &str) -> Version {
        self.parse_semver(version)
            .unwrap_or_else(|err| panic!("failed to parse semantic version: {}", err))
    }

    /// Parse a constraint such as `>= 1.2`, `~>v1.2.3` or `1.0` (defaults to `=`)
    pub fn parse_constraint(&self, constraint: &str) -> Result<Constraint, VersionParserError> {
        let constraint = constraint.trim();
        let caps = CONSTRAINT_RE.captures(constraint).ok_or_else(|| {
            no_match(constraint, "version constraint")
        })?;

        let operator = parse_operator(&caps, constraint)?;
        let version = self.parse_version(&caps["version"]).map_err(|source| {
            VersionParserError::InvalidConstraint {
                constraint: constraint.to_string(),
                source: Box::new(source),
            }
        })?;

        log::trace!("Parsed constraint \"{}\" as {} {}", constraint, operator, version);
        Ok(Constraint::new(operator, version))
    }

    pub fn must_parse_constraint(&self, constraint: &str) -> Constraint {
        self.parse_constraint(constraint)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    /// Parse a constraint made of an optional operator, optional whitespace and a strict
    /// semantic version
    pub fn parse_strict_constraint(
        &self,
        constraint: &str,
    ) -> Result<Constraint, VersionParserError> {
        let constraint = constraint.trim();
        let caps = STRICT_CONSTRAINT_RE
            .captures(constraint)
            .ok_or_else(|| no_match(constraint, "strict version constraint"))?;

        let raw_version = match caps.name("semver") {
            Some(m) if !m.as_str().is_empty() => m.as_str(),
            _ => return Err(no_match(constraint, "strict version constraint")),
        };

        let operator = parse_operator(&caps, constraint)?;
        let version = self.parse_semver(raw_version).map_err(|source| {
            VersionParserError::InvalidConstraint {
                constraint: constraint.to_string(),
                source: Box::new(source),
            }
        })?;

        log::trace!("Parsed strict constraint \"{}\" as {} {}", constraint, operator, version);
        Ok(Constraint::new(operator, version))
    }

    pub fn must_parse_strict_constraint(&self, constraint: &str) -> Constraint {
        self.parse_strict_constraint(constraint)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    /// Parse a comma separated list of constraints with the lenient grammar
    pub fn parse_constraint_set(&self, constraints: &str) -> Result<Constraints, VersionParserError> {
        self.parse_set(constraints, ParseMode::Lenient)
    }

    pub fn must_parse_constraint_set(&self, constraints: &str) -> Constraints {
        self.parse_constraint_set(constraints)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    /// Parse a comma separated list of constraints with the strict grammar
    pub fn parse_strict_constraint_set(
        &self,
        constraints: &str,
    ) -> Result<Constraints, VersionParserError> {
        self.parse_set(constraints, ParseMode::Strict)
    }

    pub fn must_parse_strict_constraint_set(&self, constraints: &str) -> Constraints {
        self.parse_strict_constraint_set(constraints)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    /// Parse a single constraint with the grammar selected by `mode`
    pub fn parse_constraint_with(
        &self,
        constraint: &str,
        mode: ParseMode,
    ) -> Result<Constraint, VersionParserError> {
        match mode {
            ParseMode::Lenient => self.parse_constraint(constraint),
            ParseMode::Strict => self.parse_strict_constraint(constraint),
        }
    }

    fn parse_set(&self, constraints: &str, mode: ParseMode) -> Result<Constraints, VersionParserError> {
        let grammar = match mode {
            ParseMode::Lenient => "constraint",
            ParseMode::Strict => "strict constraint",
        };

        constraints
            .split(',')
            .map(|element| {
                self.parse_constraint_with(element, mode).map_err(|source| {
                    log::debug!("Rejected constraint set \"{}\": {}", constraints, source);
                    VersionParserError::InvalidConstraintSetElement {
                        element: element.to_string(),
                        grammar,
                        source: Box::new(source),
                    }
                })
            })
            .collect()
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn no_match(input: &str, grammar: &'static str) -> VersionParserError {
    log::debug!("Input \"{}\" does not match the {} grammar", input, grammar);
    VersionParserError::NoMatch {
        input: input.to_string(),
        grammar,
    }
}

fn parse_with(re: &Regex, version: &str, grammar: &'static str) -> Result<Version, VersionParserError> {
    let caps = re.captures(version).ok_or_else(|| no_match(version, grammar))?;

    let major = parse_component(&caps, "major")?.unwrap_or(0);
    let minor = parse_component(&caps, "minor")?;
    let patch = parse_component(&caps, "patch")?;
    let label = |name: &str| caps.name(name).map_or_else(String::new, |m| m.as_str().to_string());

    let parsed = Version::from_parts(major, minor, patch, label("prerelease"), label("buildmetadata"));
    log::trace!("Parsed {} \"{}\" as {}", grammar, version, parsed);
    Ok(parsed)
}

fn parse_component(caps: &Captures<'_>, component: &'static str) -> Result<Option<u64>, VersionParserError> {
    let Some(m) = caps.name(component).filter(|m| !m.as_str().is_empty()) else {
        return Ok(None);
    };

    m.as_str().parse::<u64>().map(Some).map_err(|source| {
        log::debug!("Version component {} \"{}\" out of range", component, m.as_str());
        VersionParserError::InvalidNumber {
            component,
            value: m.as_str().to_string(),
            source,
        }
    })
}

fn parse_operator(caps: &Captures<'_>, constraint: &str) -> Result<Operator, VersionParserError> {
    match caps.name("operator") {
        None => Ok(Operator::Equal),
        Some(m) => m.as_str().parse().map_err(|_| VersionParserError::InvalidOperator {
            operator: m.as_str().to_string(),
            constraint: constraint.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_version(v: &Version, major: u64, minor: u64, patch: u64, pre: &str, build: &str) {
        assert_eq!(v.major(), major, "major of {}", v);
        assert_eq!(v.minor(), minor, "minor of {}", v);
        assert_eq!(v.patch(), patch, "patch of {}", v);
        assert_eq!(v.pre_release(), pre, "pre-release of {}", v);
        assert_eq!(v.build_metadata(), build, "build metadata of {}", v);
    }

    #[test]
    fn test_parse_version() {
        let parser = VersionParser::new();
        let cases: &[(&str, u64, u64, u64, &str, &str)] = &[
            ("1", 1, 0, 0, "", ""),
            ("1.2", 1, 2, 0, "", ""),
            ("1.2.3-0123.0123", 1, 2, 3, "0123.0123", ""),
            ("1.1.2+.123", 1, 1, 2, "", ".123"),
            ("0.0.4", 0, 0, 4, "", ""),
            ("10.20.30", 10, 20, 30, "", ""),
            ("1.1.2-prerelease+meta", 1, 1, 2, "prerelease", "meta"),
            ("1.1.2+meta-valid", 1, 1, 2, "", "meta-valid"),
            ("1.0.0-alpha.beta.1", 1, 0, 0, "alpha.beta.1", ""),
            ("1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay", 1, 0, 0, "alpha-a.b-c-somethinglong", "build.1-aef.1-its-okay"),
            ("10.2.3-DEV-SNAPSHOT", 10, 2, 3, "DEV-SNAPSHOT", ""),
            ("1.2.3----RC-SNAPSHOT.12.9.1--.12+788", 1, 2, 3, "---RC-SNAPSHOT.12.9.1--.12", "788"),
            ("1.0.0+0.build.1-rc.10000aaa-kk-0.1", 1, 0, 0, "", "0.build.1-rc.10000aaa-kk-0.1"),
            ("18446744073709551615.18446744073709551615.18446744073709551615", u64::MAX, u64::MAX, u64::MAX, "", ""),
            ("1.0.0-alpha_beta", 1, 0, 0, "alpha_beta", ""),
            ("1.0.0-alpha..1", 1, 0, 0, "alpha..1", ""),
            ("01.1.1", 1, 1, 1, "", ""),
            ("1.1.01", 1, 1, 1, "", ""),
            ("1.2.3.DEV", 1, 2, 3, "", ""),
            ("1.2-SNAPSHOT", 1, 2, 0, "SNAPSHOT", ""),
            ("1.2-RC-SNAPSHOT", 1, 2, 0, "RC-SNAPSHOT", ""),
            ("-1.0.3-gamma+b7718", 1, 0, 3, "gamma", "b7718"),
            ("v1.0.3", 1, 0, 3, "", ""),
            ("9.8.7+meta+meta", 9, 8, 7, "", "meta+meta"),
            ("9.8.7-whatever+meta+meta", 9, 8, 7, "whatever", "meta+meta"),
        ];

        for &(input, major, minor, patch, pre, build) in cases {
            let parsed = parser
                .parse_version(input)
                .unwrap_or_else(|err| panic!("failed to parse {}: {}", input, err));
            assert_version(&parsed, major, minor, patch, pre, build);
            assert_eq!(parser.must_parse_version(input), parsed);
        }
    }

    #[test]
    fn test_parse_version_keeps_missing_components_absent() {
        let parser = VersionParser::new();

        let major_only = parser.parse_version("1").unwrap();
        assert!(!major_only.has_minor());
        assert!(!major_only.has_patch());

        let major_minor = parser.parse_version("1.2").unwrap();
        assert!(major_minor.has_minor());
        assert!(!major_minor.has_patch());
    }

    #[test]
    fn test_parse_version_fails() {
        let parser = VersionParser::new();

        for input in [
            "",
            "+invalid",
            "-invalid",
            "-invalid+invalid",
            "alpha",
            "alpha.beta",
            "alpha+beta",
            "alpha_beta",
            "alpha.",
            "-alpha.",
            "+justmeta",
        ] {
            assert!(
                matches!(parser.parse_version(input), Err(VersionParserError::NoMatch { .. })),
                "unexpectedly parsed {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_version_overflow() {
        let parser = VersionParser::new();

        let err = parser
            .parse_version("99999999999999999999999.999999999999999999.99999999999999999----RC-SNAPSHOT.12.09.1--..12")
            .unwrap_err();
        assert!(matches!(err, VersionParserError::InvalidNumber { component: "major", .. }));

        assert!(parser.parse_version("18446744073709551616").is_err());
        assert!(parser.parse_version("1.18446744073709551616").is_err());
    }

    #[test]
    fn test_parse_semver() {
        let parser = VersionParser::new();
        let cases: &[(&str, u64, u64, u64, &str, &str)] = &[
            ("0.0.4", 0, 0, 4, "", ""),
            ("1.2.3", 1, 2, 3, "", ""),
            ("1.1.2-prerelease+meta", 1, 1, 2, "prerelease", "meta"),
            ("1.0.0-alpha0.valid", 1, 0, 0, "alpha0.valid", ""),
            ("1.0.0-alpha.0valid", 1, 0, 0, "alpha.0valid", ""),
            ("1.0.0-rc.1+build.1", 1, 0, 0, "rc.1", "build.1"),
            ("2.0.1-alpha.1227", 2, 0, 1, "alpha.1227", ""),
            ("1.2.3----R-S.12.9.1--.12+meta", 1, 2, 3, "---R-S.12.9.1--.12", "meta"),
            ("1.0.0-0A.is.legal", 1, 0, 0, "0A.is.legal", ""),
            ("18446744073709551615.18446744073709551615.18446744073709551615", u64::MAX, u64::MAX, u64::MAX, "", ""),
        ];

        for &(input, major, minor, patch, pre, build) in cases {
            let parsed = parser
                .parse_semver(input)
                .unwrap_or_else(|err| panic!("failed to parse {}: {}", input, err));
            assert_version(&parsed, major, minor, patch, pre, build);
            assert!(parsed.has_minor() && parsed.has_patch());
            assert_eq!(parser.must_parse_semver(input), parsed);
        }
    }

    #[test]
    fn test_parse_semver_fails() {
        let parser = VersionParser::new();

        for input in [
            "1",
            "1.2",
            "1.2.3-0123",
            "1.2.3-0123.0123",
            "1.1.2+.123",
            "+invalid",
            "-invalid.01",
            "alpha.beta.1",
            "1.0.0-alpha_beta",
            "1.0.0-alpha..1",
            "01.1.1",
            "1.01.1",
            "1.1.01",
            "1.2.3.DEV",
            "1.2-SNAPSHOT",
            "1.2.31.2.3----RC-SNAPSHOT.12.09.1--..12+788",
            "-1.0.3-gamma+b7718",
            "9.8.7+meta+meta",
            "9.8.7-whatever+meta+meta",
            "v1.2.3",
            " 1.2.3",
        ] {
            assert!(parser.parse_semver(input).is_err(), "unexpectedly parsed {:?}", input);
        }
    }

    #[test]
    fn test_parse_semver_overflow() {
        let err = VersionParser::new()
            .parse_semver("1.18446744073709551616.0")
            .unwrap_err();
        assert!(matches!(err, VersionParserError::InvalidNumber { component: "minor", .. }));
    }

    #[test]
    #[should_panic(expected = "failed to parse version")]
    fn test_must_parse_version_panics() {
        VersionParser::new().must_parse_version("latest");
    }

    #[test]
    #[should_panic(expected = "failed to parse semantic version")]
    fn test_must_parse_semver_panics() {
        VersionParser::new().must_parse_semver("01.1.1");
    }

    #[test]
    fn test_parse_constraint() {
        let parser = VersionParser::new();
        let cases = [
            ("1", Operator::Equal, Version::new(1, 0, 0)),
            ("1.2.3-alpha", Operator::Equal, Version::new_with_pre_release(1, 2, 3, "alpha")),
            ("=1.2", Operator::Equal, Version::new(1, 2, 0)),
            ("!=1.2.3", Operator::NotEqual, Version::new(1, 2, 3)),
            ("<=1.2.3-alpha", Operator::LessThanOrEqual, Version::new_with_pre_release(1, 2, 3, "alpha")),
            (">=1", Operator::GreaterThanOrEqual, Version::new(1, 0, 0)),
            ("<1.2", Operator::LessThan, Version::new(1, 2, 0)),
            (">1.2.3", Operator::GreaterThan, Version::new(1, 2, 3)),
            ("~>1.2.3-alpha", Operator::Pessimistic, Version::new_with_pre_release(1, 2, 3, "alpha")),
            (">= v1.2.3", Operator::GreaterThanOrEqual, Version::new(1, 2, 3)),
            ("  ~> 2.0  ", Operator::Pessimistic, Version::new(2, 0, 0)),
        ];

        for (input, operator, version) in cases {
            let parsed = parser
                .parse_constraint(input)
                .unwrap_or_else(|err| panic!("failed to parse {}: {}", input, err));
            assert_eq!(parsed.operator(), operator, "operator of {}", input);
            assert_eq!(parsed.version(), &version, "version of {}", input);
            assert_eq!(parser.must_parse_constraint(input), parsed);
        }
    }

    #[test]
    fn test_parse_constraint_keeps_lenient_shape() {
        let parsed = VersionParser::new().parse_constraint(">=1.2").unwrap();
        assert_eq!(parsed.to_string(), ">= 1.2");
        assert_eq!(parsed.strict_string().unwrap(), ">= 1.2.0");
    }

    #[test]
    fn test_parse_constraint_fails() {
        let parser = VersionParser::new();

        assert!(parser.parse_constraint("").is_err());
        assert!(parser.parse_constraint("abc").is_err());
        assert!(parser.parse_constraint(">=").is_err());
        assert!(parser.parse_constraint(">= 1.0 2.0").is_err());
        assert!(matches!(
            parser.parse_constraint(">= 99999999999999999999"),
            Err(VersionParserError::InvalidConstraint { .. })
        ));
    }

    #[test]
    fn test_parse_strict_constraint() {
        let parser = VersionParser::new();
        let cases = [
            ("= 1.0.0", "= 1.0.0"),
            ("1.0.0", "= 1.0.0"),
            ("!= 2.1.0", "!= 2.1.0"),
            ("> 3.2.1", "> 3.2.1"),
            (">= 4.3.2-alpha", ">= 4.3.2-alpha"),
            ("< 5.4.3-beta+20230727", "< 5.4.3-beta+20230727"),
            ("<= 6.0.0", "<= 6.0.0"),
            ("~> 7.1.0", "~> 7.1.0"),
            ("~>7.1.0", "~> 7.1.0"),
            ("   < 2.0.0", "< 2.0.0"),
            (">= 3.0.0   ", ">= 3.0.0"),
            ("  <=   4.0.0", "<= 4.0.0"),
        ];

        for (input, expected) in cases {
            let parsed = parser
                .parse_strict_constraint(input)
                .unwrap_or_else(|err| panic!("failed to parse {}: {}", input, err));
            assert_eq!(parsed.strict_string().unwrap(), expected);
        }
    }

    #[test]
    fn test_parse_strict_constraint_fails() {
        let parser = VersionParser::new();

        for input in ["? 1.0.0", "> 2.a.b", "", ">=", "1.2", "v1.2.3", ">= 01.2.3", "~ 1.0.0"] {
            assert!(
                parser.parse_strict_constraint(input).is_err(),
                "unexpectedly parsed {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_constraint_set() {
        let parser = VersionParser::new();

        let set = parser
            .parse_constraint_set(">=1.0.0, !=2.0.1-alpha, <1.2.3, >1, <=1.2")
            .unwrap();
        let rendered: Vec<String> = set.iter().map(|c| c.strict_string().unwrap()).collect();
        assert_eq!(rendered, vec![">= 1.0.0", "!= 2.0.1-alpha", "< 1.2.3", "> 1.0.0", "<= 1.2.0"]);

        let single = parser.parse_constraint_set("1.0.0").unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.to_string(), "= 1.0.0");
    }

    #[test]
    fn test_parse_constraint_set_fails() {
        let parser = VersionParser::new();

        let err = parser.parse_constraint_set(">= 1.0, abc").unwrap_err();
        match err {
            VersionParserError::InvalidConstraintSetElement { element, .. } => {
                assert_eq!(element, " abc")
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(parser.parse_constraint_set("").is_err());
        assert!(parser.parse_constraint_set(">= 1.0,").is_err());
    }

    #[test]
    #[should_panic(expected = "regex failed to match version constraint")]
    fn test_must_parse_constraint_panics() {
        VersionParser::new().must_parse_constraint(">= latest");
    }

    #[test]
    #[should_panic(expected = "regex failed to match strict version constraint")]
    fn test_must_parse_strict_constraint_panics() {
        VersionParser::new().must_parse_strict_constraint(">= 1.2");
    }

    #[test]
    #[should_panic]
    fn test_must_parse_constraint_set_panics() {
        VersionParser::new().must_parse_constraint_set("abc");
    }

    #[test]
    fn test_parse_strict_constraint_set() {
        let parser = VersionParser::new();

        let set = parser.parse_strict_constraint_set(">= 2.0.0, < 3.0.0").unwrap();
        assert_eq!(set.strict_string().unwrap(), ">= 2.0.0, < 3.0.0");

        assert!(parser.parse_strict_constraint_set("!= 2.0.x").is_err());
        assert!(parser.parse_strict_constraint_set(">= 2.0.0, != 2.0.x").is_err());
        assert_eq!(
            parser.must_parse_strict_constraint_set("!= 2.0.0").strict_string().unwrap(),
            "!= 2.0.0"
        );
    }

    #[test]
    #[should_panic]
    fn test_must_parse_strict_constraint_set_panics() {
        VersionParser::new().must_parse_strict_constraint_set("!= 2.0.x");
    }

    #[test]
    fn test_parse_constraint_with_mode() {
        let parser = VersionParser::new();

        assert!(parser.parse_constraint_with(">= 1.2", ParseMode::Lenient).is_ok());
        assert!(parser.parse_constraint_with(">= 1.2", ParseMode::Strict).is_err());
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
    }

    #[test]
    fn test_error_messages() {
        let parser = VersionParser::new();

        assert_eq!(
            parser.parse_version("alpha").unwrap_err().to_string(),
            "regex failed to match version \"alpha\""
        );
        assert_eq!(
            parser.parse_constraint_set("1.0, abc").unwrap_err().to_string(),
            "failed to parse constraint \" abc\": regex failed to match version constraint \"abc\""
        );
        assert_eq!(
            parser.parse_strict_constraint_set("1.0.0, 2.0").unwrap_err().to_string(),
            "failed to parse strict constraint \" 2.0\": regex failed to match strict version constraint \"2.0\""
        );
    }
}
