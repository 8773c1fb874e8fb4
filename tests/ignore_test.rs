use create_wp_theme::ignore::{ExclusionRule, ExclusionRules};

#[test]
fn test_default_rules() {
    let rules = ExclusionRules::with_defaults().unwrap();

    for excluded in
        ["node_modules", ".git", "dist", ".DS_Store", "Thumbs.db", "npm-debug.log", ".eslintcache"]
    {
        assert!(!rules.should_include(excluded), "{excluded} should be excluded");
    }

    for included in ["src", "package.json", "style.css", ".gitignore", "distribution"] {
        assert!(rules.should_include(included), "{included} should be included");
    }
}

#[test]
fn test_exact_rules_are_case_sensitive() {
    let rules = ExclusionRules::from_patterns(["node_modules"]).unwrap();
    assert!(!rules.should_include("node_modules"));
    assert!(rules.should_include("Node_Modules"));
    assert!(rules.should_include("node_modules_backup"));
}

#[test]
fn test_wildcard_dot_is_literal() {
    let rules = ExclusionRules::from_patterns(["*.log"]).unwrap();
    assert!(!rules.should_include("error.log"));
    assert!(!rules.should_include(".log"));
    assert!(rules.should_include("errorlog"));
    assert!(rules.should_include("error.logs"));
    assert!(rules.should_include("error.log.txt"));
}

#[test]
fn test_wildcard_is_anchored() {
    let rules = ExclusionRules::from_patterns(["a*c"]).unwrap();
    assert!(!rules.should_include("ac"));
    assert!(!rules.should_include("abbbc"));
    assert!(rules.should_include("xabc"));
    assert!(rules.should_include("abcd"));
}

#[test]
fn test_glob_metacharacters_are_literal() {
    let rules = ExclusionRules::from_patterns(["file?[1]*", "{a,b}*"]).unwrap();
    assert!(!rules.should_include("file?[1].txt"));
    assert!(rules.should_include("filex1.txt"));
    assert!(!rules.should_include("{a,b}.md"));
    assert!(rules.should_include("a.md"));
}

#[test]
fn test_empty_rule_set_includes_everything() {
    let rules = ExclusionRules::from_patterns(Vec::<String>::new()).unwrap();
    assert!(rules.should_include("node_modules"));
    assert!(rules.should_include("debug.log"));
}

#[test]
fn test_from_rules() {
    let rules = ExclusionRules::from_rules([
        ExclusionRule::Exact("build".to_string()),
        ExclusionRule::Wildcard("*.tmp".to_string()),
    ])
    .unwrap();
    assert!(!rules.should_include("build"));
    assert!(!rules.should_include("x.tmp"));
    assert!(rules.should_include("builds"));
}
