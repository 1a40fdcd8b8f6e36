//! Integration test: a realistic web-app chain resolved end-to-end.
//!
//! Uses `tests/fixtures/web-app.toml` to verify that the full
//! TOML → DTO → chain → compile → resolve pipeline produces the effective
//! configuration each kind of file should get.

use lint_overlay_core::declarative;
use lint_overlay_core::{
    CompiledChain, Config, DiagnosticKind, ResolveError, Resolver, RuleInfo, RuleRegistry,
    RuleSetting, Severity, StaticRegistry, UnknownRulePolicy,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/web-app.toml")
}

fn load_fixture() -> (Config, CompiledChain) {
    let path = fixture_path();
    let config = Config::from_file(&path).expect("fixture config should parse");
    let chain = declarative::parse_chain_file(&path)
        .expect("fixture chain should load")
        .compile()
        .expect("fixture chain should compile");
    (config, chain)
}

/// Registry that knows every key the fixture sets, except the ones listed.
fn registry_without(chain: &CompiledChain, missing: &[&str]) -> Arc<dyn RuleRegistry> {
    let mut registry = StaticRegistry::new();
    for overlay in chain.overlays() {
        for key in overlay.rules().keys() {
            if !missing.contains(&key.as_str()) {
                registry.register(key.clone(), Box::new(RuleInfo::new("")));
            }
        }
    }
    Arc::new(registry)
}

fn resolver() -> Resolver {
    let (config, chain) = load_fixture();
    let registry = registry_without(&chain, &[]);
    Resolver::new(chain)
        .with_registry(registry)
        .with_options(config.resolver.to_options(None))
}

// ── Happy path ──

#[test]
fn fixture_loads_six_overlays() {
    let (config, chain) = load_fixture();
    assert_eq!(config.resolver.unknown_rules, UnknownRulePolicy::Drop);
    assert_eq!(chain.overlays().len(), 6);
    assert_eq!(chain.ignore_patterns().len(), 9);
    assert_eq!(
        chain.overlays()[4].position().name.as_deref(),
        Some("tests")
    );
}

#[test]
fn source_component_gets_base_typescript_security_and_naming() {
    let resolution = resolver()
        .resolve(Path::new("src/components/button.tsx"))
        .expect("resolution should succeed");
    assert!(resolution.diagnostics.is_empty());

    let config = resolution.config;
    assert_eq!(config.applied_overlays(), &[0, 1, 2, 3]);

    let no_console = config.get("no-console").expect("no-console should be set");
    assert_eq!(no_console.severity, Severity::Warn);
    let options = no_console.options.as_ref().expect("options should be kept");
    assert_eq!(options.values()[0]["allow"][0].as_str(), Some("warn"));

    assert_eq!(
        config.get("@typescript-eslint/prefer-readonly"),
        Some(&RuleSetting::error())
    );
    assert_eq!(
        config.get("check-file/filename-naming-convention").map(|s| s.severity),
        Some(Severity::Error)
    );

    let language = config.language().expect("typescript scope should apply");
    assert_eq!(language.parser, "typescript-eslint");
    assert_eq!(
        config.plugins().keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["@typescript-eslint", "check-file", "security"]
    );
}

#[test]
fn test_file_relaxes_rules() {
    let config = resolver()
        .resolve(Path::new("src/app/page.test.tsx"))
        .expect("resolution should succeed")
        .config;

    assert_eq!(config.applied_overlays(), &[0, 1, 2, 3, 4]);
    assert_eq!(config.get("no-console"), Some(&RuleSetting::off()));
    assert_eq!(config.get("complexity"), Some(&RuleSetting::off()));
    assert_eq!(
        config.get("@typescript-eslint/no-explicit-any"),
        Some(&RuleSetting::warn())
    );
    assert_eq!(
        config.get("@typescript-eslint/no-floating-promises"),
        Some(&RuleSetting::off())
    );
    // Untouched by the tests overlay.
    assert_eq!(config.get("no-debugger"), Some(&RuleSetting::error()));
}

#[test]
fn typescript_config_file_is_resolved_not_ignored() {
    let config = resolver()
        .resolve(Path::new("next.config.ts"))
        .expect("resolution should succeed")
        .config;

    assert!(!config.is_ignored());
    assert_eq!(config.applied_overlays(), &[0, 1, 2, 5]);
    assert_eq!(config.get("no-console"), Some(&RuleSetting::off()));
    assert_eq!(
        config.get("security/detect-non-literal-require"),
        Some(&RuleSetting::off())
    );
}

#[test]
fn global_ignores_short_circuit() {
    let resolver = resolver();
    for path in [
        "tailwind.config.js",
        "eslint.config.mjs",
        "next-env.d.ts",
        "node_modules/react/index.js",
        ".next/server/app.js",
    ] {
        let config = resolver
            .resolve(Path::new(path))
            .expect("resolution should succeed")
            .config;
        assert!(config.is_ignored(), "{path} should be ignored");
        assert!(config.is_empty());
    }
}

#[test]
fn plain_script_gets_no_typescript_overlay() {
    let config = resolver()
        .resolve(Path::new("scripts/seed.js"))
        .expect("resolution should succeed")
        .config;

    assert_eq!(config.applied_overlays(), &[0, 2]);
    assert!(config.language().is_none());
    assert!(!config.contains("@typescript-eslint/prefer-readonly"));
    assert!(!config.contains("check-file/filename-naming-convention"));
    // Base-level TypeScript rules still apply everywhere.
    assert!(config.contains("@typescript-eslint/no-explicit-any"));
}

#[test]
fn absolute_paths_are_made_relative_to_base_dir() {
    let (config, chain) = load_fixture();
    let resolver = Resolver::new(chain)
        .with_options(config.resolver.to_options(Some(PathBuf::from("/work/web-app"))));

    let config = resolver
        .resolve(Path::new("/work/web-app/src/app/page.test.tsx"))
        .expect("resolution should succeed")
        .config;
    assert_eq!(config.path(), "src/app/page.test.tsx");
    assert_eq!(config.get("no-console"), Some(&RuleSetting::off()));
}

// ── Registry checks ──

#[test]
fn unknown_rule_is_reported_and_dropped() {
    let (config, chain) = load_fixture();
    let registry = registry_without(&chain, &["security/detect-pseudoRandomBytes"]);
    let resolver = Resolver::new(chain)
        .with_registry(registry)
        .with_options(config.resolver.to_options(None));

    let resolution = resolver
        .resolve(Path::new("src/lib/api.ts"))
        .expect("resolution should succeed");

    assert_eq!(resolution.diagnostics.len(), 1);
    let diagnostic = &resolution.diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::UnknownRuleKey);
    assert_eq!(diagnostic.overlay.index, 2);
    assert_eq!(diagnostic.rule.as_str(), "security/detect-pseudoRandomBytes");
    assert!(!resolution
        .config
        .contains("security/detect-pseudoRandomBytes"));
}

#[test]
fn strict_mode_fails_on_unknown_rule() {
    let (config, chain) = load_fixture();
    let mut options = config.resolver.to_options(None);
    options.strict = true;
    let registry = registry_without(&chain, &["react/no-danger"]);
    let resolver = Resolver::new(chain)
        .with_registry(registry)
        .with_options(options);

    let err = resolver
        .resolve(Path::new("src/app/page.tsx"))
        .expect_err("strict resolution should fail");
    let ResolveError::Strict { path, diagnostics } = err;
    assert_eq!(path, "src/app/page.tsx");
    assert_eq!(diagnostics.len(), 1);

    // Ignored files never reach an overlay, so nothing is reported.
    assert!(resolver.resolve(Path::new("dist/app.js")).is_ok());
}

#[test]
fn validate_reports_keys_of_every_overlay() {
    let (_, chain) = load_fixture();
    let registry = registry_without(&chain, &["no-console", "complexity"]);
    let resolver = Resolver::new(chain).with_registry(registry);

    let diagnostics = resolver.validate();
    let positions: Vec<(usize, &str)> = diagnostics
        .iter()
        .map(|d| (d.overlay.index, d.rule.as_str()))
        .collect();
    assert_eq!(
        positions,
        vec![
            (0, "complexity"),
            (0, "no-console"),
            (4, "complexity"),
            (4, "no-console"),
            (5, "no-console"),
        ]
    );
}

// ── Concurrency ──

#[test]
fn shared_resolver_gives_identical_results_across_threads() {
    let resolver = Arc::new(resolver());
    let paths = [
        "src/components/button.tsx",
        "src/app/page.test.tsx",
        "next.config.ts",
        "scripts/seed.js",
        "dist/main.js",
    ];
    let expected: Vec<_> = paths
        .iter()
        .map(|p| resolver.resolve(Path::new(p)).expect("resolution should succeed"))
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                scope.spawn(move || {
                    paths
                        .iter()
                        .map(|p| resolver.resolve(Path::new(p)).expect("resolution should succeed"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            let actual = handle.join().expect("thread should not panic");
            assert_eq!(actual, expected);
        }
    });
}
