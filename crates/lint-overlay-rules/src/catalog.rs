//! Catalog of well-known rules.

use lint_overlay_core::{RuleInfo, Severity, StaticRegistry};

/// One catalog row: key, description, default severity, max options.
type Entry = (&'static str, &'static str, Severity, usize);

const CORE: &[Entry] = &[
    ("complexity", "Enforce a maximum cyclomatic complexity", Severity::Warn, 1),
    ("max-depth", "Enforce a maximum depth that blocks can be nested", Severity::Warn, 1),
    ("max-lines", "Enforce a maximum number of lines per file", Severity::Warn, 1),
    ("max-lines-per-function", "Enforce a maximum number of lines of code in a function", Severity::Warn, 1),
    ("max-params", "Enforce a maximum number of parameters in function definitions", Severity::Warn, 1),
    ("no-console", "Disallow the use of `console`", Severity::Warn, 1),
    ("no-debugger", "Disallow the use of `debugger`", Severity::Error, 0),
    ("no-eval", "Disallow the use of `eval()`", Severity::Error, 1),
    ("no-implied-eval", "Disallow the use of `eval()`-like methods", Severity::Error, 0),
    ("no-new-func", "Disallow `new` operators with the `Function` object", Severity::Error, 0),
    ("no-unused-vars", "Disallow unused variables", Severity::Error, 1),
    ("prefer-arrow-callback", "Require using arrow functions for callbacks", Severity::Error, 1),
    ("prefer-const", "Require `const` declarations for variables that are never reassigned", Severity::Error, 1),
    ("prefer-template", "Require template literals instead of string concatenation", Severity::Error, 0),
    ("quotes", "Enforce the consistent use of either backticks, double, or single quotes", Severity::Error, 2),
    ("semi", "Require or disallow semicolons instead of ASI", Severity::Error, 2),
];

const REACT: &[Entry] = &[
    ("react/jsx-key", "Disallow missing `key` props in iterators", Severity::Error, 1),
    ("react/jsx-no-bind", "Disallow `.bind()` or arrow functions in JSX props", Severity::Warn, 1),
    ("react/jsx-no-script-url", "Disallow usage of `javascript:` URLs", Severity::Error, 1),
    ("react/jsx-no-target-blank", "Disallow `target=\"_blank\"` without `rel=\"noreferrer\"`", Severity::Error, 1),
    ("react/no-array-index-key", "Disallow usage of array index in keys", Severity::Warn, 0),
    ("react/no-danger", "Disallow usage of dangerous JSX properties", Severity::Error, 1),
    ("react/no-danger-with-children", "Disallow using children together with `dangerouslySetInnerHTML`", Severity::Error, 0),
    ("react/no-unescaped-entities", "Disallow unescaped HTML entities in JSX", Severity::Error, 1),
    ("react/prop-types", "Require prop type definitions in components", Severity::Error, 1),
    ("react-hooks/exhaustive-deps", "Verify the dependency list of effect hooks", Severity::Warn, 1),
    ("react-hooks/rules-of-hooks", "Enforce the Rules of Hooks", Severity::Error, 0),
];

const IMPORT: &[Entry] = &[
    ("import/default", "Ensure a default export is present, given a default import", Severity::Error, 0),
    ("import/named", "Ensure named imports correspond to a named export", Severity::Error, 1),
    ("import/no-duplicates", "Forbid repeated import of the same module", Severity::Warn, 1),
    ("import/no-unresolved", "Ensure imports point to a resolvable file", Severity::Error, 1),
    ("import/order", "Enforce a convention in module import order", Severity::Warn, 1),
];

const JSX_A11Y: &[Entry] = &[
    ("jsx-a11y/alt-text", "Enforce alternative text on elements that require it", Severity::Error, 1),
    ("jsx-a11y/anchor-is-valid", "Enforce all anchors are valid, navigable elements", Severity::Error, 1),
    ("jsx-a11y/aria-role", "Enforce ARIA roles are valid and not abstract", Severity::Error, 1),
    ("jsx-a11y/no-autofocus", "Forbid the `autoFocus` prop", Severity::Error, 1),
];

const TYPESCRIPT: &[Entry] = &[
    ("@typescript-eslint/consistent-type-imports", "Enforce consistent usage of type imports", Severity::Error, 1),
    ("@typescript-eslint/explicit-function-return-type", "Require explicit return types on functions and class methods", Severity::Error, 1),
    ("@typescript-eslint/explicit-module-boundary-types", "Require explicit types on exported functions' arguments and return values", Severity::Error, 1),
    ("@typescript-eslint/no-explicit-any", "Disallow the `any` type", Severity::Error, 1),
    ("@typescript-eslint/no-floating-promises", "Require Promise-like statements to be handled appropriately", Severity::Error, 1),
    ("@typescript-eslint/no-non-null-assertion", "Disallow non-null assertions using the `!` postfix operator", Severity::Error, 0),
    ("@typescript-eslint/no-unnecessary-condition", "Disallow conditionals where the type is always truthy or always falsy", Severity::Warn, 1),
    ("@typescript-eslint/no-unnecessary-type-assertion", "Disallow type assertions that do not change the type of an expression", Severity::Error, 1),
    ("@typescript-eslint/no-unused-vars", "Disallow unused variables", Severity::Error, 1),
    ("@typescript-eslint/no-var-requires", "Disallow `require` statements except in import statements", Severity::Error, 1),
    ("@typescript-eslint/prefer-includes", "Enforce `includes` method over `indexOf` method", Severity::Error, 0),
    ("@typescript-eslint/prefer-nullish-coalescing", "Enforce using the nullish coalescing operator instead of logical assignments or chaining", Severity::Error, 1),
    ("@typescript-eslint/prefer-optional-chain", "Enforce using concise optional chain expressions", Severity::Error, 1),
    ("@typescript-eslint/prefer-readonly", "Require private members to be marked as `readonly` if never modified", Severity::Error, 1),
    ("@typescript-eslint/prefer-string-starts-ends-with", "Enforce `startsWith` and `endsWith` over other equivalent methods", Severity::Error, 1),
    ("@typescript-eslint/strict-boolean-expressions", "Disallow certain types in boolean expressions", Severity::Error, 1),
];

const SECURITY: &[Entry] = &[
    ("security/detect-buffer-noassert", "Detect calls to buffer with `noAssert` flag set", Severity::Error, 0),
    ("security/detect-child-process", "Detect instances of `child_process` and non-literal `exec()`", Severity::Error, 0),
    ("security/detect-disable-mustache-escape", "Detect `object.escapeMarkup = false`", Severity::Error, 0),
    ("security/detect-eval-with-expression", "Detect `eval(variable)`", Severity::Error, 0),
    ("security/detect-new-buffer", "Detect `new Buffer(variable)`", Severity::Error, 0),
    ("security/detect-no-csrf-before-method-override", "Detect CSRF middleware placed before `methodOverride`", Severity::Error, 0),
    ("security/detect-non-literal-fs-filename", "Detect variables in filename arguments of `fs` calls", Severity::Warn, 0),
    ("security/detect-non-literal-regexp", "Detect `RegExp(variable)`", Severity::Warn, 0),
    ("security/detect-non-literal-require", "Detect `require(variable)`", Severity::Warn, 0),
    ("security/detect-object-injection", "Detect `variable[key]` as a left- or right-hand assignment operand", Severity::Warn, 0),
    ("security/detect-possible-timing-attacks", "Detect insecure comparisons (`==`, `!=`, `!==` and `===`)", Severity::Warn, 0),
    ("security/detect-pseudoRandomBytes", "Detect `crypto.pseudoRandomBytes()`", Severity::Error, 0),
    ("security/detect-unsafe-regex", "Detect potentially catastrophic exponential-time regular expressions", Severity::Error, 0),
];

const CHECK_FILE: &[Entry] = &[
    ("check-file/filename-naming-convention", "Enforce a consistent naming pattern for file names", Severity::Error, 2),
    ("check-file/folder-naming-convention", "Enforce a consistent naming pattern for folder names", Severity::Error, 2),
];

/// Returns a registry describing every built-in rule.
///
/// Each entry limits how many positional options the rule accepts, so a
/// misplaced extra option is reported as `InvalidRuleOptions`.
#[must_use]
pub fn known_rules() -> StaticRegistry {
    [CORE, REACT, IMPORT, JSX_A11Y, TYPESCRIPT, SECURITY, CHECK_FILE]
        .into_iter()
        .flatten()
        .fold(StaticRegistry::new(), |registry, &(key, description, severity, max)| {
            registry.with_rule(
                key,
                RuleInfo::new(description)
                    .with_default_severity(severity)
                    .with_max_options(max),
            )
        })
}
