//! End-to-end resolution pipeline tests: manifest -> registry ->
//! tokenize -> resolve -> render.

use std::fs;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempfile::TempDir;

use varity::{
    split_arguments, ArityResolver, ImplRegistry, Manifest, ResolveError, Span, MAX_ARITY,
};

fn log_registry() -> ImplRegistry {
    let manifest = Manifest::from_toml_str(
        r#"
        [[implementation]]
        base = "LOG"
        arities = [0, 1, 2]
        "#,
    )
    .unwrap();
    ImplRegistry::from_manifest(&manifest).unwrap()
}

#[test]
fn test_log_two_arguments() {
    let registry = log_registry();
    let resolver = ArityResolver::new(&registry);

    let src = r#""error", 5"#;
    let args = split_arguments(src).unwrap();
    let call = resolver
        .resolve("LOG", Span::new(0, src.len()), &args)
        .unwrap();

    assert_eq!(call.target, "LOG2");
    assert_eq!(call.render(), r#"LOG2("error", 5)"#);
}

#[test]
fn test_log_zero_arguments() {
    let registry = log_registry();
    let resolver = ArityResolver::new(&registry);

    let args = split_arguments("").unwrap();
    let call = resolver.resolve("LOG", Span::dummy(), &args).unwrap();
    assert_eq!(call.render(), "LOG0()");
}

#[test]
fn test_log_three_arguments_is_diagnosed() {
    let registry = log_registry();
    let resolver = ArityResolver::new(&registry);

    let src = r#""x", "y", "z""#;
    let args = split_arguments(src).unwrap();
    let err = resolver
        .resolve("LOG", Span::new(0, src.len()), &args)
        .unwrap_err();

    let rendered = err.into_diagnostic().render("<arguments>", src).unwrap();
    assert!(rendered.contains("no 3-argument implementation of `LOG`"));
    assert!(rendered.contains("undefined-implementation"));
    assert!(rendered.contains("implementations are defined for 0, 1, 2 arguments"));
}

#[test]
fn test_manifest_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("varity.toml");
    fs::write(&path, Manifest::example().to_toml_string()).unwrap();

    let manifest = Manifest::from_path(&path).unwrap();
    let registry = ImplRegistry::from_manifest(&manifest).unwrap();

    assert!(registry.contains("LOG", 2));
    assert!(registry.contains("bind_fn_impl_", 1));
    assert!(registry.contains("bind_fn_impl_", 2));
    assert!(!registry.contains("bind_fn_impl_", 3));
}

#[test]
fn test_string_and_group_arguments_survive_the_pipeline() {
    let mut registry = ImplRegistry::new();
    registry.register("draw", 3).unwrap();
    let resolver = ArityResolver::new(&registry);

    let src = r#"rect(0, 0), "label, with comma", [r, g, b]"#;
    let args = split_arguments(src).unwrap();
    let call = resolver
        .resolve("draw", Span::new(0, src.len()), &args)
        .unwrap();

    assert_eq!(
        call.render(),
        r#"draw3(rect(0, 0), "label, with comma", [r, g, b])"#
    );
}

proptest! {
    #[test]
    fn prop_every_supported_count_resolves(count in 0usize..=MAX_ARITY) {
        let mut registry = ImplRegistry::new();
        for arity in 0..=MAX_ARITY as u8 {
            registry.register("f", arity).unwrap();
        }
        let resolver = ArityResolver::new(&registry);

        let src: Vec<String> = (0..count).map(|i| format!("x{i}")).collect();
        let args = split_arguments(&src.join(", ")).unwrap();
        let call = resolver.resolve("f", Span::dummy(), &args).unwrap();

        prop_assert_eq!(call.arity as usize, count);
        prop_assert_eq!(call.target, format!("f{count}"));
    }

    #[test]
    fn prop_overflow_is_always_diagnosed(count in (MAX_ARITY + 1)..=40usize) {
        let mut registry = ImplRegistry::new();
        for arity in 0..=MAX_ARITY as u8 {
            registry.register("f", arity).unwrap();
        }
        let resolver = ArityResolver::new(&registry);

        let src: Vec<String> = (0..count).map(|i| format!("x{i}")).collect();
        let args = split_arguments(&src.join(", ")).unwrap();
        let err = resolver.resolve("f", Span::dummy(), &args).unwrap_err();

        let is_overflow = matches!(err, ResolveError::ArityOverflow { .. });
        prop_assert!(is_overflow);
    }

    #[test]
    fn prop_arguments_forwarded_unchanged(
        texts in prop::collection::vec("[a-z][a-z0-9_]{0,8}", 1..=9)
    ) {
        let mut registry = ImplRegistry::new();
        for arity in 0..=MAX_ARITY as u8 {
            registry.register("f", arity).unwrap();
        }
        let resolver = ArityResolver::new(&registry);

        let args = split_arguments(&texts.join(", ")).unwrap();
        let call = resolver.resolve("f", Span::dummy(), &args).unwrap();

        let forwarded: Vec<&str> = call.args.iter().map(|a| a.text.as_str()).collect();
        prop_assert_eq!(forwarded, texts.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    }
}
