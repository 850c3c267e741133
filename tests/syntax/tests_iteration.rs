//! Decomposition of signatures into single complete types

use rstest::rstest;
use typesig::Signature;

fn decompose(input: &str) -> Vec<String> {
    let sig = Signature::new(input).unwrap_or_else(|e| panic!("'{input}' should validate: {e}"));
    sig.iter().map(|t| t.text().to_string()).collect()
}

#[rstest]
#[case("", &[])]
#[case("i", &["i"])]
#[case("v", &["v"])]
#[case("ai", &["ai"])]
#[case("aai", &["aai"])]
#[case("(ii)", &["(ii)"])]
#[case("a{si}", &["a{si}"])]
#[case("iii", &["i", "i", "i"])]
#[case("ia{sv}x(so)", &["i", "a{sv}", "x", "(so)"])]
#[case("a{sa{sv}}(i(dd))v", &["a{sa{sv}}", "(i(dd))", "v"])]
fn decomposes_into_complete_types(#[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(decompose(input), expected);
}

#[rstest]
#[case("i")]
#[case("aia{sv}(i(dd))vya{s(iv)}")]
#[case("ybnqiuxtdsoghv")]
fn concatenating_the_parts_reproduces_the_signature(#[case] input: &str) {
    let sig = Signature::new(input).unwrap();
    let rebuilt: String = sig.iter().map(|t| t.text().to_string()).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn empty_signature_iterates_to_zero_elements() {
    let sig = Signature::new("").unwrap();
    assert_eq!(sig.iter().count(), 0);
}

#[test]
fn children_have_variant_level_zero() {
    let sig = Signature::with_variant_level("ia{sv}", 2).unwrap();
    for child in &sig {
        assert_eq!(child.variant_level(), 0);
    }
}

#[test]
fn exhausted_iterator_stays_exhausted() {
    let sig = Signature::new("ii").unwrap();
    let mut types = sig.iter();
    assert!(types.next().is_some());
    assert!(types.next().is_some());

    // neither an error nor a repeat of the last element
    assert_eq!(types.next(), None);
    assert_eq!(types.next(), None);
}

#[test]
fn fresh_iterations_are_independent() {
    let sig = Signature::new("ia{sv}").unwrap();

    let mut first = sig.iter();
    assert_eq!(first.next().as_deref(), Some("i"));

    // a second iteration starts from the beginning, unaffected
    let mut second = sig.iter();
    assert_eq!(second.next().as_deref(), Some("i"));
    assert_eq!(first.next().as_deref(), Some("a{sv}"));
    assert_eq!(second.next().as_deref(), Some("a{sv}"));
}

#[test]
fn iteration_outlives_the_source_signature() {
    let sig = Signature::new("ia{sv}x").unwrap();
    let mut types = sig.iter();
    assert_eq!(types.next().as_deref(), Some("i"));

    drop(sig);

    // the iterator keeps the text alive on its own
    assert_eq!(types.next().as_deref(), Some("a{sv}"));
    assert_eq!(types.next().as_deref(), Some("x"));
    assert_eq!(types.next(), None);
}

#[test]
fn every_yielded_part_is_itself_a_valid_signature() {
    let sig = Signature::new("a{s(iv)}aai(i(dd))").unwrap();
    for child in &sig {
        assert!(typesig::validate(child.text()).is_ok(), "part '{child}'");
    }
}
