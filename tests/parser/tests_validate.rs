//! Accept/reject grid for the signature grammar

use rstest::rstest;
use typesig::{ErrorCode, MAX_SIGNATURE_LENGTH, validate};

#[rstest]
#[case("")]
#[case("i")]
#[case("v")]
#[case("ybnqiuxtdsogh")]
#[case("ai")]
#[case("av")]
#[case("aai")]
#[case("a(ii)")]
#[case("(ii)")]
#[case("(i)")]
#[case("(ivs)")]
#[case("(i(i(i)))")]
#[case("a{si}")]
#[case("a{sv}")]
#[case("a{yv}")]
#[case("a{s(iv)}")]
#[case("a{sa{sv}}")]
#[case("(a{sv}i)")]
#[case("iii")]
#[case("ia{sv}x(so)")]
fn accepts_valid_signature(#[case] input: &str) {
    assert!(
        validate(input).is_ok(),
        "expected '{input}' to validate: {:?}",
        validate(input)
    );
}

#[rstest]
#[case("z", ErrorCode::E0101, 0)]
#[case("i!", ErrorCode::E0101, 1)]
#[case("aez", ErrorCode::E0101, 1)]
#[case("a", ErrorCode::E0201, 1)]
#[case("aa", ErrorCode::E0201, 2)]
#[case("(a", ErrorCode::E0201, 2)]
#[case("(", ErrorCode::E0202, 1)]
#[case("(i", ErrorCode::E0202, 2)]
#[case("(i(ii)", ErrorCode::E0202, 6)]
#[case("()", ErrorCode::E0203, 1)]
#[case("a()", ErrorCode::E0203, 2)]
#[case("a{", ErrorCode::E0204, 2)]
#[case("a{s", ErrorCode::E0204, 3)]
#[case("a{sv", ErrorCode::E0204, 4)]
#[case("a{}", ErrorCode::E0205, 2)]
#[case("a{vs}", ErrorCode::E0206, 2)]
#[case("a{(i)s}", ErrorCode::E0206, 2)]
#[case("a{ass}", ErrorCode::E0206, 2)]
#[case("a{sii}", ErrorCode::E0207, 4)]
#[case("{si}", ErrorCode::E0208, 0)]
#[case("i{si}", ErrorCode::E0208, 1)]
#[case("(a{si}{si})", ErrorCode::E0208, 6)]
#[case(")", ErrorCode::E0209, 0)]
#[case("}", ErrorCode::E0209, 0)]
#[case("i)", ErrorCode::E0209, 1)]
#[case("a)", ErrorCode::E0209, 1)]
#[case("(})", ErrorCode::E0209, 1)]
fn rejects_invalid_signature(#[case] input: &str, #[case] code: ErrorCode, #[case] offset: u32) {
    let err = validate(input).expect_err("input should be rejected");
    assert_eq!(err.code, code, "wrong code for '{input}': {err}");
    assert_eq!(
        u32::from(err.offset),
        offset,
        "wrong offset for '{input}': {err}"
    );
}

#[test]
fn accepts_maximum_length() {
    let sig = "i".repeat(MAX_SIGNATURE_LENGTH);
    assert!(validate(&sig).is_ok());
}

#[test]
fn rejects_over_maximum_length() {
    let sig = "i".repeat(MAX_SIGNATURE_LENGTH + 1);
    let err = validate(&sig).expect_err("over-length signature");
    assert_eq!(err.code, ErrorCode::E0102);
    assert_eq!(u32::from(err.offset), MAX_SIGNATURE_LENGTH as u32);
}

#[test]
fn accepts_nesting_at_the_limit() {
    let structs = format!("{}i{}", "(".repeat(32), ")".repeat(32));
    assert!(validate(&structs).is_ok());

    let arrays = format!("{}i", "a".repeat(32));
    assert!(validate(&arrays).is_ok());
}

#[test]
fn rejects_nesting_past_the_limit() {
    // balanced brackets do not save a 33-deep struct
    let structs = format!("{}i{}", "(".repeat(33), ")".repeat(33));
    assert_eq!(
        validate(&structs).expect_err("too deep").code,
        ErrorCode::E0302
    );

    let arrays = format!("{}i", "a".repeat(33));
    assert_eq!(
        validate(&arrays).expect_err("too deep").code,
        ErrorCode::E0301
    );
}

#[test]
fn array_and_struct_nesting_are_independent_counters() {
    // 20 arrays and 20 structs interleaved: each counter stays under its
    // own cap even though the combined depth is 40
    let mut sig = String::new();
    for _ in 0..20 {
        sig.push_str("a(");
    }
    sig.push('i');
    for _ in 0..20 {
        sig.push(')');
    }
    assert!(validate(&sig).is_ok(), "combined nesting should validate");
}

#[test]
fn revalidation_is_idempotent() {
    for input in ["", "i", "a{sv}", "(i(i))", "aaai"] {
        assert!(validate(input).is_ok());
        assert!(validate(input).is_ok(), "second validation of '{input}'");
    }
}
