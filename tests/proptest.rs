/*
 * proptest.rs
 *
 * property-based tests for the report formatters.
 * generates thousands of payloads and errors to find edge cases.
 *
 * install() never runs here: proptest shrinks failures by catching
 * panics, and a fatal hook would end the harness on the first one.
 */

use std::error::Error;
use std::fmt;

use proptest::prelude::*;

use crashguard::report::{error_text, payload_str, payload_text};
use crashguard::{Fail, is_fail};

#[derive(Debug)]
struct Wrapped(String);

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for Wrapped {}

/* ============================================================================
 * Payload Rendering Properties
 * ============================================================================ */

/* message payloads render verbatim, whatever the text contains */
proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn payload_string_renders_verbatim(s in ".*") {
        let owned = s.clone();
        prop_assert_eq!(payload_text(&owned), s.clone());
        prop_assert_eq!(payload_str(&owned), Some(s.as_str()));
    }
}

/* primitive payloads agree with their canonical display form */
proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn payload_i64_matches_display(n in any::<i64>()) {
        prop_assert_eq!(payload_text(&n), n.to_string());
    }

    #[test]
    fn payload_u64_matches_display(n in any::<u64>()) {
        prop_assert_eq!(payload_text(&n), n.to_string());
    }

    #[test]
    fn payload_f64_matches_display(x in any::<f64>()) {
        /* NaN and infinities included - the formatter must not care */
        prop_assert_eq!(payload_text(&x), x.to_string());
    }

    #[test]
    fn payload_char_matches_display(c in any::<char>()) {
        prop_assert_eq!(payload_text(&c), c.to_string());
    }
}

/* classification stays mutually exclusive for arbitrary messages */
proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn fail_values_never_read_as_messages(msg in ".*") {
        let fail = Fail::new(msg.clone());
        prop_assert!(is_fail(&fail));
        prop_assert_eq!(payload_str(&fail), None);
        prop_assert!(payload_text(&fail).starts_with("Fail"));
    }

    #[test]
    fn fail_rendering_carries_plain_messages(msg in "[a-zA-Z0-9 ]+") {
        /* escape-free messages survive the structural rendering verbatim */
        prop_assert!(payload_text(&Fail::new(msg.clone())).contains(&msg));
    }

    #[test]
    fn strings_never_read_as_fail(msg in ".*") {
        prop_assert!(!is_fail(&msg));
    }
}

/* ============================================================================
 * Error Rendering Properties
 * ============================================================================ */

/* first line is always "Name: message" and always newline-terminated */
proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn error_text_shape_holds(msg in "[^\r\n]*") {
        let err = Wrapped(msg.clone());
        let text = error_text(&err);
        prop_assert!(text.starts_with("Wrapped: "));
        prop_assert!(text.ends_with('\n'));
        prop_assert_eq!(text, format!("Wrapped: {}\n", msg));
    }

    #[test]
    fn error_text_total_for_arbitrary_messages(msg in ".*") {
        /* multi-line, control chars, anything: must render, not panic */
        let text = error_text(&Wrapped(msg));
        prop_assert!(text.starts_with("Wrapped: "));
        prop_assert!(text.ends_with('\n'));
    }
}

/* dynamic dispatch loses the concrete name, nothing else */
proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn error_text_dyn_uses_default_name(msg in "[^\r\n]*") {
        let err = Wrapped(msg.clone());
        let dynamic: &dyn Error = &err;
        prop_assert_eq!(error_text(dynamic), format!("Error: {}\n", msg));
    }

    #[test]
    fn error_text_boxed_send_sync_uses_default_name(msg in "[^\r\n]*") {
        /* the usual boxed form; Send + Sync must not leak into the name */
        let boxed: Box<dyn Error + Send + Sync> = Box::new(Wrapped(msg.clone()));
        prop_assert_eq!(error_text(boxed.as_ref()), format!("Error: {}\n", msg));
    }
}
