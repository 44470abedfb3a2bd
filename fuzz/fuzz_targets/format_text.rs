/*
 * fuzz target: report formatters.
 *
 * the formatters run inside a panic hook, where a second panic aborts
 * the process. so the property under fuzz is totality: any message
 * text must render without panicking, allocating absurdly, or looping.
 */

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else { return };
    let owned = text.to_string();

    /* payload probes never panic on message payloads */
    let rendered = crashguard::report::payload_text(&owned);
    assert_eq!(rendered, owned);
    assert_eq!(crashguard::report::payload_str(&owned), Some(text));

    /* error rendering never panics and always terminates its lines */
    let err = std::io::Error::other(owned.clone());
    let report = crashguard::report::error_text(&err);
    assert!(report.starts_with("Error: "));
    assert!(report.ends_with('\n'));

    /* failure values classify and render for any message */
    let fail = crashguard::Fail::new(owned);
    assert!(crashguard::is_fail(&fail));
    let _ = crashguard::report::payload_text(&fail);
});
