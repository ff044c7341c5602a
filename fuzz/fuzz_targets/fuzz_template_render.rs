#![no_main]

use libfuzzer_sys::fuzz_target;

use hippo::domain::services::{find_placeholders, render_template, Substitutions};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    // First line is the COMMIT value, the rest is the template
    let (commit, template) = content.split_once('\n').unwrap_or(("abc123", content));
    let subs = Substitutions::from([
        ("COMMIT".to_string(), commit.to_string()),
        ("TIMESTAMP".to_string(), "2026-01-01T00:00:00Z".to_string()),
    ]);

    let rendered = render_template(template, &subs);
    let _ = find_placeholders(&rendered);

    if !template.contains('$') {
        assert_eq!(rendered, template);
    }
});
