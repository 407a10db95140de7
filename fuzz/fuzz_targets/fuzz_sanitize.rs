// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

#![no_main]

use autopiclabel::renamer::target_path;
use autopiclabel::sanitize::sanitize;
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|raw: &str| {
    let name = sanitize(raw);
    assert!(name.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'));
    assert_eq!(sanitize(&name), name);

    let original = Path::new("/photos/original.png");
    match target_path(original, &name) {
        Some(target) => {
            assert_eq!(target.parent(), original.parent());
            assert_eq!(target.file_name().unwrap().to_string_lossy(), format!("{}.png", name));
        }
        None => assert!(name.is_empty()),
    }
});
