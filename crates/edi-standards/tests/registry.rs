use std::fs;
use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use edi_standards::{DirectoryKey, DirectoryRegistry, EdifactParams, SearchPath};

fn write_untdid_fixture(root: &Path) {
    let dir = root.join("edifact/untdid");
    fs::create_dir_all(&dir).expect("create fixture dirs");
    fs::write(dir.join("EDED.d96a.csv"), "1000;an..35;B;Document/message name\n")
        .expect("write ED");
    fs::write(dir.join("EDCD.d96a.csv"), "C001;Quantity;1;6063;9;3;\n").expect("write CD");
    fs::write(dir.join("EDSD.d96a.csv"), "UNH;Message header;010;0062;M;1;\n").expect("write SD");
    fs::write(
        dir.join("EDMD.d96a.csv"),
        "ORDERS:D:96A:UN;Purchase order message;UNH;M;1;\n\
         INVOIC:D:96A:UN;Invoice message;UNH;M;1;\n",
    )
    .expect("write MD");
}

fn registry() -> (TempDir, DirectoryRegistry) {
    let tmp = TempDir::new().expect("tempdir");
    write_untdid_fixture(tmp.path());
    let registry = DirectoryRegistry::new(SearchPath::new(
        tmp.path().to_str().expect("utf-8 path"),
    ));
    (tmp, registry)
}

fn untdid_key() -> DirectoryKey {
    DirectoryKey::from(EdifactParams {
        d0052: Some("D".to_string()),
        d0054: Some("96A".to_string()),
        ..Default::default()
    })
}

#[test]
fn equal_keys_share_one_instance() {
    let (_tmp, registry) = registry();

    let first = registry.directory(&untdid_key()).expect("first");
    // Built independently, with the normalization defaults spelled out.
    let second = registry
        .directory(&DirectoryKey::from(EdifactParams {
            d0052: Some("D".to_string()),
            d0054: Some("96A".to_string()),
            d0051: String::new(),
            d0057: String::new(),
            is_iedi: false,
            ..Default::default()
        }))
        .expect("second");

    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn distinct_keys_get_distinct_directories() {
    let (_tmp, registry) = registry();

    let all = registry.directory(&untdid_key()).expect("unfiltered");
    let filtered = registry
        .directory(&DirectoryKey::from(EdifactParams {
            d0065: Some("ORDERS".to_string()),
            d0052: Some("D".to_string()),
            d0054: Some("96A".to_string()),
            ..Default::default()
        }))
        .expect("filtered");

    assert!(!Arc::ptr_eq(&all, &filtered));
    assert_eq!(all.summary().messages, 2);
    assert_eq!(filtered.summary().messages, 1);
}

#[test]
fn caching_disabled_builds_fresh_but_equal_directories() {
    let (_tmp, registry) = registry();
    registry.set_caching(false);

    let first = registry.directory(&untdid_key()).expect("first");
    let second = registry.directory(&untdid_key()).expect("second");

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[test]
fn flush_forces_reconstruction() {
    let (_tmp, registry) = registry();

    let before = registry.directory(&untdid_key()).expect("before");
    registry.flush();
    let after = registry.directory(&untdid_key()).expect("after");

    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(*before, *after);
}

#[test]
fn disabling_caching_does_not_evict() {
    let (_tmp, registry) = registry();

    let cached = registry.directory(&untdid_key()).expect("cached");

    registry.set_caching(false);
    let fresh = registry.directory(&untdid_key()).expect("fresh");
    assert!(!Arc::ptr_eq(&cached, &fresh));

    // The original entry is still there once caching is back on.
    registry.set_caching(true);
    let again = registry.directory(&untdid_key()).expect("again");
    assert!(Arc::ptr_eq(&cached, &again));
}

#[test]
fn caching_flag_is_queryable() {
    let (_tmp, registry) = registry();
    assert!(registry.caching_enabled());
    registry.set_caching(false);
    assert!(!registry.caching_enabled());
    registry.set_caching(true);
    assert!(registry.caching_enabled());
}

#[test]
fn resolution_errors_surface_before_any_caching() {
    let (_tmp, registry) = registry();
    let key = DirectoryKey::from(EdifactParams {
        d0002: Some(5),
        ..Default::default()
    });
    assert!(registry.directory(&key).is_err());
    // The failed key was not cached; the error repeats.
    assert!(registry.directory(&key).is_err());
}
