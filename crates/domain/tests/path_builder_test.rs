use dnslink_router_domain::build_path;

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_replacement_with_root_path() {
    assert_eq!(build_path("swarm", "abc123", "/bzz", "/"), "/bzz/abc123/");
}

#[test]
fn test_replacement_with_subpath() {
    assert_eq!(
        build_path("swarm", "abc123", "/bzz", "/index.html"),
        "/bzz/abc123/index.html"
    );
}

#[test]
fn test_replacement_with_nested_subpath() {
    assert_eq!(
        build_path("swarm", "abc123", "/bzz", "/assets/style.css"),
        "/bzz/abc123/assets/style.css"
    );
}

#[test]
fn test_no_replacement_uses_namespace_prefix() {
    assert_eq!(build_path("ipfs", "QmXyz789", "", "/"), "/ipfs/QmXyz789/");
    assert_eq!(
        build_path("ipfs", "QmXyz789", "", "/readme.md"),
        "/ipfs/QmXyz789/readme.md"
    );
}

#[test]
fn test_identifier_with_nested_path() {
    assert_eq!(
        build_path("swarm", "abc123/subdir", "/bzz", "/file.txt"),
        "/bzz/abc123/subdir/file.txt"
    );
}

#[test]
fn test_empty_original_path() {
    assert_eq!(build_path("swarm", "abc123", "/bzz", ""), "/bzz/abc123/");
}

#[test]
fn test_identifier_trailing_slash_collapsed() {
    assert_eq!(
        build_path("swarm", "abc123/", "/bzz", "/index.html"),
        "/bzz/abc123/index.html"
    );
}

#[test]
fn test_original_path_without_leading_slash() {
    assert_eq!(
        build_path("swarm", "abc123", "/bzz", "file.txt"),
        "/bzz/abc123/file.txt"
    );
}

#[test]
fn test_real_swarm_hash() {
    let hash = "d1e8b6f5a3c2b9e4d7f0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2";
    assert_eq!(
        build_path("swarm", hash, "/bzz", "/"),
        format!("/bzz/{hash}/")
    );
}

#[test]
fn test_replacement_without_leading_slash_not_corrected() {
    assert_eq!(
        build_path("swarm", "abc123", "bzz", "/index.html"),
        "bzz/abc123/index.html"
    );
}

#[test]
fn test_replacement_with_trailing_slash() {
    assert_eq!(
        build_path("swarm", "abc123", "/bzz/", "/index.html"),
        "/bzz/abc123/index.html"
    );
}

#[test]
fn test_double_leading_slash_preserved() {
    assert_eq!(
        build_path("swarm", "abc123", "/bzz", "//index.html"),
        "/bzz/abc123//index.html"
    );
}

#[test]
fn test_query_like_text_passes_through() {
    assert_eq!(
        build_path("swarm", "abc123", "/bzz", "/page?foo=bar"),
        "/bzz/abc123/page?foo=bar"
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_deterministic() {
    let first = build_path("ipfs", "QmAbc/docs", "/gw", "/a/b?c=d");
    for _ in 0..10 {
        assert_eq!(build_path("ipfs", "QmAbc/docs", "/gw", "/a/b?c=d"), first);
    }
}

#[test]
fn test_trailing_slash_collapse_law() {
    let paths = ["", "/", "/index.html", "//x", "a/b", "/?q=1"];
    let replacements = ["", "/bzz", "/bzz/", "bzz"];

    for path in paths {
        for replacement in replacements {
            assert_eq!(
                build_path("swarm", "abc123", replacement, path),
                build_path("swarm", "abc123/", replacement, path),
                "replacement={replacement:?} path={path:?}"
            );
        }
    }
}

#[test]
fn test_only_one_trailing_identifier_slash_removed() {
    assert_eq!(
        build_path("swarm", "abc123//", "/bzz", "/index.html"),
        "/bzz/abc123/index.html"
    );
    assert_eq!(
        build_path("swarm", "abc123//", "/bzz", "//index.html"),
        "/bzz/abc123//index.html"
    );
}

#[test]
fn test_leading_slash_preservation_law() {
    for extra in 1..4 {
        let original = format!("{}index.html", "/".repeat(extra + 1));
        let expected = format!("/bzz/abc123/{}index.html", "/".repeat(extra));
        assert_eq!(build_path("swarm", "abc123", "/bzz", &original), expected);
    }
}
