use super::*;

#[test]
fn normalize_strips_dot_segments_and_backslashes() {
    assert_eq!(
        normalize_rel_path("./assets/sequence/frame007.png").unwrap(),
        "assets/sequence/frame007.png"
    );
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a//./b.png").unwrap(), "a/b.png");
}

#[test]
fn normalize_rejects_escapes() {
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../frame000.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn normalize_rejects_windows_drive_paths() {
    assert!(normalize_rel_path("C:\\frames\\f000.png").is_err());
    assert!(normalize_rel_path("d:/frames/f000.png").is_err());
    assert!(normalize_rel_path("./C:/f000.png").is_err());
    assert_eq!(normalize_rel_path("frames/C:f.png").unwrap(), "frames/C:f.png");
}

#[test]
fn fs_source_resolves_under_root() {
    let src = FsFrameSource::new("/srv/site");
    assert_eq!(
        src.resolve("./assets/frame001.jpg").unwrap(),
        PathBuf::from("/srv/site/assets/frame001.jpg")
    );
    assert_eq!(src.root(), Path::new("/srv/site"));
}

#[test]
fn fs_source_missing_file_is_asset_error() {
    let dir = std::env::temp_dir().join(format!("scrollreel_source_missing_{}", std::process::id()));
    let src = FsFrameSource::new(&dir);
    let err = src.fetch("nope/frame000.png").unwrap_err();
    assert!(matches!(err, ReelError::Asset(_)));
}

#[test]
fn closures_are_sources() {
    let src = |loc: &str| -> ReelResult<Vec<u8>> { Ok(loc.as_bytes().to_vec()) };
    assert_eq!(src.fetch("abc").unwrap(), b"abc".to_vec());
}
