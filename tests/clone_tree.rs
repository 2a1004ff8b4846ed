use assert_fs::prelude::*;
use assert_fs::TempDir;
use folder_ops::{clone_contents, FolderOptions, Relativization};
use std::fs;

fn build_source(temp: &TempDir) -> assert_fs::fixture::ChildPath {
    let src = temp.child("project");
    src.child("readme.md").write_str("readme").unwrap();
    src.child("docs/guide.md").write_str("guide").unwrap();
    src.child("docs/img/logo.svg").write_str("<svg/>").unwrap();
    src.child("empty").create_dir_all().unwrap();
    src
}

#[test]
fn both_modes_copy_the_full_tree_with_source_root() {
    for base in [FolderOptions::default(), FolderOptions::recursive()] {
        let temp = TempDir::new().unwrap();
        let src = build_source(&temp);
        let dst = temp.child("copy");
        dst.create_dir_all().unwrap();

        let opts = base.with_relativization(Relativization::SourceRoot);
        let report = clone_contents(src.path(), dst.path(), &opts).unwrap();

        // docs, docs/guide.md, docs/img, docs/img/logo.svg, empty, readme.md
        assert_eq!(report.copied, 6);
        dst.child("readme.md").assert("readme");
        dst.child("docs/guide.md").assert("guide");
        dst.child("docs/img/logo.svg").assert("<svg/>");
        assert!(dst.child("empty").path().is_dir());
        // source untouched
        src.child("docs/img/logo.svg").assert("<svg/>");
    }
}

#[cfg(unix)]
#[test]
fn flat_mode_follows_directory_links() {
    let temp = TempDir::new().unwrap();
    let outside = temp.child("outside");
    outside.child("shared.txt").write_str("shared").unwrap();
    let src = temp.child("src");
    src.create_dir_all().unwrap();
    std::os::unix::fs::symlink(outside.path(), src.path().join("linked")).unwrap();
    let dst = temp.child("dst");
    dst.create_dir_all().unwrap();

    let opts = FolderOptions::default().with_relativization(Relativization::SourceRoot);
    clone_contents(src.path(), dst.path(), &opts).unwrap();

    let linked = dst.child("linked");
    assert!(!fs::symlink_metadata(linked.path()).unwrap().file_type().is_symlink());
    linked.child("shared.txt").assert("shared");
}

#[cfg(unix)]
#[test]
fn recursive_mode_copies_links_without_descending() {
    let temp = TempDir::new().unwrap();
    let outside = temp.child("outside");
    outside.child("shared.txt").write_str("shared").unwrap();
    let src = temp.child("src");
    src.child("note.txt").write_str("note").unwrap();
    std::os::unix::fs::symlink(outside.path(), src.path().join("dir_link")).unwrap();
    std::os::unix::fs::symlink(src.path().join("note.txt"), src.path().join("file_link")).unwrap();
    let dst = temp.child("dst");
    dst.create_dir_all().unwrap();

    let opts = FolderOptions::recursive().with_relativization(Relativization::SourceRoot);
    let report = clone_contents(src.path(), dst.path(), &opts).unwrap();

    assert_eq!(report.copied, 3);
    assert!(dst.child("dir_link").path().is_dir());
    assert_eq!(fs::read_dir(dst.child("dir_link").path()).unwrap().count(), 0);
    dst.child("file_link").assert("note");
}

#[cfg(unix)]
#[test]
fn dangling_link_is_skipped_in_recursive_mode() {
    let temp = TempDir::new().unwrap();
    let src = temp.child("src");
    src.child("ok.txt").write_str("ok").unwrap();
    std::os::unix::fs::symlink(temp.path().join("gone"), src.path().join("dangling")).unwrap();
    let dst = temp.child("dst");
    dst.create_dir_all().unwrap();

    let opts = FolderOptions::recursive().with_relativization(Relativization::SourceRoot);
    let report = clone_contents(src.path(), dst.path(), &opts).unwrap();

    assert_eq!(report.copied, 1);
    assert_eq!(report.skipped, 1);
    dst.child("ok.txt").assert("ok");
}

#[cfg(unix)]
#[test]
fn flat_mode_aborts_on_symlink_loop() {
    let temp = TempDir::new().unwrap();
    let src = temp.child("src");
    src.child("sub").create_dir_all().unwrap();
    // src/sub/back -> src
    std::os::unix::fs::symlink(src.path(), src.path().join("sub/back")).unwrap();
    let dst = temp.child("dst");
    dst.create_dir_all().unwrap();

    let opts = FolderOptions::default().with_relativization(Relativization::SourceRoot);
    let err = clone_contents(src.path(), dst.path(), &opts).unwrap_err();

    assert_eq!(err.path(), src.path().join("sub/back"));
    assert!(!err.is_invalid_argument());
    assert!(dst.child("sub").path().is_dir());
    assert!(!dst.child("sub/back").path().exists());
}
