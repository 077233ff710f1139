use std::path::Path;

use super::*;
use crate::config::Config;

fn library_names() -> Vec<String> {
    Config::default().project.library_names
}

#[test]
fn plain_path_is_application() {
    assert_eq!(
        ProjectType::classify(Path::new("/home/dev/storefront"), &library_names()),
        ProjectType::Application
    );
}

#[test]
fn each_known_library_name_is_shared_library() {
    for name in library_names() {
        let root = Path::new("/home/dev").join(&name);
        assert_eq!(
            ProjectType::classify(&root, &library_names()),
            ProjectType::SharedLibrary,
            "{name} should classify as shared-library"
        );
    }
}

#[test]
fn substring_inside_segment_matches() {
    assert_eq!(
        ProjectType::classify(Path::new("/home/x/opal-database-test"), &library_names()),
        ProjectType::SharedLibrary
    );
    assert_eq!(
        ProjectType::classify(
            Path::new("/home/x/my-opal-database-fork"),
            &library_names()
        ),
        ProjectType::SharedLibrary
    );
}

#[test]
fn library_name_in_ancestor_matches() {
    assert_eq!(
        ProjectType::classify(
            Path::new("/work/opal-global-ui/packages/button"),
            &library_names()
        ),
        ProjectType::SharedLibrary
    );
}

#[test]
fn match_is_case_sensitive() {
    assert_eq!(
        ProjectType::classify(Path::new("/work/OPAL-DATABASE"), &library_names()),
        ProjectType::Application
    );
}

#[test]
fn no_library_names_means_application() {
    assert_eq!(
        ProjectType::classify(Path::new("/work/opal-database"), &[]),
        ProjectType::Application
    );
}

#[test]
fn display_uses_kebab_case_names() {
    assert_eq!(ProjectType::Application.to_string(), "application");
    assert_eq!(ProjectType::SharedLibrary.to_string(), "shared-library");
}
