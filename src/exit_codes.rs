//! Exit code constants for the amur CLI.
//!
//! - 0: Success
//! - 1: User error (bad name, bad config, unknown feature)
//! - 2: Template failure (unresolved placeholder, manifest conflict, path collision)
//! - 3: Filesystem failure while materializing the output tree
//! - 4: Post-generation collaborator failure (install, git init)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid project name, invalid config.
pub const USER_ERROR: i32 = 1;

/// Template failure: the template store and context disagree.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Filesystem failure while writing the generated project.
pub const FILESYSTEM_FAILURE: i32 = 3;

/// Dependency installation or version-control initialization failed.
pub const COLLABORATOR_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            TEMPLATE_FAILURE,
            FILESYSTEM_FAILURE,
            COLLABORATOR_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
