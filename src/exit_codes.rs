//! Exit code constants for the goscaffold CLI.
//!
//! - 0: Success
//! - 1: User error (bad name, unknown project type, bad settings file)
//! - 2: Template failure (malformed or under-specified template)
//! - 3: Filesystem failure (directory or file I/O)
//! - 4: Git failure (only reachable from standalone git helpers; version-control
//!   setup during generation is best-effort and never changes the exit code)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown project type, or invalid settings.
pub const USER_ERROR: i32 = 1;

/// Template failure: a blueprint body could not be parsed or executed.
pub const TEMPLATE_FAILURE: i32 = 2;

/// Filesystem failure: directory creation, file write, or permission change.
pub const FILESYSTEM_FAILURE: i32 = 3;

/// Git operation failure.
pub const GIT_FAILURE: i32 = 4;

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
            GIT_FAILURE,
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
    fn only_success_is_zero() {
        assert_eq!(SUCCESS, 0);
        for code in [USER_ERROR, TEMPLATE_FAILURE, FILESYSTEM_FAILURE, GIT_FAILURE] {
            assert!(code > 0);
        }
    }
}
