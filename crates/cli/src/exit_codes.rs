//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Description                                        |
//! |------|----------------------------------------------------|
//! | 0    | Success                                            |
//! | 1    | General error (unspecified)                        |
//! | 2    | CLI usage error (bad args)                         |
//! | 3    | Search exhausted: attempt ceiling hit, no schedule |
//! | 4    | I/O error writing the output file                  |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments.
pub const EXIT_USAGE: u8 = 2;

/// The search hit its attempt ceiling without finding a schedule whose
/// commissions fit the band. Nothing was exported.
pub const EXIT_SEARCH_EXHAUSTED: u8 = 3;

/// Could not write the output workbook.
pub const EXIT_IO_ERROR: u8 = 4;
