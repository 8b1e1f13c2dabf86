/// Standard Unix exit codes for the bmstore CLI.
///
/// These codes follow the BSD `sysexits.h` convention.
///
/// Successful termination
pub const SUCCESS: i32 = 0;

/// Command line usage error - invalid arguments, missing required parameters, etc.
pub const USAGE: i32 = 64;

/// Input data rejected, e.g. a relative url or an empty title
pub const DATAERR: i32 = 65;

/// Referenced bookmark or folder does not exist
pub const NOINPUT: i32 = 66;

/// Internal failure, e.g. the database could not be opened
pub const SOFTWARE: i32 = 70;

/// Output file could not be created
pub const CANTCREAT: i32 = 73;

/// Input/output error
pub const IOERR: i32 = 74;

/// Folder name already taken
pub const DUP: i32 = 75;

/// Operation was cancelled by user (typically Ctrl+C)
pub const CANCEL: i32 = 130;
