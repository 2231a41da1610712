/// Well-known Windows install directories, relative to a drive root, used to infer an
/// installer's [`Scope`](crate::installer::Scope) from an install path.
pub struct RelativeDir;

impl RelativeDir {
    pub const APP_DATA: &'static str = "AppData";
    pub const LOCAL_APP_DATA: &'static str = "AppData\\Local";
    pub const PROGRAM_FILES_64: &'static str = "Program Files";
    pub const PROGRAM_FILES_32: &'static str = "Program Files (x86)";
    pub const COMMON_FILES_64: &'static str = "Common Files";
    pub const COMMON_FILES_32: &'static str = "Common Files (x86)";
    pub const PROGRAM_DATA: &'static str = "ProgramData";
    pub const WINDOWS_DIR: &'static str = "Windows";
    pub const SYSTEM_ROOT: &'static str = "SystemRoot";
}
