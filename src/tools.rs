//! External tool detection.

use std::path::PathBuf;

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name or path the tool was looked up by.
    pub name: String,
    /// Whether the tool was found.
    pub available: bool,
    /// Resolved path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Look a tool up on `PATH`, or at the given path when it contains a separator.
///
/// Generated scripts may run on another machine, so a missing tool is only
/// reported, never treated as an error.
pub fn check_tool(name: &str) -> ToolInfo {
    match which::which(name) {
        Ok(path) => ToolInfo {
            name: name.to_string(),
            available: true,
            path: Some(path),
        },
        Err(_) => ToolInfo {
            name: name.to_string(),
            available: false,
            path: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_tool_not_found() {
        let info = check_tool("nonexistent_tool_12345");
        assert!(!info.available);
        assert!(info.path.is_none());
        assert_eq!(info.name, "nonexistent_tool_12345");
    }

    #[cfg(unix)]
    #[test]
    fn test_check_tool_by_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("fake-ffmpeg");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let info = check_tool(tool.to_str().unwrap());
        assert!(info.available);
        assert!(info.path.is_some());
    }
}
