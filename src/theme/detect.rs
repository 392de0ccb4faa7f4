//! 系统主题检测

/// 检测系统是否为深色模式
///
/// macOS 读取 `AppleInterfaceStyle`；其他平台默认深色，终端大多是深色背景。
#[cfg(target_os = "macos")]
pub fn detect_system_theme() -> bool {
    use std::process::Command;

    // 键不存在时命令失败，说明是浅色模式
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            output.status.success()
                && String::from_utf8_lossy(&output.stdout)
                    .trim()
                    .eq_ignore_ascii_case("dark")
        })
        .unwrap_or(false)
}

#[cfg(not(target_os = "macos"))]
pub fn detect_system_theme() -> bool {
    true
}
