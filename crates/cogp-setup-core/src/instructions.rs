//! Platform-specific install instructions for missing build tools.

/// Linux distribution family, as read from `/etc/os-release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinuxDistro {
    Debian,
    Fedora,
    Arch,
    Unknown,
}

/// Remediation text attached to a missing-prerequisite error.
#[must_use]
pub fn remediation_text() -> String {
    #[cfg(target_os = "linux")]
    let text = linux_instructions(detect_linux_distro());

    #[cfg(target_os = "macos")]
    let text = macos_instructions();

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    let text = generic_instructions();

    text
}

/// Detect the Linux distribution family.
#[must_use]
pub fn detect_linux_distro() -> LinuxDistro {
    match std::fs::read_to_string("/etc/os-release") {
        Ok(content) => classify_os_release(&content),
        Err(_) => LinuxDistro::Unknown,
    }
}

fn classify_os_release(content: &str) -> LinuxDistro {
    let content = content.to_lowercase();
    if content.contains("debian") || content.contains("ubuntu") || content.contains("mint") {
        LinuxDistro::Debian
    } else if content.contains("fedora")
        || content.contains("rhel")
        || content.contains("centos")
        || content.contains("rocky")
    {
        LinuxDistro::Fedora
    } else if content.contains("arch") || content.contains("manjaro") {
        LinuxDistro::Arch
    } else {
        LinuxDistro::Unknown
    }
}

fn linux_instructions(distro: LinuxDistro) -> String {
    let lines: &[&str] = match distro {
        LinuxDistro::Debian => &[
            "Install the build tools and run the installer again.",
            "Debian/Ubuntu:",
            "  sudo apt update",
            "  sudo apt install cmake build-essential",
        ],
        LinuxDistro::Fedora => &[
            "Install the build tools and run the installer again.",
            "Fedora/RHEL:",
            "  sudo dnf install cmake gcc-c++ make",
        ],
        LinuxDistro::Arch => &[
            "Install the build tools and run the installer again.",
            "Arch Linux:",
            "  sudo pacman -S --needed cmake base-devel",
        ],
        LinuxDistro::Unknown => &[
            "Install cmake and a C++ toolchain with your package manager:",
            "  Debian/Ubuntu: sudo apt install cmake build-essential",
            "  Fedora/RHEL:   sudo dnf install cmake gcc-c++ make",
            "  Arch Linux:    sudo pacman -S --needed cmake base-devel",
        ],
    };
    lines.join("\n")
}

#[cfg(target_os = "macos")]
fn macos_instructions() -> String {
    [
        "Install the build tools and run the installer again.",
        "macOS:",
        "  xcode-select --install",
        "  brew install cmake",
    ]
    .join("\n")
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn generic_instructions() -> String {
    "Install cmake and a C++ toolchain (compiler plus make or ninja), then run the installer again."
        .to_string()
}
