//! Platform strings and the compatibility predicates packagers rely on.
//!
//! A platform string has the form `<os>[-<arch>]`, e.g. `osx-aarch_64`,
//! `linux_musl-x86_64` or `windows-x86_64`. An empty string denotes a
//! platform-independent artifact.

use std::fmt;

/// Operating system component of a platform string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Os {
    /// macOS
    Osx,
    /// Linux with glibc
    Linux,
    /// Linux with musl (Alpine)
    LinuxMusl,
    /// Windows
    Windows,
    /// FreeBSD
    FreeBsd,
    /// OpenBSD
    OpenBsd,
    /// NetBSD
    NetBsd,
    /// Solaris / illumos
    SunOs,
    /// IBM AIX
    Aix,
    /// HP-UX
    HpUx,
    /// Anything else
    Unknown,
}

impl Os {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "osx" | "macos" | "mac" | "darwin" => Os::Osx,
            "linux" | "linux_gnu" => Os::Linux,
            "linux_musl" | "alpine" | "alpine_linux" => Os::LinuxMusl,
            "windows" | "win" => Os::Windows,
            "freebsd" => Os::FreeBsd,
            "openbsd" => Os::OpenBsd,
            "netbsd" => Os::NetBsd,
            "sunos" | "solaris" | "illumos" => Os::SunOs,
            "aix" => Os::Aix,
            "hpux" | "hp-ux" => Os::HpUx,
            _ => Os::Unknown,
        }
    }

    /// Canonical name used when formatting platforms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Os::Osx => "osx",
            Os::Linux => "linux",
            Os::LinuxMusl => "linux_musl",
            Os::Windows => "windows",
            Os::FreeBsd => "freebsd",
            Os::OpenBsd => "openbsd",
            Os::NetBsd => "netbsd",
            Os::SunOs => "sunos",
            Os::Aix => "aix",
            Os::HpUx => "hpux",
            Os::Unknown => "unknown",
        }
    }
}

/// CPU architecture component of a platform string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86_32,
    /// AArch64 / ARM64 (64-bit)
    Aarch64,
    /// ARM (32-bit)
    Arm32,
    /// POWER little endian (64-bit)
    Ppc64le,
    /// IBM Z (64-bit)
    S390x,
    /// RISC-V (64-bit)
    Riscv64,
    /// Anything else
    Unknown,
}

impl Arch {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "x86_64" | "amd64" | "x64" => Arch::X86_64,
            "x86_32" | "x86" | "i386" | "i686" => Arch::X86_32,
            "aarch_64" | "aarch64" | "arm64" => Arch::Aarch64,
            "arm_32" | "arm" | "armhf" | "armel" => Arch::Arm32,
            "ppcle_64" | "ppc64le" => Arch::Ppc64le,
            "s390_64" | "s390x" => Arch::S390x,
            "riscv64" | "riscv_64" => Arch::Riscv64,
            _ => Arch::Unknown,
        }
    }

    /// Canonical name used when formatting platforms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86_32 => "x86_32",
            Arch::Aarch64 => "aarch_64",
            Arch::Arm32 => "arm_32",
            Arch::Ppc64le => "ppcle_64",
            Arch::S390x => "s390_64",
            Arch::Riscv64 => "riscv64",
            Arch::Unknown => "unknown",
        }
    }
}

/// A parsed platform string.
///
/// # Examples
///
/// ```
/// use release_model::model::{Arch, Os, Platform};
///
/// let platform = Platform::parse("macos-arm64");
/// assert_eq!(platform.os(), Os::Osx);
/// assert_eq!(platform.arch(), Some(Arch::Aarch64));
/// assert_eq!(platform.to_string(), "osx-aarch_64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Platform {
    os: Os,
    arch: Option<Arch>,
}

impl Platform {
    /// Parses `<os>[-<arch>]`. Unrecognized parts map to `Unknown`.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.split_once('-') {
            Some((os, arch)) => Self {
                os: Os::parse(os),
                arch: Some(Arch::parse(arch)),
            },
            None => Self {
                os: Os::parse(value),
                arch: None,
            },
        }
    }

    /// Describes the host this process runs on.
    pub fn current() -> Self {
        let os = match std::env::consts::OS {
            "macos" => Os::Osx,
            "linux" if cfg!(target_env = "musl") => Os::LinuxMusl,
            other => Os::parse(other),
        };
        Self {
            os,
            arch: Some(Arch::parse(std::env::consts::ARCH)),
        }
    }

    /// Operating system.
    pub fn os(&self) -> Os {
        self.os
    }

    /// Architecture, if the string carried one.
    pub fn arch(&self) -> Option<Arch> {
        self.arch
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arch {
            Some(arch) => write!(f, "{}-{}", self.os.as_str(), arch.as_str()),
            None => f.write_str(self.os.as_str()),
        }
    }
}

/// macOS of any architecture.
pub fn is_mac(platform: &str) -> bool {
    Platform::parse(platform).os == Os::Osx
}

/// Windows of any architecture.
pub fn is_windows(platform: &str) -> bool {
    Platform::parse(platform).os == Os::Windows
}

/// Linux, glibc or musl.
pub fn is_linux(platform: &str) -> bool {
    matches!(Platform::parse(platform).os, Os::Linux | Os::LinuxMusl)
}

/// Linux built against musl.
pub fn is_alpine_linux(platform: &str) -> bool {
    Platform::parse(platform).os == Os::LinuxMusl
}

/// 32 or 64-bit Intel.
pub fn is_intel(platform: &str) -> bool {
    matches!(
        Platform::parse(platform).arch,
        Some(Arch::X86_64 | Arch::X86_32)
    )
}

/// 64-bit Intel only.
pub fn is_x86_64(platform: &str) -> bool {
    Platform::parse(platform).arch == Some(Arch::X86_64)
}

/// 32 or 64-bit ARM.
pub fn is_arm(platform: &str) -> bool {
    matches!(
        Platform::parse(platform).arch,
        Some(Arch::Aarch64 | Arch::Arm32)
    )
}

/// Any Unix flavour, macOS included.
pub fn is_unix(platform: &str) -> bool {
    matches!(
        Platform::parse(platform).os,
        Os::Osx
            | Os::Linux
            | Os::LinuxMusl
            | Os::FreeBsd
            | Os::OpenBsd
            | Os::NetBsd
            | Os::SunOs
            | Os::Aix
            | Os::HpUx
    )
}

/// Whether `actual` satisfies `expected`.
///
/// Equal platforms are compatible. An `expected` value without an architecture
/// accepts any architecture of the same OS.
pub fn is_compatible(expected: &str, actual: &str) -> bool {
    if expected.trim().is_empty() {
        return true;
    }
    let expected = Platform::parse(expected);
    let actual = Platform::parse(actual);
    if expected.os != actual.os {
        return false;
    }
    match expected.arch {
        None => true,
        Some(arch) => actual.arch == Some(arch),
    }
}
