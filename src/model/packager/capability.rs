//! File extensions packagers accept, keyed by distribution type.

use crate::model::DistributionType;
use std::collections::{BTreeMap, BTreeSet};

/// Accepted file extensions per supported distribution type.
///
/// A type missing from the table is unsupported. `FLAT_BINARY` entries carry
/// an empty set since flat binaries are matched without extensions.
pub type CapabilityTable = BTreeMap<DistributionType, BTreeSet<&'static str>>;

pub const ZIP: &str = ".zip";
pub const TAR: &str = ".tar";
pub const TAR_GZ: &str = ".tar.gz";
pub const TGZ: &str = ".tgz";
pub const TAR_XZ: &str = ".tar.xz";
pub const TXZ: &str = ".txz";
pub const TAR_BZ2: &str = ".tar.bz2";
pub const TBZ2: &str = ".tbz2";
pub const JAR: &str = ".jar";
pub const EXE: &str = ".exe";
pub const MSI: &str = ".msi";
pub const MSIX: &str = ".msix";
pub const DMG: &str = ".dmg";
pub const PKG: &str = ".pkg";
pub const DEB: &str = ".deb";
pub const RPM: &str = ".rpm";

/// Every archive format an assembler can produce.
pub const ARCHIVES: &[&str] = &[ZIP, TAR, TAR_GZ, TGZ, TAR_XZ, TXZ, TAR_BZ2, TBZ2];

/// Entry for `FLAT_BINARY`, which matches without extensions.
pub const FLAT: &[&str] = &[];

/// Tar-based archive formats.
pub const TARBALLS: &[&str] = &[TAR, TAR_GZ, TGZ, TAR_XZ, TXZ, TAR_BZ2, TBZ2];

/// Builds a capability table from `(type, extensions)` pairs.
pub fn table(entries: &[(DistributionType, &[&'static str])]) -> CapabilityTable {
    entries
        .iter()
        .map(|(distribution_type, extensions)| {
            (*distribution_type, extensions.iter().copied().collect())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sorts_extensions() {
        const INSTALLERS: &[&str] = &[MSI, EXE];
        let table = table(&[(DistributionType::NativePackage, INSTALLERS)]);
        let extensions: Vec<_> = table[&DistributionType::NativePackage]
            .iter()
            .copied()
            .collect();
        assert_eq!(extensions, vec![EXE, MSI]);
    }

    #[test]
    fn flat_binary_entry_may_be_empty() {
        let table = table(&[(DistributionType::FlatBinary, FLAT)]);
        assert!(table.contains_key(&DistributionType::FlatBinary));
        assert!(table[&DistributionType::FlatBinary].is_empty());
    }
}
