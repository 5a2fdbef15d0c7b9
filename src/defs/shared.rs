//! Leaf models shared by several documents.

use schemars::json_schema;

use super::DefsOptions;
use crate::schema::{CatalogBuilder, ModelId, TaploExtension};

/// A file hash stored as a string.
pub const HASH: ModelId = ModelId::new("Hash");
/// The hash algorithm enumeration.
pub const HASH_FORMAT: ModelId = ModelId::new("HashFormat");
/// An absolute download URL.
pub const PACKWIZ_URL: ModelId = ModelId::new("PackwizURL");
/// A pack-relative path.
pub const PATH: ModelId = ModelId::new("Path");
/// The `pack-format` version string.
pub const PACK_FORMAT: ModelId = ModelId::new("PackFormat");

/// Relative path with forward slashes; bans characters NTFS rejects and
/// empty path components.
pub const PATH_PATTERN: &str = r#"^([^/\x00-\x1F\x7F"*/:<>?\\|]+/)*[^/\x00-\x1F\x7F"*/:<>?\\|]*$"#;

/// `packwiz:` followed by a semver 2.0.0 version.
pub const PACK_FORMAT_PATTERN: &str = r"^packwiz:(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

/// Value assumed for packs written before `pack-format` existed.
pub const LEGACY_PACK_FORMAT: &str = "packwiz:1.0.0";

/// Hash algorithms every implementation must support.
pub const HASH_FORMATS: [&str; 5] = ["sha256", "sha512", "sha1", "md5", "murmur2"];

pub(super) fn declare(builder: &mut CatalogBuilder, options: &DefsOptions) {
    builder
        .fixed(
            HASH,
            json_schema!({
                "type": "string",
                "description": "Binary hashes should be stored as hexadecimal, and case should be ignored during parsing. Numeric hashes (e.g. Murmur2) should still be stored as a string, to ensure the value is preserved correctly.",
                "examples": ["08f98e28057a0fbdb288c947b7871def4b18b176"],
            }),
        )
        .fixed(
            HASH_FORMAT,
            json_schema!({
                "type": "string",
                "description": "The hash algorithm used to determine if a file is valid. All functions listed must be supported by tools implementing the packwiz pack format.",
                "enum": HASH_FORMATS,
                "x-taplo": TaploExtension::enum_docs([
                    Some("The SHA2-256 hashing standard. Used by default for metadata files."),
                    Some("The SHA2-512 hashing standard."),
                    Some("The SHA1 hashing standard."),
                    Some("The MD5 hashing standard."),
                    Some("The CurseForge variant of MurmurHash2: MurmurHash2 32-bit hashing standard (seed 1) with some characters removed before applying the hash (decimal bytes 9, 10, 13, 32), stored as an unsigned integer.\n\nIn Java, use Integer.parseUnsignedInt to parse this value."),
                ])
                .to_value(),
            }),
        )
        .fixed(
            PACKWIZ_URL,
            json_schema!({
                "type": "string",
                "description": "An absolute URI compliant with RFC 3986. Implementations may need to be more lenient in accepting reserved characters in paths due to historical implementation bugs. Only the HTTP/HTTPS protocols must be supported, other protocols should not be used.",
                "format": "uri",
            }),
        )
        .fixed(
            PATH,
            json_schema!({
                "type": "string",
                "description": "A relative path using forward slashes. Must not reference a file outside the pack root, and should not include characters or filenames restricted on common operating systems.\n\nImplementations must support special characters including those that are percent-encoded in URLs, such as spaces and square brackets. Implementations must guard against path traversal attacks and manually validate paths.",
                "pattern": PATH_PATTERN,
            }),
        )
        .fixed(PACK_FORMAT, pack_format(options));
}

fn pack_format(options: &DefsOptions) -> schemars::Schema {
    let description = format!(
        "A version string identifying the pack format and version of it. Currently, this pack format uses version {version}.
If it is not defined, default to \"{LEGACY_PACK_FORMAT}\" for backwards-compatibility with packs created before this field was added.

If it is defined:
- All consumers should fail to load the modpack if it does not begin with \"packwiz:\"
- All consumers should fail to load the modpack if the latter section is not valid semver as defined in https://semver.org/spec/v2.0.0.html
- All consumers should fail to load the modpack if the major version is greater than the version they support
- Consumers can suggest updating themselves if the minor version is greater than the version they implement
- Pack tools should suggest and support migration when they support a version newer than this field",
        version = options.format_version,
    );

    if options.strict {
        json_schema!({
            "type": "string",
            "description": description,
            "const": format!("packwiz:{}", options.format_version),
        })
    } else {
        json_schema!({
            "type": "string",
            "description": description,
            "default": LEGACY_PACK_FORMAT,
            "pattern": PACK_FORMAT_PATTERN,
        })
    }
}
