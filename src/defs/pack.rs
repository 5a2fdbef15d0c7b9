use schemars::json_schema;

use super::{
    DRAFT_07, DefsOptions,
    shared::{HASH, HASH_FORMAT, PACK_FORMAT, PATH},
};
use crate::schema::{CatalogBuilder, FieldMetadata, ModelId};

/// Root model of `pack.toml`.
pub const PACK: ModelId = ModelId::new("Pack");
/// The `[index]` table of `pack.toml`.
pub const INDEX_REF: ModelId = ModelId::new("Pack.IndexRef");
/// The `[versions]` table of `pack.toml`.
pub const COMPONENT_VERSIONS: ModelId = ModelId::new("Pack.ComponentVersions");

pub(super) fn declare(builder: &mut CatalogBuilder, options: &DefsOptions) {
    builder
        .object(
            PACK,
            json_schema!({
                "$id": options.schema_id("pack.json"),
                "$schema": DRAFT_07,
                "title": "pack.toml",
                "description": "The main modpack file for a packwiz modpack.\nThis is the first file loaded, to allow the modpack downloader to download all the files in the modpack.",
                "examples": [options.examples.pack],
            }),
        )
        .declare(PACK, "pack-format", FieldMetadata::reference(PACK_FORMAT).required())
        .declare(
            PACK,
            "name",
            FieldMetadata::string("The name of the modpack. This can be displayed in user interfaces to identify the pack, and it does not need to be unique between packs.")
                .required(),
        )
        .declare(
            PACK,
            "author",
            FieldMetadata::string("The author(s) of the modpack. This is output when exporting to the CurseForge pack format, and can be displayed in user interfaces."),
        )
        .declare(
            PACK,
            "version",
            FieldMetadata::string("The version of the modpack. This is output when exporting to the CurseForge pack format, but is not currently used elsewhere by the tools or installer. It must not be used for determining if the modpack is outdated."),
        )
        .declare(
            PACK,
            "description",
            FieldMetadata::string("A short description of the modpack. This is output when exporting to the Modrinth pack format, but is not currently used elsewhere by the tools or installer."),
        )
        .declare(
            PACK,
            "index",
            FieldMetadata::reference(INDEX_REF)
                .with_description("Information about the index file in this modpack.")
                .required(),
        )
        .declare(
            PACK,
            "versions",
            FieldMetadata::reference(COMPONENT_VERSIONS)
                .with_description("The versions of components used by this modpack - usually Minecraft and the mod loader this pack uses. The existence of a component implies that it should be installed. These values can also be used by tools to determine which versions of mods should be installed.")
                .required(),
        );

    builder
        .object(INDEX_REF, json_schema!({}))
        .declare(
            INDEX_REF,
            "file",
            FieldMetadata::reference(PATH)
                .with_description("The path to the file that contains the index.")
                .required(),
        )
        .declare(
            INDEX_REF,
            "hash",
            FieldMetadata::reference(HASH)
                .with_description("The hash of the index file, as a string.")
                .required(),
        )
        .declare(
            INDEX_REF,
            "hash-format",
            FieldMetadata::reference(HASH_FORMAT)
                .with_description("The hash format for the hash of the index file.")
                .required(),
        );

    builder
        .object(
            COMPONENT_VERSIONS,
            json_schema!({
                "additionalProperties": { "type": "string" },
            }),
        )
        .declare(
            COMPONENT_VERSIONS,
            "minecraft",
            FieldMetadata::string("The version of Minecraft used by this modpack. This should be in the format used by the version.json files.")
                .required()
                .examples(["1.17.1", "16w02a"]),
        )
        .declare(
            COMPONENT_VERSIONS,
            "fabric",
            FieldMetadata::string("The version of Fabric loader used by this modpack.")
                .examples(["0.12.1"]),
        )
        .declare(
            COMPONENT_VERSIONS,
            "forge",
            FieldMetadata::string("The version of Forge used by this modpack. This version must not include the Minecraft version as a prefix.")
                .examples(["14.23.5.2838"]),
        )
        .declare(
            COMPONENT_VERSIONS,
            "liteloader",
            FieldMetadata::string("The version of Liteloader used by this modpack.")
                .examples(["1.12.2-SNAPSHOT"]),
        )
        .declare(
            COMPONENT_VERSIONS,
            "quilt",
            FieldMetadata::string("The version of Quilt loader used by this modpack.")
                .examples(["0.12.1"]),
        );
}
