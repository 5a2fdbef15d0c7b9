use schemars::json_schema;

use super::{
    DRAFT_07, DefsOptions,
    shared::{HASH, HASH_FORMAT, PACKWIZ_URL, PATH},
};
use crate::schema::{CatalogBuilder, FieldMetadata, ModelId, SpecGenExtension};

/// Root model of a `*.pw.toml` metadata file.
pub const METAFILE: ModelId = ModelId::new("Metafile");
/// The `[download]` table.
pub const DOWNLOAD: ModelId = ModelId::new("Metafile.Download");
/// The `[option]` table.
pub const OPTION: ModelId = ModelId::new("Metafile.Option");
/// The `[update]` table.
pub const UPDATE: ModelId = ModelId::new("Metafile.Update");
/// The `[update.curseforge]` table.
pub const CURSEFORGE_UPDATE: ModelId = ModelId::new("Metafile.CurseForgeUpdate");
/// The `[update.modrinth]` table.
pub const MODRINTH_UPDATE: ModelId = ModelId::new("Metafile.ModrinthUpdate");

/// Sides a file can be installed on.
pub const SIDES: [&str; 3] = ["both", "client", "server"];

const EXAMPLE_DOC: &str = "See the full example: `borderless-mining.pw.toml` in [the example pack on GitHub](https://github.com/packwiz/packwiz-example-pack/blob/v1/mods/borderless-mining.pw.toml).";

pub(super) fn declare(builder: &mut CatalogBuilder, options: &DefsOptions) {
    builder
        .object(
            METAFILE,
            json_schema!({
                "$id": options.schema_id("meta.json"),
                "$schema": DRAFT_07,
                "title": "meta.pw.toml",
                "description": "A metadata file which references a file from an external server. This allows for sided mods, optional mods and stores metadata to allow finding updates from Modrinth and CurseForge. Mods are typically referenced externally, but any type of file is supported, including resource packs and shader packs.",
                "examples": [options.examples.metafile],
                "x-packwiz-spec-gen": SpecGenExtension::example_doc(EXAMPLE_DOC).to_value(),
            }),
        )
        .declare(
            METAFILE,
            "name",
            FieldMetadata::string("A human-readable name for the file, which can be displayed in user interfaces. It does not need to be unique between files, although this may cause confusion.")
                .examples(["Borderless Mining"])
                .required(),
        )
        .declare(
            METAFILE,
            "filename",
            FieldMetadata::reference(PATH)
                .with_description("The destination path of the referenced file, relative to this file.")
                .examples(["borderless-mining-1.1.5+1.19.jar"])
                .required(),
        )
        .declare(
            METAFILE,
            "side",
            FieldMetadata::enumeration(
                SIDES,
                "The side on which this file should be installed.\n\nA physical Minecraft side. Server applies to the dedicated server, client applies to the client (and integrated server), and both applies to every installation.",
            )
            .default_value("both"),
        )
        .declare(METAFILE, "download", FieldMetadata::reference(DOWNLOAD).required())
        .declare(METAFILE, "option", FieldMetadata::reference(OPTION))
        .declare(METAFILE, "update", FieldMetadata::reference(UPDATE));

    builder
        .object(
            DOWNLOAD,
            json_schema!({
                "description": "Information about how to download the external file.",
            }),
        )
        .declare(
            DOWNLOAD,
            "url",
            FieldMetadata::reference(PACKWIZ_URL)
                .with_description("The URL to download the file from.")
                .required(),
        )
        .declare(
            DOWNLOAD,
            "hash",
            FieldMetadata::reference(HASH)
                .with_description("The hash of the specified file, as a string.")
                .required(),
        )
        .declare(
            DOWNLOAD,
            "hash-format",
            FieldMetadata::reference(HASH_FORMAT)
                .with_description("The hash format for the hash of the specified file.")
                .required(),
        );

    builder
        .object(
            OPTION,
            json_schema!({
                "description": "Information about the optional state of this file. When excluded, this indicates that the file is not optional.",
            }),
        )
        .declare(
            OPTION,
            "optional",
            FieldMetadata::boolean("Whether or not the file is optional. This can be set to false if you want to keep the description but make the file required.")
                .default_value(false)
                .required(),
        )
        .declare(
            OPTION,
            "description",
            FieldMetadata::string("A description displayed to the user when they select options. This should explain why or why not the user should enable the file."),
        )
        .declare(
            OPTION,
            "default",
            FieldMetadata::boolean("If true, the file will be enabled by default. If false, the file will be disabled by default. If a pack format does not support optional files but it does support disabling them, the file will be disabled if it defaults to being disabled.")
                .default_value(false),
        );

    // Which source wins when several are present is left to the tool.
    builder
        .object(
            UPDATE,
            json_schema!({
                "description": "Information about how to update the download details of this metadata file with tools.\n\nIf this object does not exist or there are no defined update sources, the file will not be automatically updated.\n\nIf there are multiple defined update sources, one of them will be chosen. The source that is chosen is not defined, so it is therefore dependent on the implementation of the tool (may not be deterministic, so do not rely on one source being chosen over another).",
                "additionalProperties": {
                    "type": "object",
                    "title": "Other update sources",
                    "description": "Implementations are free to support other update sources, but it would be beneficial to document and standardise these.",
                },
            }),
        )
        .declare(UPDATE, "curseforge", FieldMetadata::reference(CURSEFORGE_UPDATE))
        .declare(UPDATE, "modrinth", FieldMetadata::reference(MODRINTH_UPDATE));

    builder
        .object(
            CURSEFORGE_UPDATE,
            json_schema!({
                "description": "An update source for updating files downloaded from CurseForge.",
            }),
        )
        .declare(
            CURSEFORGE_UPDATE,
            "project-id",
            FieldMetadata::number("An integer representing the unique project ID of this file. Updating will retrieve the latest file for this project ID that is valid (correct Minecraft version, release channel, modloader, etc.).")
                .required()
                .examples([327154]),
        )
        .declare(
            CURSEFORGE_UPDATE,
            "file-id",
            FieldMetadata::number("An integer representing the unique file ID of this file. This can be used if more metadata needs to be obtained relating to the file, or for CurseForge pack exports.")
                .required()
                .examples([3643025]),
        );

    builder
        .object(
            MODRINTH_UPDATE,
            json_schema!({
                "description": "An update source for updating files downloaded from Modrinth.",
            }),
        )
        .declare(
            MODRINTH_UPDATE,
            "mod-id",
            FieldMetadata::string("A string representing the unique project ID of this file. Updating will retrieve the latest file for this project ID that is valid (correct Minecraft version, release channel, modloader, etc.).")
                .required()
                .examples(["kYq5qkSL"]),
        )
        .declare(
            MODRINTH_UPDATE,
            "version",
            FieldMetadata::string("A string representing the unique version ID of this file. This can be used if more metadata needs to be obtained relating to the file.")
                .required()
                .examples(["gqoXgtxO"]),
        );
}
