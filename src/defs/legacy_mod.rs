//! `mod.pw.toml`: the metadata file as it was documented before it covered
//! arbitrary files. Same shape as the metafile, different wording, so every
//! model here extends its metafile counterpart and only overrides text.

use schemars::json_schema;

use super::{
    DRAFT_07, DefsOptions,
    metafile::{CURSEFORGE_UPDATE, DOWNLOAD, METAFILE, MODRINTH_UPDATE, OPTION, UPDATE},
};
use crate::schema::{CatalogBuilder, FieldMetadata, ModelId};

/// Root model of a legacy `*.pw.toml` mod file.
pub const MOD: ModelId = ModelId::new("Mod");
const MOD_DOWNLOAD: ModelId = ModelId::new("Mod.Download");
const MOD_OPTION: ModelId = ModelId::new("Mod.Option");
const MOD_UPDATE: ModelId = ModelId::new("Mod.Update");
const MOD_CURSEFORGE_UPDATE: ModelId = ModelId::new("Mod.CurseForgeUpdate");
const MOD_MODRINTH_UPDATE: ModelId = ModelId::new("Mod.ModrinthUpdate");

fn text(description: &str) -> FieldMetadata {
    FieldMetadata::new().with_description(description)
}

pub(super) fn declare(builder: &mut CatalogBuilder, options: &DefsOptions) {
    builder
        .object_extending(
            MOD,
            METAFILE,
            json_schema!({
                "$id": options.schema_id("mod.json"),
                "$schema": DRAFT_07,
                "title": "mod.pw.toml",
                "description": "A metadata file which references an external file from a URL. This allows for side-only mods, optional mods and stores metadata to allow finding updates from Modrinth and CurseForge. The \"mod\" terminology is used a lot here, but this should work for any file.",
                "examples": [options.examples.metafile],
            }),
        )
        .declare(MOD, "name", text("The name of the mod, which can be displayed in user interfaces to identify the mod. It does not need to be unique between mods, although this may cause confusion."))
        .declare(MOD, "filename", text("The destination path of the mod file, relative to this file."))
        .declare(MOD, "side", text("The side on which this mod should be installed.\n\nA physical Minecraft side. Server applies to the dedicated server, client applies to the client (and integrated server), and both applies to every installation."))
        .declare(MOD, "download", FieldMetadata::reference(MOD_DOWNLOAD))
        .declare(MOD, "option", FieldMetadata::reference(MOD_OPTION))
        .declare(MOD, "update", FieldMetadata::reference(MOD_UPDATE));

    builder
        .object_extending(
            MOD_DOWNLOAD,
            DOWNLOAD,
            json_schema!({
                "description": "Information about how to download this mod.",
            }),
        )
        .declare(MOD_DOWNLOAD, "url", text("The URL to download the mod from."));

    builder
        .object_extending(
            MOD_OPTION,
            OPTION,
            json_schema!({
                "description": "Information about the optional state of this mod. When excluded, this indicates that the mod is not optional.",
            }),
        )
        .declare(MOD_OPTION, "optional", text("Whether or not the mod is optional. This can be set to false if you want to keep the description but make the mod required."))
        .declare(MOD_OPTION, "description", text("A description displayed to the user when they select optional mods. This should explain why or why not the user should enable the mod."))
        .declare(MOD_OPTION, "default", text("If true, the mod will be enabled by default. If false, the mod will be disabled by default. If a pack format does not support optional mods but it does support disabling mods, the mod will be disabled if it defaults to being disabled."));

    builder
        .object_extending(
            MOD_UPDATE,
            UPDATE,
            json_schema!({
                "description": "Information about how to update the download details of this mod with tools.\n\nIf this object does not exist or there are no defined update sources, the mod will not be automatically updated.\n\nIf there are multiple defined update sources, one of them will be chosen. The source that is chosen is not defined, so it is therefore dependent on the implementation of the tool (may not be deterministic, so do not rely on one source being chosen over another).",
                "additionalProperties": {
                    "type": "object",
                    "description": "Implementations are free to support other update sources, but it would be beneficial to document and standardise these.",
                },
            }),
        )
        .declare(MOD_UPDATE, "curseforge", FieldMetadata::reference(MOD_CURSEFORGE_UPDATE))
        .declare(MOD_UPDATE, "modrinth", FieldMetadata::reference(MOD_MODRINTH_UPDATE));

    builder
        .object_extending(
            MOD_CURSEFORGE_UPDATE,
            CURSEFORGE_UPDATE,
            json_schema!({
                "description": "An update source for updating mods downloaded from CurseForge.",
            }),
        )
        .declare(MOD_CURSEFORGE_UPDATE, "project-id", text("An integer representing the unique project ID of this mod. Updating will retrieve the latest file for this project ID that is valid (correct Minecraft version, release channel, modloader, etc.)."))
        .declare(MOD_CURSEFORGE_UPDATE, "file-id", text("An integer representing the unique file ID of this mod file. This can be used if more metadata needs to be obtained relating to the mod."));

    builder
        .object_extending(
            MOD_MODRINTH_UPDATE,
            MODRINTH_UPDATE,
            json_schema!({
                "description": "An update source for updating mods downloaded from Modrinth.",
            }),
        )
        .declare(MOD_MODRINTH_UPDATE, "mod-id", text("A string representing the unique mod ID of this mod. Updating will retrieve the latest file for this project ID that is valid (correct Minecraft version, release channel, modloader, etc.)."))
        .declare(MOD_MODRINTH_UPDATE, "version", text("A string representing the unique version ID of this file. This can be used if more metadata needs to be obtained relating to the mod."));
}
