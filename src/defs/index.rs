use schemars::json_schema;

use super::{
    DRAFT_07, DefsOptions,
    shared::{HASH, HASH_FORMAT, PATH},
};
use crate::schema::{CatalogBuilder, FieldMetadata, ModelId};

/// Root model of `index.toml`.
pub const INDEX: ModelId = ModelId::new("Index");
/// One `[[files]]` entry of the index.
pub const INDEX_FILE: ModelId = ModelId::new("Index.IndexFile");

pub(super) fn declare(builder: &mut CatalogBuilder, options: &DefsOptions) {
    builder
        .object(
            INDEX,
            json_schema!({
                "$id": options.schema_id("index.json"),
                "$schema": DRAFT_07,
                "title": "index.toml",
                "description": "The index file of the modpack, storing references to every file to be downloaded in the pack.",
                "examples": [options.examples.index],
            }),
        )
        .declare(
            INDEX,
            "files",
            FieldMetadata::array_of(
                INDEX_FILE,
                "The files listed in this index. If it is not defined, defaults to an empty list.",
            ),
        )
        .declare(
            INDEX,
            "hash-format",
            FieldMetadata::reference(HASH_FORMAT)
                .with_description("The default hash format for every file in the index."),
        )
        .declare(INDEX, "hash-format", FieldMetadata::new().required())
        .declare(INDEX, "hash-format", FieldMetadata::new().default_value("sha256"));

    builder
        .object(
            INDEX_FILE,
            json_schema!({
                "description": "A single file in the index, to be downloaded by the modpack installer.",
            }),
        )
        .declare(
            INDEX_FILE,
            "file",
            FieldMetadata::reference(PATH)
                .with_description("The path to the file to be downloaded, relative to this index file.")
                .required(),
        )
        .declare(
            INDEX_FILE,
            "hash",
            FieldMetadata::reference(HASH)
                .with_description("The hash of the specified file, as a string.")
                .required(),
        )
        .declare(
            INDEX_FILE,
            "hash-format",
            FieldMetadata::reference(HASH_FORMAT)
                .with_description("The hash format for the hash of the specified file. Defaults to the hash format specified in the index - ideally remove this value if it is equal to the hash format for the index to save space."),
        )
        .declare(
            INDEX_FILE,
            "metafile",
            FieldMetadata::boolean("True when this entry points to a .toml metadata file, which references a file outside the pack.")
                .default_value(false),
        )
        .declare(
            INDEX_FILE,
            "preserve",
            FieldMetadata::boolean("When this is set to true, the file is not overwritten if it already exists, to preserve changes made by a user.")
                .default_value(false),
        )
        .declare(
            INDEX_FILE,
            "alias",
            FieldMetadata::string("The name with which this file should be downloaded, instead of the filename specified in the path. Not compatible with metafile, and may not be very well supported."),
        );
}
