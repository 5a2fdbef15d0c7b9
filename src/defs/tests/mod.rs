//! Unit tests for defs module
//!
//! Tests the synthesized packwiz document schemas.

#![allow(clippy::unwrap_used)]

use regex::Regex;
use serde_json::{Value, json};

use crate::{
    defs::{
        self, DefsOptions, DocumentKind, ExampleDocuments, INDEX_FILE,
        shared::{HASH_FORMATS, LEGACY_PACK_FORMAT, PACK_FORMAT_PATTERN, PATH_PATTERN},
    },
    render::render_markdown,
};

fn schema(kind: DocumentKind) -> Value {
    defs::document_schema(kind, &DefsOptions::default())
        .unwrap()
        .as_value()
        .clone()
}

fn strict() -> DefsOptions {
    DefsOptions {
        strict: true,
        ..DefsOptions::default()
    }
}

#[test]
fn every_document_synthesizes_and_renders() {
    for options in [DefsOptions::default(), strict()] {
        for kind in DocumentKind::ALL {
            let schema = defs::document_schema(kind, &options).unwrap();
            let markdown = render_markdown(&schema).unwrap();

            assert!(!markdown.is_empty(), "{kind} rendered nothing");
        }
    }
}

#[test]
fn pack_required_fields() {
    let pack = schema(DocumentKind::Pack);

    assert_eq!(
        pack["required"],
        json!(["pack-format", "name", "index", "versions"])
    );
    assert_eq!(pack["title"], "pack.toml");
    assert_eq!(pack["type"], "object");
}

#[test]
fn pack_versions_allow_other_components() {
    let pack = schema(DocumentKind::Pack);
    let versions = &pack["properties"]["versions"];

    assert_eq!(versions["required"], json!(["minecraft"]));
    assert_eq!(versions["additionalProperties"], json!({ "type": "string" }));
    assert_eq!(
        versions["properties"]["minecraft"]["examples"],
        json!(["1.17.1", "16w02a"])
    );
}

#[test]
fn index_files_are_unique_index_entries() {
    let index = schema(DocumentKind::Index);
    let entry = defs::catalog(&DefsOptions::default())
        .schema_for(INDEX_FILE)
        .unwrap();
    let files = &index["properties"]["files"];

    assert_eq!(files["type"], "array");
    assert_eq!(files["uniqueItems"], true);
    assert_eq!(&files["items"], entry.as_value());
    assert_eq!(files["items"]["required"], json!(["file", "hash"]));
    assert_eq!(files["items"]["properties"]["preserve"]["default"], false);
}

#[test]
fn index_hash_format_stacks_declarations() {
    let index = schema(DocumentKind::Index);
    let hash_format = &index["properties"]["hash-format"];

    assert_eq!(index["required"], json!(["hash-format"]));
    assert_eq!(hash_format["default"], "sha256");
    assert_eq!(hash_format["enum"], json!(HASH_FORMATS));
    assert!(
        hash_format["description"]
            .as_str()
            .unwrap()
            .starts_with("The default hash format for every file in the index.\n\nThe hash algorithm")
    );
}

#[test]
fn pack_format_is_pinned_only_when_strict() {
    let loose = schema(DocumentKind::Pack);
    let pinned = defs::document_schema(DocumentKind::Pack, &strict()).unwrap();
    let pinned = &pinned.as_value()["properties"]["pack-format"];
    let loose = &loose["properties"]["pack-format"];

    assert_eq!(loose["default"], LEGACY_PACK_FORMAT);
    assert_eq!(loose["pattern"], PACK_FORMAT_PATTERN);
    assert!(loose.get("const").is_none());
    assert_eq!(pinned["const"], "packwiz:1.1.0");
    assert!(pinned.get("pattern").is_none());
}

#[test]
fn strict_schema_ids() {
    let loose = schema(DocumentKind::Metafile);
    let pinned = defs::document_schema(DocumentKind::Metafile, &strict()).unwrap();

    assert_eq!(
        loose["$id"],
        "https://packwiz.infra.link/meta/format/v1/meta.json"
    );
    assert_eq!(
        pinned.as_value()["$id"],
        "https://packwiz.infra.link/meta/format/v1/strict/meta.json"
    );
}

#[test]
fn examples_are_embedded() {
    let options = DefsOptions {
        examples: ExampleDocuments {
            pack: "name = \"Example\"\n".to_string(),
            index: "hash-format = \"sha256\"\n".to_string(),
            metafile: "name = \"Borderless Mining\"\n".to_string(),
        },
        ..DefsOptions::default()
    };

    let pack = defs::document_schema(DocumentKind::Pack, &options).unwrap();
    let metafile = defs::document_schema(DocumentKind::Metafile, &options).unwrap();

    assert_eq!(pack.as_value()["examples"], json!(["name = \"Example\"\n"]));
    assert_eq!(
        metafile.as_value()["x-packwiz-spec-gen"]["exampleDoc"]
            .as_str()
            .map(|doc| doc.contains("borderless-mining.pw.toml")),
        Some(true)
    );
}

#[test]
fn metafile_side_defaults_to_both() {
    let metafile = schema(DocumentKind::Metafile);
    let side = &metafile["properties"]["side"];

    assert_eq!(metafile["required"], json!(["name", "filename", "download"]));
    assert_eq!(side["enum"], json!(["both", "client", "server"]));
    assert_eq!(side["default"], "both");
}

#[test]
fn update_sources_are_all_optional() {
    let metafile = schema(DocumentKind::Metafile);
    let update = &metafile["properties"]["update"];

    assert_eq!(update["required"], json!([]));
    assert_eq!(
        update["additionalProperties"]["title"],
        "Other update sources"
    );
    assert_eq!(
        update["properties"]["curseforge"]["required"],
        json!(["project-id", "file-id"])
    );
    assert_eq!(
        update["properties"]["modrinth"]["required"],
        json!(["mod-id", "version"])
    );
}

#[test]
fn legacy_mod_keeps_shape_with_own_wording() {
    let metafile = schema(DocumentKind::Metafile);
    let legacy = schema(DocumentKind::Mod);

    assert_eq!(legacy["required"], metafile["required"]);
    assert_eq!(legacy["title"], "mod.pw.toml");
    assert!(
        legacy["properties"]["name"]["description"]
            .as_str()
            .unwrap()
            .starts_with("The name of the mod")
    );
    assert_eq!(
        legacy["properties"]["name"]["type"],
        metafile["properties"]["name"]["type"]
    );

    let download = &legacy["properties"]["download"];
    assert_eq!(
        download["description"],
        "Information about how to download this mod."
    );
    assert_eq!(download["required"], json!(["url", "hash", "hash-format"]));
    assert!(
        download["properties"]["url"]["description"]
            .as_str()
            .unwrap()
            .starts_with("The URL to download the mod from.\n\n")
    );
}

#[test]
fn legacy_mod_leaves_metafile_untouched() {
    let metafile = schema(DocumentKind::Metafile);

    assert!(
        metafile["properties"]["name"]["description"]
            .as_str()
            .unwrap()
            .starts_with("A human-readable name for the file")
    );
    assert_eq!(
        metafile["properties"]["download"]["description"],
        "Information about how to download the external file."
    );
}

#[test]
fn patterns_compile_and_match() {
    let path = Regex::new(PATH_PATTERN).unwrap();
    let pack_format = Regex::new(PACK_FORMAT_PATTERN).unwrap();

    assert!(path.is_match("mods/borderless-mining.pw.toml"));
    assert!(path.is_match("config/my mod [1].json"));
    assert!(!path.is_match("mods//double.toml"));
    assert!(!path.is_match("C:\\mods\\file.jar"));

    assert!(pack_format.is_match("packwiz:1.1.0"));
    assert!(pack_format.is_match("packwiz:2.0.0-rc.1+build.5"));
    assert!(!pack_format.is_match("packwiz:1.1"));
    assert!(!pack_format.is_match("1.1.0"));
    assert!(!pack_format.is_match("packwiz:01.0.0"));
}

#[test]
fn document_kinds() {
    for kind in DocumentKind::ALL {
        assert_eq!(DocumentKind::from_slug(kind.slug()), Some(kind));
    }

    assert_eq!(DocumentKind::Metafile.schema_file(), "meta.json");
    assert_eq!(DocumentKind::Mod.to_string(), "mod.pw.toml");
    assert!(DocumentKind::CURRENT.iter().all(|kind| !kind.is_legacy()));
    assert_eq!(DocumentKind::from_slug("modpack"), None);
}

#[test]
fn catalog_defines_every_referenced_model() {
    let catalog = defs::catalog(&DefsOptions::default());

    for id in catalog.model_ids() {
        assert!(catalog.instantiate(id).is_ok(), "{id} failed to instantiate");
    }
}
