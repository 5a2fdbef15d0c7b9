//! Command-line front end: writes the packwiz JSON schemas and their
//! Markdown reference pages.

use std::{error::Error, path::PathBuf, process};

use clap::{Args, Parser, Subcommand};
use packwiz_spec::{
    SpecError,
    config::{CONFIG_FILE, GeneratorConfig},
    defs::{self, DefsOptions, DocumentKind},
    generate::{Generator, config_reference, render_schema_file, to_tab_json},
    schema::Catalog,
    tracing_config,
};
use tracing::error;

#[derive(Parser)]
#[command(name = "packwiz-spec-gen")]
#[command(about = "Generate JSON schemas and reference docs for the packwiz pack format")]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one JSON schema per document
    Schemas {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Also write the legacy mod.pw.toml schema
        #[arg(long)]
        include_legacy: bool,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Write one Markdown reference page per document
    Docs {
        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the Markdown reference for a JSON schema file
    Markdown {
        /// Schema file to render
        schema: PathBuf,
        /// Use plain-text property titles
        #[arg(long)]
        plain_titles: bool,
    },
    /// Print the JSON schema of one document
    Show {
        /// Document slug: pack, index, meta or mod
        #[arg(value_parser = parse_document)]
        document: DocumentKind,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the declared models, one model's fields, or one field's metadata
    Models {
        /// Model id, e.g. `Index.IndexFile`
        model: Option<String>,
        /// Field name within the model
        field: Option<String>,
    },
    /// Print the Markdown reference for the configuration file
    ConfigDocs,
    /// List the documents of the format
    List,
}

#[derive(Args)]
struct CommonArgs {
    /// Generate strict schemas
    #[arg(long)]
    strict: bool,
    /// Directory holding the example pack
    #[arg(long)]
    example_pack: Option<PathBuf>,
}

impl CommonArgs {
    fn apply(self, config: &mut GeneratorConfig) {
        config.strict |= self.strict;
        if let Some(dir) = self.example_pack {
            config.example_pack = dir;
        }
    }
}

fn parse_document(slug: &str) -> Result<DocumentKind, String> {
    DocumentKind::from_slug(slug).ok_or_else(|| {
        let known: Vec<&str> = DocumentKind::ALL.iter().map(DocumentKind::slug).collect();
        format!("unknown document '{slug}', expected one of: {}", known.join(", "))
    })
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tracing_config::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    if let Err(e) = run(cli) {
        match e.downcast_ref::<SpecError>() {
            Some(spec) if spec.is_declaration_defect() => {
                error!(error = %spec, "model declaration is invalid");
            }
            _ => error!("{e}"),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = GeneratorConfig::load(&cli.config)?;

    match cli.command {
        Commands::Schemas {
            out,
            include_legacy,
            common,
        } => {
            common.apply(&mut config);
            config.include_legacy |= include_legacy;
            if let Some(dir) = out {
                config.schema_dir = dir;
            }
            let written = Generator::new(config).write_schemas()?;
            println!("Generated {} schemas", written.len());
        }
        Commands::Docs { out, common } => {
            common.apply(&mut config);
            if let Some(dir) = out {
                config.docs_dir = dir;
            }
            let written = Generator::new(config).write_docs()?;
            println!("Generated {} reference pages", written.len());
        }
        Commands::Markdown {
            schema,
            plain_titles,
        } => {
            if plain_titles {
                config.enhanced_titles = false;
            }
            println!("{}", render_schema_file(&schema, config.render_options())?);
        }
        Commands::Show { document, common } => {
            common.apply(&mut config);
            let options = Generator::new(config).defs_options()?;
            println!("{}", to_tab_json(&defs::document_schema(document, &options)?)?);
        }
        Commands::Models { model, field } => {
            let options = DefsOptions {
                strict: config.strict,
                format_version: config.format_version,
                ..DefsOptions::default()
            };
            describe_models(&defs::catalog(&options), model.as_deref(), field.as_deref())?;
        }
        Commands::ConfigDocs => {
            println!("{}", config_reference(config.render_options())?);
        }
        Commands::List => {
            println!("Documents:");
            for kind in DocumentKind::ALL {
                let legacy = if kind.is_legacy() { " (legacy)" } else { "" };
                println!("  - {} -> {}{}", kind, kind.schema_file(), legacy);
            }
        }
    }

    Ok(())
}

fn describe_models(
    catalog: &Catalog,
    model: Option<&str>,
    field: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let Some(name) = model else {
        for id in catalog.model_ids() {
            println!("{id} ({} fields)", catalog.registry().lookup(id).len());
        }
        return Ok(());
    };

    let id = catalog
        .model_ids()
        .into_iter()
        .find(|id| id.as_str() == name)
        .ok_or_else(|| format!("no model named '{name}'"))?;
    let table = catalog.registry().lookup(id);

    match field {
        Some(field) => {
            let metadata = table
                .get(field)
                .ok_or_else(|| format!("model '{id}' has no field '{field}'"))?;
            println!("{metadata:#?}");
        }
        None => {
            let required = table.required_fields();
            for field in table.names() {
                let marker = if required.iter().any(|name| name == field) {
                    " (required)"
                } else {
                    ""
                };
                println!("{field}{marker}");
            }
        }
    }

    Ok(())
}
